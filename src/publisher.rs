//! The single publish layer.
//!
//! [`MarkerPublisher`] wraps every pure builder with a sink call, so callers
//! never have to remember which operations publish and which only build.
//! Each call stamps its marker from the injected clock and hands it to the
//! sink; no state survives between calls.

use crate::core::clock::Clock;
use crate::core::types::{Aabb, Color, Point3};
use crate::markers::builders;
use crate::markers::registry::{position_color, MarkerRole, WaypointTint, NS_SAFETY_MARGIN};
use crate::markers::{Marker, MarkerBatch};
use crate::sink::MarkerSink;

/// Builds and publishes debug markers through an injected sink.
pub struct MarkerPublisher<S: MarkerSink, C: Clock> {
    sink: S,
    clock: C,
}

impl<S: MarkerSink, C: Clock> MarkerPublisher<S, C> {
    /// Create a publisher over `sink`, stamping markers from `clock`.
    pub fn new(sink: S, clock: C) -> Self {
        Self { sink, clock }
    }

    /// White wireframe of the geofence box. Occupies the Geofence slot, so
    /// each call replaces the previous fence.
    pub fn publish_geofence(&mut self, min: Point3, max: Point3) {
        self.publish_geofence_colored(min, max, Color::WHITE);
    }

    /// Geofence wireframe with an explicit color.
    pub fn publish_geofence_colored(&mut self, min: Point3, max: Point3, color: Color) {
        let (ns, id) = MarkerRole::Geofence.key();
        let mut marker = builders::cube_wire(Aabb::from_corners(min, max), color, self.now());
        marker.ns = ns.to_string();
        marker.id = id;
        self.sink.publish(&marker);
    }

    /// Wireframe of the safety margin around a frontier point, delivered as
    /// a one-element batch. Ids are caller-keyed so several margins coexist.
    pub fn publish_safety_margin(&mut self, frontier: Point3, margin: f32, id: i32) {
        let aabb = Aabb::from_center_margin(frontier, margin);
        let mut marker = builders::cube_wire(aabb, Color::WHITE, self.now());
        marker.ns = NS_SAFETY_MARGIN.to_string();
        marker.id = id;
        self.sink.publish_batch(&MarkerBatch::single(marker));
    }

    /// Occupancy cube for one voxel: red occupied, green free.
    pub fn publish_voxel(&mut self, center: Point3, occupied: bool, id: i32, size: f32) {
        let marker = builders::voxel(center, occupied, id, size, self.now());
        self.sink.publish(&marker);
    }

    /// Cyan cube at the vehicle's current position.
    pub fn publish_current_position(&mut self, position: Point3) {
        self.publish_role_cube(MarkerRole::CurrentPosition, position);
    }

    /// Yellow cube at the planning start.
    pub fn publish_start(&mut self, position: Point3) {
        self.publish_role_cube(MarkerRole::Start, position);
    }

    /// Orange cube at the planning goal.
    pub fn publish_goal(&mut self, position: Point3) {
        self.publish_role_cube(MarkerRole::Goal, position);
    }

    /// Dark blue cube at the sensing position.
    pub fn publish_sensing_position(&mut self, position: Point3) {
        self.publish_role_cube(MarkerRole::SensingPosition, position);
    }

    fn publish_role_cube(&mut self, role: MarkerRole, position: Point3) {
        let (ns, id) = role.key();
        let marker = builders::small_cube(position, position_color(role), ns, id, self.now());
        self.sink.publish(&marker);
    }

    /// Candidate cube: blue when `is_frontier`, gray otherwise. Single slot;
    /// each call replaces the previous candidate.
    pub fn publish_frontier_candidate(&mut self, position: Point3, is_frontier: bool) {
        let marker = builders::frontier_candidate(position, is_frontier, self.now());
        self.sink.publish(&marker);
    }

    /// Arrow from path start to goal, keyed by planner request id.
    pub fn publish_path_arrow(&mut self, start: Point3, goal: Point3, request_id: i32) {
        let marker = builders::path_arrow(start, goal, request_id, self.now());
        self.sink.publish(&marker);
    }

    /// Waypoint cube along a published path.
    pub fn publish_waypoint(&mut self, center: Point3, size: f32, tint: WaypointTint, id: i32) {
        let marker = builders::waypoint(center, size, tint, id, self.now());
        self.sink.publish(&marker);
    }

    /// Clear every marker in every namespace, as a one-element batch.
    pub fn publish_delete_all(&mut self) {
        let marker = builders::delete_all(self.now());
        self.sink.publish_batch(&MarkerBatch::single(marker));
    }

    /// Build-only variant of the path arrow, for callers that aggregate
    /// markers into their own batches.
    pub fn build_path_arrow(&self, start: Point3, goal: Point3, request_id: i32) -> Marker {
        builders::path_arrow(start, goal, request_id, self.now())
    }

    /// Build-only variant of the waypoint cube.
    pub fn build_waypoint(
        &self,
        center: Point3,
        size: f32,
        tint: WaypointTint,
        id: i32,
    ) -> Marker {
        builders::waypoint(center, size, tint, id, self.now())
    }

    /// Publish a batch assembled by the caller.
    pub fn publish_batch(&mut self, batch: &MarkerBatch) {
        self.sink.publish_batch(batch);
    }

    fn now(&self) -> u64 {
        self.clock.now_us()
    }
}
