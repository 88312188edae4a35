//! Pure marker builders.
//!
//! Every builder takes typed inputs plus a timestamp and returns a fully
//! populated [`Marker`]. Nothing here publishes; the publisher layer owns
//! every sink call. All builders are total over finite floating-point input:
//! a degenerate or inverted box still yields a structurally valid marker.

use crate::core::types::{Aabb, Color, Point3, Pose};
use crate::markers::registry::{
    MarkerRole, WaypointTint, ARROW_HEAD, ARROW_SHAFT, LIFETIME_SMALL_US, LIFETIME_VOXEL_US,
    LINE_WIDTH, NS_PATH, NS_VOXEL, NS_WAYPOINT, SMALL_SCALE,
};
use crate::markers::{Marker, MarkerAction, MarkerKind};

/// Wireframe box: a line-list marker tracing the 12 edges of `aabb`.
///
/// Corners are labeled over {min, max} per axis:
///
/// ```text
/// A = (min, min, min)   B = (max, min, min)
/// C = (min, max, min)   D = (max, max, min)
/// E = (min, max, max)   F = (max, max, max)
/// G = (min, min, max)   H = (max, min, max)
/// ```
///
/// Segments are emitted in a fixed order so output is reproducible:
/// A-B, A-G, A-C, B-H, B-D, G-H, H-F, C-D, C-E, F-D, G-E, E-F.
/// Each pair differs in exactly one axis, so every segment is a true box
/// edge, never a face or space diagonal.
pub fn cube_wire(aabb: Aabb, color: Color, stamp_us: u64) -> Marker {
    let (min, max) = (aabb.min, aabb.max);
    let a = Point3::new(min.x, min.y, min.z);
    let b = Point3::new(max.x, min.y, min.z);
    let c = Point3::new(min.x, max.y, min.z);
    let d = Point3::new(max.x, max.y, min.z);
    let e = Point3::new(min.x, max.y, max.z);
    let f = Point3::new(max.x, max.y, max.z);
    let g = Point3::new(min.x, min.y, max.z);
    let h = Point3::new(max.x, min.y, max.z);

    let edges = [
        (a, b),
        (a, g),
        (a, c),
        (b, h),
        (b, d),
        (g, h),
        (h, f),
        (c, d),
        (c, e),
        (f, d),
        (g, e),
        (e, f),
    ];

    // ns/id are the caller's choice; cube_wire only owns the geometry
    let mut marker = Marker::new(MarkerKind::LineList, "", 0, stamp_us);
    marker.scale = Point3::splat(LINE_WIDTH);
    marker.color = Color::rgb(color.r, color.g, color.b);
    marker.points.reserve(edges.len() * 2);
    for (start, end) in edges {
        marker.points.push(start);
        marker.points.push(end);
    }
    marker
}

/// Small solid cube (0.2 edge, 7 s lifetime) at `center`.
///
/// Shared geometry for the current-position, start, goal, and
/// sensing-position roles.
pub fn small_cube(
    center: Point3,
    color: Color,
    ns: impl Into<String>,
    id: i32,
    stamp_us: u64,
) -> Marker {
    let mut marker = Marker::new(MarkerKind::Cube, ns, id, stamp_us);
    marker.pose = Pose::at(center);
    marker.scale = Point3::splat(SMALL_SCALE);
    marker.color = Color::rgb(color.r, color.g, color.b);
    marker.lifetime_us = LIFETIME_SMALL_US;
    marker
}

/// Voxel occupancy cube: red when occupied, green when free, 4 s lifetime.
///
/// Ids are caller-supplied so many voxels coexist in the namespace.
pub fn voxel(center: Point3, occupied: bool, id: i32, size: f32, stamp_us: u64) -> Marker {
    let mut marker = Marker::new(MarkerKind::Cube, NS_VOXEL, id, stamp_us);
    marker.pose = Pose::at(center);
    marker.scale = Point3::splat(size);
    marker.color = if occupied {
        Color::rgba(1.0, 0.0, 0.0, 0.8)
    } else {
        Color::rgba(0.0, 1.0, 0.0, 0.8)
    };
    marker.lifetime_us = LIFETIME_VOXEL_US;
    marker
}

/// Frontier candidate cube: blue when the point is a frontier, gray
/// otherwise. Always occupies the single FrontierCandidate slot, so each
/// candidate shown replaces the previous one.
pub fn frontier_candidate(center: Point3, is_frontier: bool, stamp_us: u64) -> Marker {
    let (ns, id) = MarkerRole::FrontierCandidate.key();
    let mut marker = Marker::new(MarkerKind::Cube, ns, id, stamp_us);
    marker.pose = Pose::at(center);
    marker.scale = Point3::splat(SMALL_SCALE);
    marker.color = if is_frontier {
        Color::rgba(0.0, 0.0, 1.0, 1.0)
    } else {
        Color::rgba(0.5, 0.5, 0.75, 1.0)
    };
    marker
}

/// Planned-path arrow from `start` to `goal`, keyed by planner request id.
///
/// Point order is head first (the consumer draws the polyline tail-to-head
/// from the last point, matching the established wire convention).
pub fn path_arrow(start: Point3, goal: Point3, request_id: i32, stamp_us: u64) -> Marker {
    let mut marker = Marker::new(MarkerKind::Arrow, NS_PATH, request_id, stamp_us);
    marker.points.push(goal);
    marker.points.push(start);
    marker.scale = Point3::new(ARROW_SHAFT, ARROW_HEAD, 0.0);
    marker.color = Color::from_u8(200, 100, 0);
    marker
}

/// Path waypoint cube with a caller-supplied size and discrete tint.
pub fn waypoint(
    center: Point3,
    size: f32,
    tint: WaypointTint,
    waypoint_id: i32,
    stamp_us: u64,
) -> Marker {
    let mut marker = Marker::new(MarkerKind::Cube, NS_WAYPOINT, waypoint_id, stamp_us);
    marker.pose = Pose::at(center);
    marker.scale = Point3::splat(size);
    marker.color = tint.color();
    marker
}

/// Delete-all marker: clears every namespace on the consumer side.
pub fn delete_all(stamp_us: u64) -> Marker {
    let mut marker = Marker::new(MarkerKind::Cube, "", 0, stamp_us);
    marker.action = MarkerAction::DeleteAll;
    marker
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn corner_set(marker: &Marker) -> HashSet<[u32; 3]> {
        // Bit patterns let corners live in a HashSet despite being floats
        marker
            .points
            .iter()
            .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
            .collect()
    }

    fn axes_differing(a: &Point3, b: &Point3) -> usize {
        [(a.x, b.x), (a.y, b.y), (a.z, b.z)]
            .iter()
            .filter(|(u, v)| u != v)
            .count()
    }

    #[test]
    fn test_cube_wire_emits_12_segments() {
        let aabb = Aabb::from_corners(Point3::new(-1.0, -2.0, -3.0), Point3::new(4.0, 5.0, 6.0));
        let marker = cube_wire(aabb, Color::WHITE, 0);
        assert_eq!(marker.kind, MarkerKind::LineList);
        assert_eq!(marker.points.len(), 24);
    }

    #[test]
    fn test_cube_wire_corners_are_box_corners() {
        let min = Point3::new(1.0, 2.0, 3.0);
        let max = Point3::new(4.0, 6.0, 8.0);
        let marker = cube_wire(Aabb::from_corners(min, max), Color::WHITE, 0);

        let mut expected = HashSet::new();
        for x in [min.x, max.x] {
            for y in [min.y, max.y] {
                for z in [min.z, max.z] {
                    expected.insert([x.to_bits(), y.to_bits(), z.to_bits()]);
                }
            }
        }
        assert_eq!(corner_set(&marker), expected);
    }

    #[test]
    fn test_cube_wire_segments_are_true_edges() {
        let aabb = Aabb::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 4.0));
        let marker = cube_wire(aabb, Color::WHITE, 0);
        for pair in marker.points.chunks_exact(2) {
            assert_eq!(
                axes_differing(&pair[0], &pair[1]),
                1,
                "segment {:?} -> {:?} is a diagonal",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_cube_wire_unit_cube_has_no_space_diagonal() {
        let aabb = Aabb::from_corners(Point3::ZERO, Point3::new(1.0, 1.0, 1.0));
        let marker = cube_wire(aabb, Color::WHITE, 0);
        assert_eq!(corner_set(&marker).len(), 8);
        for pair in marker.points.chunks_exact(2) {
            let connects_opposite = (pair[0] == Point3::ZERO
                && pair[1] == Point3::new(1.0, 1.0, 1.0))
                || (pair[1] == Point3::ZERO && pair[0] == Point3::new(1.0, 1.0, 1.0));
            assert!(!connects_opposite);
        }
    }

    #[test]
    fn test_cube_wire_inverted_corners_same_edges() {
        // Callers pass corners in either order; the box normalizes
        let a = Point3::new(3.0, 4.0, 5.0);
        let b = Point3::new(-1.0, -2.0, 0.0);
        let forward = cube_wire(Aabb::from_corners(b, a), Color::WHITE, 0);
        let swapped = cube_wire(Aabb::from_corners(a, b), Color::WHITE, 0);
        assert_eq!(forward.points, swapped.points);
        assert_eq!(forward.points.len(), 24);
    }

    #[test]
    fn test_cube_wire_degenerate_box_total() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let marker = cube_wire(Aabb::from_corners(p, p), Color::WHITE, 0);
        // All corners collapse but the structure stays intact
        assert_eq!(marker.points.len(), 24);
        assert_eq!(corner_set(&marker).len(), 1);
    }

    #[test]
    fn test_cube_wire_rendering_policy() {
        let aabb = Aabb::from_corners(Point3::ZERO, Point3::new(1.0, 1.0, 1.0));
        let marker = cube_wire(aabb, Color::rgba(0.2, 0.4, 0.6, 0.1), 77);
        assert_eq!(marker.scale, Point3::splat(LINE_WIDTH));
        // Alpha is forced opaque regardless of the supplied color
        assert_eq!(marker.color.a, 1.0);
        assert_eq!(marker.color.r, 0.2);
        assert_eq!(marker.stamp_us, 77);
        assert_eq!(marker.lifetime_us, 0);
    }

    #[test]
    fn test_voxel_colors_and_scale() {
        let occupied = voxel(Point3::new(1.0, 2.0, 3.0), true, 5, 0.5, 0);
        assert_eq!(occupied.color, Color::rgba(1.0, 0.0, 0.0, 0.8));
        assert_eq!(occupied.scale, Point3::splat(0.5));
        assert_eq!(occupied.ns, NS_VOXEL);
        assert_eq!(occupied.id, 5);
        assert_eq!(occupied.lifetime_us, LIFETIME_VOXEL_US);

        let free = voxel(Point3::new(1.0, 2.0, 3.0), false, 5, 0.5, 0);
        assert_eq!(free.color, Color::rgba(0.0, 1.0, 0.0, 0.8));
        assert_eq!(free.scale, Point3::splat(0.5));
    }

    #[test]
    fn test_frontier_candidate_fixed_slot() {
        let yes = frontier_candidate(Point3::new(9.0, 9.0, 9.0), true, 0);
        let no = frontier_candidate(Point3::ZERO, false, 0);
        assert_eq!(yes.ns, "frontier_candidate");
        assert_eq!(yes.id, 10);
        assert_eq!(no.ns, "frontier_candidate");
        assert_eq!(no.id, 10);
        assert_eq!(yes.color, Color::rgba(0.0, 0.0, 1.0, 1.0));
        assert_eq!(no.color, Color::rgba(0.5, 0.5, 0.75, 1.0));
        assert_eq!(yes.lifetime_us, 0);
    }

    #[test]
    fn test_small_cube_policy() {
        let marker = small_cube(Point3::new(1.0, 0.0, 2.0), Color::rgb(0.0, 1.0, 1.0), "ns", 7, 3);
        assert_eq!(marker.scale, Point3::splat(SMALL_SCALE));
        assert_eq!(marker.lifetime_us, LIFETIME_SMALL_US);
        assert_eq!(marker.pose.position, Point3::new(1.0, 0.0, 2.0));
        assert_eq!(marker.color.a, 1.0);
    }

    #[test]
    fn test_path_arrow_points_head_first() {
        let start = Point3::new(0.0, 0.0, 0.0);
        let goal = Point3::new(5.0, 0.0, 0.0);
        let marker = path_arrow(start, goal, 42, 0);
        assert_eq!(marker.kind, MarkerKind::Arrow);
        assert_eq!(marker.points, vec![goal, start]);
        assert_eq!(marker.id, 42);
        assert_eq!(marker.scale, Point3::new(ARROW_SHAFT, ARROW_HEAD, 0.0));
        assert_eq!(marker.color, Color::from_u8(200, 100, 0));
    }

    #[test]
    fn test_waypoint_tint_and_size() {
        let marker = waypoint(Point3::new(1.0, 1.0, 1.0), 0.3, WaypointTint::Bright, 9, 0);
        assert_eq!(marker.scale, Point3::splat(0.3));
        assert_eq!(marker.color, Color::rgba(0.9, 0.8, 1.0, 0.8));
        assert_eq!(marker.ns, NS_WAYPOINT);
        assert_eq!(marker.lifetime_us, 0);
    }

    #[test]
    fn test_delete_all_action() {
        let marker = delete_all(123);
        assert_eq!(marker.action, MarkerAction::DeleteAll);
        assert!(marker.points.is_empty());
    }
}
