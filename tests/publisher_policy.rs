//! End-to-end checks of the marker id/namespace/lifetime policy through the
//! public API, observed via the recording sink.

use drishti_viz::{
    Color, ManualClock, MarkerAction, MarkerKind, MarkerPublisher, MemorySink, Point3,
    WaypointTint,
};

fn setup() -> (MemorySink, ManualClock, MarkerPublisher<MemorySink, ManualClock>) {
    let sink = MemorySink::new();
    let clock = ManualClock::new(1_000_000);
    let publisher = MarkerPublisher::new(sink.clone(), clock.clone());
    (sink, clock, publisher)
}

#[test]
fn exploration_session_marker_stream() {
    let (sink, clock, mut viz) = setup();

    // A typical exploration tick: fence, current pose, candidate, voxels
    viz.publish_geofence(Point3::new(-5.0, -5.0, 0.0), Point3::new(5.0, 5.0, 3.0));
    viz.publish_current_position(Point3::new(0.0, 0.0, 1.0));
    viz.publish_frontier_candidate(Point3::new(2.0, 2.0, 1.0), true);
    for (i, occupied) in [true, false, false].iter().enumerate() {
        viz.publish_voxel(
            Point3::new(2.0 + i as f32 * 0.2, 2.0, 1.0),
            *occupied,
            i as i32,
            0.2,
        );
    }

    clock.advance(100_000);

    // Planner answers: path arrow plus waypoints
    viz.publish_start(Point3::new(0.0, 0.0, 1.0));
    viz.publish_goal(Point3::new(2.0, 2.0, 1.0));
    viz.publish_path_arrow(Point3::new(0.0, 0.0, 1.0), Point3::new(2.0, 2.0, 1.0), 1);
    viz.publish_waypoint(Point3::new(1.0, 1.0, 1.0), 0.15, WaypointTint::Soft, 0);

    let markers = sink.markers();
    assert_eq!(markers.len(), 10);

    // Frame and action conventions hold across every marker
    for marker in &markers {
        assert_eq!(marker.frame_id, "/map");
        assert_eq!(marker.action, MarkerAction::Add);
    }

    // Fixed roles occupy their reserved slots
    let find = |ns: &str| markers.iter().find(|m| m.ns == ns).unwrap();
    assert_eq!(find("geofence").id, 20);
    assert_eq!(find("current_position").id, 21);
    assert_eq!(find("start").id, 22);
    assert_eq!(find("goal").id, 23);
    assert_eq!(find("frontier_candidate").id, 10);

    // Voxels coexist under one namespace with caller-supplied ids
    let voxel_ids: Vec<i32> = markers
        .iter()
        .filter(|m| m.ns == "frontier_neighborhood")
        .map(|m| m.id)
        .collect();
    assert_eq!(voxel_ids, vec![0, 1, 2]);

    // Markers published after the clock advanced carry the later stamp
    assert_eq!(find("geofence").stamp_us, 1_000_000);
    assert_eq!(find("goal").stamp_us, 1_100_000);
}

#[test]
fn replacement_key_is_stable_across_republish() {
    let (sink, _clock, mut viz) = setup();

    viz.publish_goal(Point3::new(1.0, 0.0, 0.0));
    viz.publish_goal(Point3::new(-1.0, 0.0, 0.0));
    viz.publish_goal(Point3::new(0.0, 3.0, 0.0));

    let markers = sink.markers();
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|m| m.ns == "goal" && m.id == 23));
    // Geometry differs each time; only the key is stable
    assert_ne!(markers[0].pose.position, markers[1].pose.position);
}

#[test]
fn geofence_wireframe_is_well_formed() {
    let (sink, _clock, mut viz) = setup();

    // Corners given max-first: the builder normalizes per axis
    viz.publish_geofence(Point3::new(4.0, 4.0, 4.0), Point3::new(0.0, 0.0, 0.0));

    let markers = sink.markers();
    let fence = &markers[0];
    assert_eq!(fence.kind, MarkerKind::LineList);
    assert_eq!(fence.points.len(), 24);
    assert_eq!(fence.color, Color::WHITE);

    // Every segment spans exactly one axis of the normalized box
    for pair in fence.points.chunks_exact(2) {
        let diffs = [
            pair[0].x != pair[1].x,
            pair[0].y != pair[1].y,
            pair[0].z != pair[1].z,
        ]
        .iter()
        .filter(|d| **d)
        .count();
        assert_eq!(diffs, 1);
    }
}

#[test]
fn delete_all_clears_via_batch() {
    let (sink, _clock, mut viz) = setup();

    viz.publish_safety_margin(Point3::new(1.0, 1.0, 1.0), 0.4, 3);
    viz.publish_delete_all();

    let batches = sink.batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].markers[0].ns, "frontier_safety_margin");
    assert_eq!(batches[1].markers.len(), 1);
    assert_eq!(batches[1].markers[0].action, MarkerAction::DeleteAll);
}
