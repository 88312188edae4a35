//! Marker role registry and rendering policy constants.
//!
//! Centralizes the `(namespace, id)` allocation for every fixed semantic
//! role, plus the scale, color, and lifetime conventions shared by the
//! builders. Each fixed role owns exactly one consumer-side slot, so
//! re-publishing a role implicitly replaces its previous marker.

use crate::core::types::Color;

/// Reference frame for every marker produced by this crate.
pub const FRAME_ID: &str = "/map";

/// Line thickness for wireframe boxes.
pub const LINE_WIDTH: f32 = 0.2;

/// Edge length of the small position/candidate cubes.
pub const SMALL_SCALE: f32 = 0.2;

/// Arrow shaft diameter.
pub const ARROW_SHAFT: f32 = 0.1;

/// Arrow head diameter.
pub const ARROW_HEAD: f32 = 0.3;

/// Lifetime meaning "persist until replaced or deleted".
pub const LIFETIME_PERSIST_US: u64 = 0;

/// Lifetime of voxel occupancy markers (4 s).
pub const LIFETIME_VOXEL_US: u64 = 4_000_000;

/// Lifetime of small position markers (7 s).
pub const LIFETIME_SMALL_US: u64 = 7_000_000;

/// Namespace for safety-margin wireframes (caller-keyed ids).
pub const NS_SAFETY_MARGIN: &str = "frontier_safety_margin";

/// Namespace for voxel occupancy cubes (caller-keyed ids).
pub const NS_VOXEL: &str = "frontier_neighborhood";

/// Namespace for planned-path arrows (keyed by request id).
pub const NS_PATH: &str = "lazy_theta_star_path";

/// Namespace for path waypoint cubes (caller-keyed ids).
pub const NS_WAYPOINT: &str = "lazy_theta_star_waypoint";

/// Fixed semantic roles, each owning one `(namespace, id)` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Geofence,
    CurrentPosition,
    Start,
    Goal,
    SensingPosition,
    FrontierCandidate,
}

impl MarkerRole {
    /// Namespace half of the consumer replacement key.
    pub fn namespace(self) -> &'static str {
        match self {
            MarkerRole::Geofence => "geofence",
            MarkerRole::CurrentPosition => "current_position",
            MarkerRole::Start => "start",
            MarkerRole::Goal => "goal",
            MarkerRole::SensingPosition => "sensing_position",
            MarkerRole::FrontierCandidate => "frontier_candidate",
        }
    }

    /// Id half of the consumer replacement key.
    pub fn id(self) -> i32 {
        match self {
            MarkerRole::Geofence => 20,
            MarkerRole::CurrentPosition => 21,
            MarkerRole::Start => 22,
            MarkerRole::Goal => 23,
            MarkerRole::SensingPosition => 24,
            MarkerRole::FrontierCandidate => 10,
        }
    }

    /// Both halves of the key at once.
    pub fn key(self) -> (&'static str, i32) {
        (self.namespace(), self.id())
    }
}

/// Fixed color of each small position role.
pub fn position_color(role: MarkerRole) -> Color {
    match role {
        MarkerRole::CurrentPosition => Color::rgb(0.0, 1.0, 1.0),
        MarkerRole::Start => Color::rgb(1.0, 1.0, 0.0),
        MarkerRole::Goal => Color::rgb(1.0, 0.5, 0.0),
        MarkerRole::SensingPosition => Color::rgb(0.0, 0.0, 0.25),
        // Geofence and frontier candidates carry their own color policy
        MarkerRole::Geofence | MarkerRole::FrontierCandidate => Color::WHITE,
    }
}

/// Discrete green-channel tint for waypoint cubes.
///
/// Waypoints share a fixed base color (r=0.9, b=1.0, a=0.8); the tint
/// selects how strong the green channel is, so consecutive waypoints can be
/// told apart without free-form color math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaypointTint {
    Dim,
    Soft,
    Bright,
    Full,
}

impl WaypointTint {
    /// Green-channel value for this tint.
    pub fn green(self) -> f32 {
        match self {
            WaypointTint::Dim => 0.4,
            WaypointTint::Soft => 0.6,
            WaypointTint::Bright => 0.8,
            WaypointTint::Full => 1.0,
        }
    }

    /// Full waypoint color for this tint.
    pub fn color(self) -> Color {
        Color::rgba(0.9, self.green(), 1.0, 0.8)
    }
}
