//! Marker message types.
//!
//! A [`Marker`] is one renderable debug primitive: box edges, a small cube,
//! or an arrow. The consumer keys markers by `(ns, id)`: publishing the same
//! key replaces the previous marker, a different id in the same namespace
//! adds a coexisting one. A lifetime of zero means the marker persists until
//! replaced or deleted.

use serde::{Deserialize, Serialize};

use crate::core::types::{Color, Point3, Pose};
use crate::markers::registry::FRAME_ID;

pub mod builders;
pub mod registry;

/// Geometric primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Independent line segments; `points` holds consecutive pairs
    LineList,
    /// A solid cube at `pose`, sized by `scale`
    Cube,
    /// An arrow along a two-point polyline in `points`
    Arrow,
}

/// What the consumer should do with this marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerAction {
    /// Add the marker, replacing any previous one with the same `(ns, id)`
    Add,
    /// Clear every marker in every namespace
    DeleteAll,
}

/// A single renderable debug primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Geometric kind
    pub kind: MarkerKind,
    /// Reference frame, always [`FRAME_ID`]
    pub frame_id: String,
    /// Creation timestamp in microseconds since epoch
    pub stamp_us: u64,
    /// Namespace half of the consumer replacement key
    pub ns: String,
    /// Id half of the consumer replacement key
    pub id: i32,
    /// Add or delete-all
    pub action: MarkerAction,
    /// Position and orientation (identity orientation unless stated)
    pub pose: Pose,
    /// Per-axis scale; line width for LineList, shaft/head widths for Arrow
    pub scale: Point3,
    /// RGBA color
    pub color: Color,
    /// Lifetime in microseconds; 0 = persist until replaced or deleted
    pub lifetime_us: u64,
    /// Point data for LineList (segment pairs) and Arrow (two points)
    pub points: Vec<Point3>,
}

impl Marker {
    /// New Add-action marker in the fixed frame with identity pose, white
    /// color, zero lifetime, and no points.
    pub fn new(kind: MarkerKind, ns: impl Into<String>, id: i32, stamp_us: u64) -> Self {
        Self {
            kind,
            frame_id: FRAME_ID.to_string(),
            stamp_us,
            ns: ns.into(),
            id,
            action: MarkerAction::Add,
            pose: Pose::default(),
            scale: Point3::ZERO,
            color: Color::WHITE,
            lifetime_us: 0,
            points: Vec::new(),
        }
    }
}

/// An ordered batch of markers delivered in one publish call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerBatch {
    pub markers: Vec<Marker>,
}

impl MarkerBatch {
    /// Batch containing a single marker.
    pub fn single(marker: Marker) -> Self {
        Self {
            markers: vec![marker],
        }
    }
}
