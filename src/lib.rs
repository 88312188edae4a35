//! DrishtiViz - Debug-marker construction and publishing
//!
//! Translates plain 3D points and flags from an exploration / path-planning
//! stack into renderable marker records (wireframe boxes, small cubes, arrows)
//! with fixed geometry, color, scale, and lifetime conventions, then hands
//! them to a pluggable publish/subscribe sink.
//!
//! # Architecture
//!
//! ```text
//! caller ──▶ MarkerPublisher ──▶ builders (pure) ──▶ MarkerSink
//!                 │                                      │
//!              Clock (stamps)                  MemorySink / TcpSink
//! ```
//!
//! All marker construction is pure: builders take typed inputs plus a
//! timestamp and return a [`Marker`]. The publisher is the only layer that
//! talks to the sink, so every marker follows the same build-then-publish
//! contract. Markers are keyed consumer-side by `(namespace, id)`: publishing
//! the same key replaces, a different id in the same namespace coexists.

pub mod config;
pub mod core;
pub mod error;
pub mod markers;
pub mod publisher;
pub mod sink;

// Re-export commonly used types
pub use config::VizConfig;
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::types::{Aabb, Color, Point3, Pose, Quaternion};
pub use error::{Error, Result};
pub use markers::registry::{MarkerRole, WaypointTint};
pub use markers::{Marker, MarkerAction, MarkerBatch, MarkerKind};
pub use publisher::MarkerPublisher;
pub use sink::{MarkerSink, MemorySink, TcpSink};
