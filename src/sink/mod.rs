//! Sink boundary for marker delivery.
//!
//! Publishing is fire-and-forget: the core never learns whether delivery
//! succeeded, and sinks must not block the caller. Concrete sinks log
//! delivery problems and move on.

use crate::markers::{Marker, MarkerBatch};

mod memory;
mod tcp;

pub use memory::MemorySink;
pub use tcp::TcpSink;

/// Fire-and-forget marker consumer.
pub trait MarkerSink: Send {
    /// Deliver a single marker.
    fn publish(&mut self, marker: &Marker);

    /// Deliver a batch of markers in one call.
    fn publish_batch(&mut self, batch: &MarkerBatch);
}
