//! Recording sink for tests.

use super::MarkerSink;
use crate::markers::{Marker, MarkerBatch};
use std::sync::{Arc, Mutex};

/// In-memory sink that records everything published to it.
///
/// Clones share the same buffers, so a test can keep one handle for
/// inspection while a publisher owns the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemorySinkInner>>,
}

#[derive(Default)]
struct MemorySinkInner {
    markers: Vec<Marker>,
    batches: Vec<MarkerBatch>,
}

impl MemorySink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All single markers published so far, in order.
    pub fn markers(&self) -> Vec<Marker> {
        self.inner.lock().unwrap().markers.clone()
    }

    /// All batches published so far, in order.
    pub fn batches(&self) -> Vec<MarkerBatch> {
        self.inner.lock().unwrap().batches.clone()
    }

    /// Number of single-marker publishes.
    pub fn marker_count(&self) -> usize {
        self.inner.lock().unwrap().markers.len()
    }

    /// Clear all recorded publishes.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.markers.clear();
        inner.batches.clear();
    }
}

impl MarkerSink for MemorySink {
    fn publish(&mut self, marker: &Marker) {
        self.inner.lock().unwrap().markers.push(marker.clone());
    }

    fn publish_batch(&mut self, batch: &MarkerBatch) {
        self.inner.lock().unwrap().batches.push(batch.clone());
    }
}
