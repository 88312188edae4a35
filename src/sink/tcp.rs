//! Marker streaming sink over TCP sockets.
//!
//! Broadcasts markers to external viewers over TCP. Uses a lock-free queue
//! architecture so publishing never blocks the caller: a dedicated publisher
//! thread owns the TCP listener, and callers push to bounded queues.

use crate::config::VizConfig;
use crate::error::Result;
use crate::markers::{Marker, MarkerBatch};
use crate::sink::MarkerSink;
use crossbeam_queue::ArrayQueue;
use log::{debug, error, info, warn};
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Topic name for single markers.
const TOPIC_MARKER: &str = "marker";

/// Topic name for marker batches.
const TOPIC_BATCH: &str = "marker_array";

/// TCP sink that broadcasts markers to all connected clients.
///
/// `publish` is a `try_push` onto a bounded queue and returns immediately;
/// when the queue is full the marker is dropped and a warning logged.
pub struct TcpSink {
    marker_queue: Arc<ArrayQueue<Marker>>,
    batch_queue: Arc<ArrayQueue<MarkerBatch>>,
    publisher_thread: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl TcpSink {
    /// Create a new TCP sink bound per `config`.
    ///
    /// Spawns the dedicated publisher thread that owns the TCP listener.
    pub fn new(config: &VizConfig) -> Result<Self> {
        let marker_queue = Arc::new(ArrayQueue::new(config.queue_capacity));
        let batch_queue = Arc::new(ArrayQueue::new(config.queue_capacity));

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);
        let bind_address = config.bind_address.clone();
        let marker_queue_clone = Arc::clone(&marker_queue);
        let batch_queue_clone = Arc::clone(&batch_queue);

        let publisher_thread = thread::Builder::new()
            .name("marker-publisher".to_string())
            .spawn(move || {
                if let Err(e) = Self::publisher_thread_loop(
                    &bind_address,
                    marker_queue_clone,
                    batch_queue_clone,
                    shutdown_clone,
                ) {
                    error!("Marker publisher thread error: {}", e);
                }
            })?;

        info!("TCP marker sink started on {}", config.bind_address);

        Ok(Self {
            marker_queue,
            batch_queue,
            publisher_thread: Some(publisher_thread),
            shutdown,
        })
    }

    /// Publisher thread main loop - owns the TCP listener.
    fn publisher_thread_loop(
        bind_address: &str,
        marker_queue: Arc<ArrayQueue<Marker>>,
        batch_queue: Arc<ArrayQueue<MarkerBatch>>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        let listener = TcpListener::bind(bind_address)?;
        listener.set_nonblocking(true)?;

        info!("Marker publisher: TCP listener bound to {}", bind_address);

        let mut clients: Vec<TcpStream> = Vec::new();
        let mut published = 0u64;

        // Reusable buffer for frame assembly (avoids allocations)
        let mut frame_buffer = Vec::with_capacity(4096);

        while !shutdown.load(Ordering::Relaxed) {
            // Accept new client connections (non-blocking)
            match listener.accept() {
                Ok((stream, addr)) => {
                    if let Err(e) = stream.set_nonblocking(false) {
                        warn!("Failed to set blocking mode for client {}: {}", addr, e);
                    } else {
                        info!("New marker client connected: {}", addr);
                        clients.push(stream);
                    }
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    // No new connections, continue
                }
                Err(e) => {
                    error!("Error accepting marker client: {}", e);
                }
            }

            // Drain queued markers (bounded batch to avoid starving accept)
            let mut drained = 0;
            while let Some(marker) = marker_queue.pop() {
                if let Err(e) =
                    Self::broadcast(&mut clients, TOPIC_MARKER, &marker, &mut frame_buffer)
                {
                    debug!("Failed to publish marker: {}", e);
                } else {
                    published += 1;
                }
                drained += 1;
                if drained >= 50 {
                    break;
                }
            }

            let mut drained = 0;
            while let Some(batch) = batch_queue.pop() {
                if let Err(e) = Self::broadcast(&mut clients, TOPIC_BATCH, &batch, &mut frame_buffer)
                {
                    debug!("Failed to publish marker batch: {}", e);
                } else {
                    published += 1;
                }
                drained += 1;
                if drained >= 10 {
                    break;
                }
            }

            // Sleep briefly if queues are empty (reduce CPU usage)
            if marker_queue.is_empty() && batch_queue.is_empty() {
                thread::sleep(Duration::from_millis(10));
            }
        }

        info!("Marker publisher exiting ({} frames published)", published);
        Ok(())
    }

    /// Broadcast one message to all connected clients.
    ///
    /// Frame format: [4-byte length (big-endian)][topic (null-terminated)][MessagePack payload]
    fn broadcast<T: serde::Serialize>(
        clients: &mut Vec<TcpStream>,
        topic: &str,
        message: &T,
        buffer: &mut Vec<u8>,
    ) -> Result<()> {
        let payload = rmp_serde::to_vec(message)?;

        buffer.clear();
        buffer.reserve(4 + topic.len() + 1 + payload.len());

        let frame_length = (topic.len() + 1 + payload.len()) as u32;
        buffer.extend_from_slice(&frame_length.to_be_bytes());
        buffer.extend_from_slice(topic.as_bytes());
        buffer.push(0); // Null terminator for topic
        buffer.extend_from_slice(&payload);

        // Send to all clients, removing disconnected ones
        clients.retain_mut(|client| match client.write_all(buffer) {
            Ok(_) => true,
            Err(e) => {
                if let Ok(addr) = client.peer_addr() {
                    debug!("Marker client {} disconnected: {}", addr, e);
                }
                false
            }
        });

        Ok(())
    }

    /// Request publisher thread shutdown.
    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        info!("TCP marker sink shutdown requested");
    }
}

impl MarkerSink for TcpSink {
    fn publish(&mut self, marker: &Marker) {
        if self.marker_queue.push(marker.clone()).is_err() {
            warn!(
                "Marker queue full, dropping marker ({}, {})",
                marker.ns, marker.id
            );
        }
    }

    fn publish_batch(&mut self, batch: &MarkerBatch) {
        if self.batch_queue.push(batch.clone()).is_err() {
            warn!(
                "Marker batch queue full, dropping batch of {}",
                batch.markers.len()
            );
        }
    }
}

impl Drop for TcpSink {
    fn drop(&mut self) {
        self.stop();

        // Wait for publisher thread to finish
        if let Some(thread) = self.publisher_thread.take() {
            let _ = thread.join();
        }
    }
}
