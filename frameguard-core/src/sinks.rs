//! Metrics sinks
//!
//! Ready-made [`MetricsSink`] implementations. The pipeline passes reports to
//! a sink after `observe` returns:
//!
//! ```rust
//! use frameguard_core::{FrameMonitor, MetricsSink, MetricsSnapshot};
//! use frameguard_core::sinks::FnSink;
//!
//! let mut monitor = FrameMonitor::new();
//! let mut reported = 0;
//! let mut sink = FnSink::new(|_: &MetricsSnapshot| reported += 1);
//!
//! for seq in 0..250 {
//!     let report = monitor.observe_bytes(&[0xFF, 0xD8, 0x00, 0xFF, 0xD9], seq);
//!     sink.publish_report(&report);
//! }
//! drop(sink);
//! assert_eq!(reported, 3);
//! ```

use crate::{metrics::MetricsSnapshot, traits::MetricsSink};

#[cfg(feature = "log")]
use crate::monitor::Report;

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn publish_snapshot(&mut self, _snapshot: &MetricsSnapshot) {}
}

/// Forwards snapshots to a closure
pub struct FnSink<F> {
    callback: F,
}

impl<F: FnMut(&MetricsSnapshot)> FnSink<F> {
    /// Wrap a snapshot callback
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: FnMut(&MetricsSnapshot)> MetricsSink for FnSink<F> {
    fn publish_snapshot(&mut self, snapshot: &MetricsSnapshot) {
        (self.callback)(snapshot);
    }
}

/// Writes reports through the `log` facade
///
/// Snapshots go out at info level. Invalid frames and size anomalies go
/// out at warn level with the frame's boundary bytes or its deviation.
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[cfg(feature = "log")]
impl MetricsSink for LogSink {
    fn publish_snapshot(&mut self, snapshot: &MetricsSnapshot) {
        log::info!(
            "Frame {}: avg_size={}, error_count={}, anomalies={}, observed={}",
            snapshot.frame_sequence_number,
            snapshot.average_size,
            snapshot.error_count,
            snapshot.anomaly_count,
            snapshot.frames_observed,
        );
    }

    fn publish_report(&mut self, report: &Report) {
        if !report.is_valid() {
            match report.result.boundary {
                Some(boundary) => log::warn!(
                    "Frame {}: invalid frame ({}), size={}, head={:02X?}, tail={:02X?}",
                    report.sequence_number,
                    report.failure_reason().name(),
                    report.frame_size,
                    boundary.head,
                    boundary.tail,
                ),
                None => log::warn!(
                    "Frame {}: invalid frame ({}), size={}",
                    report.sequence_number,
                    report.failure_reason().name(),
                    report.frame_size,
                ),
            }
        }

        if report.is_anomalous() {
            log::warn!(
                "Frame {}: unusual size={} (avg={}, diff={:.1}%)",
                report.sequence_number,
                report.frame_size,
                report.anomaly.average,
                report.anomaly.deviation_percent(),
            );
        }

        if let Some(snapshot) = &report.snapshot {
            self.publish_snapshot(snapshot);
        }
    }
}
