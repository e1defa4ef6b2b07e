//! Core traits
//!
//! The seams where a pipeline plugs its own behavior into the monitor:
//! how a frame is checked, where snapshots go, and what happens to a frame
//! after it was observed. Keep them small - the monitor only needs one
//! method from each.

use crate::{
    metrics::MetricsSnapshot,
    monitor::Report,
    policy::Disposition,
    validators::ValidationResult,
};

/// Structural check of an encoded frame
pub trait Validator {
    /// Validate the frame bytes; must not read outside `bytes`
    fn validate(&self, bytes: &[u8]) -> ValidationResult;
}

/// Destination for monitor output (log, telemetry channel, UI)
///
/// Called by the pipeline after `observe` returns, never from inside it.
pub trait MetricsSink {
    /// Publish a periodic snapshot
    fn publish_snapshot(&mut self, snapshot: &MetricsSnapshot);

    /// Publish a whole per-frame report
    ///
    /// The default forwards the snapshot, if the report carries one.
    fn publish_report(&mut self, report: &Report) {
        if let Some(snapshot) = &report.snapshot {
            self.publish_snapshot(snapshot);
        }
    }
}

/// Caller-owned decision on what to do with an observed frame
pub trait DispositionPolicy {
    /// Decide the frame's fate from its report
    fn decide(&mut self, report: &Report) -> Disposition;
}
