//! Periodic metrics snapshots
//!
//! The reporter only decides *when* a snapshot is due and fills it in.
//! Publishing it is the job of a [`MetricsSink`](crate::traits::MetricsSink)
//! the pipeline calls after `observe` returns.
//!
//! ```rust
//! use frameguard_core::metrics::MetricsReporter;
//!
//! let reporter = MetricsReporter::default();
//! assert!(reporter.maybe_report(0, 0, 0).is_some());
//! assert!(reporter.maybe_report(99, 120, 1).is_none());
//! assert_eq!(reporter.maybe_report(200, 120, 3).map(|s| s.error_count), Some(3));
//! ```

use crate::{config::MonitorConfig, constants::thresholds::METRICS_INTERVAL_FRAMES};

/// Stream health at one reporting point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MetricsSnapshot {
    /// Sequence number of the frame that triggered the snapshot
    pub frame_sequence_number: u32,
    /// Rolling mean of recent valid frame sizes, 0 without a baseline
    pub average_size: u32,
    /// Invalid frames since the stream started
    pub error_count: u32,
    /// Frames observed since the stream started
    pub frames_observed: u32,
    /// Frames flagged as size anomalies since the stream started
    pub anomaly_count: u32,
}

impl MetricsSnapshot {
    /// Attach stream activity counters
    pub const fn with_activity(mut self, frames_observed: u32, anomaly_count: u32) -> Self {
        self.frames_observed = frames_observed;
        self.anomaly_count = anomaly_count;
        self
    }
}

/// Decides on which frames a snapshot is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsReporter {
    interval_frames: u32,
}

impl Default for MetricsReporter {
    fn default() -> Self {
        Self { interval_frames: METRICS_INTERVAL_FRAMES }
    }
}

impl MetricsReporter {
    /// Reporter with a custom interval; zero disables reporting
    pub const fn new(interval_frames: u32) -> Self {
        Self { interval_frames }
    }

    /// Reporter matching a monitor configuration
    pub const fn from_config(config: &MonitorConfig) -> Self {
        Self::new(config.metrics_interval_frames)
    }

    /// Frames between snapshots
    pub const fn interval_frames(&self) -> u32 {
        self.interval_frames
    }

    /// True when `sequence_number` is a reporting point
    pub const fn is_due(&self, sequence_number: u32) -> bool {
        match sequence_number.checked_rem(self.interval_frames) {
            Some(rem) => rem == 0,
            None => false,
        }
    }

    /// Snapshot for this frame if it is a reporting point
    pub const fn maybe_report(
        &self,
        frame_sequence_number: u32,
        average: u32,
        error_count: u32,
    ) -> Option<MetricsSnapshot> {
        if !self.is_due(frame_sequence_number) {
            return None;
        }

        Some(MetricsSnapshot {
            frame_sequence_number,
            average_size: average,
            error_count,
            frames_observed: 0,
            anomaly_count: 0,
        })
    }
}
