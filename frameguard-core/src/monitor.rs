//! Per-stream frame monitor
//!
//! [`FrameMonitor`] owns all mutable state for one camera stream and runs
//! the full check for each encoded frame:
//!
//! ```text
//! frame ─→ validate ─┬─ valid ──→ history.record(size)
//!                    │
//!                    ├─────────→ history.average_and_count()
//!                    │                    │
//!                    │                    ↓
//!                    │           detector.check(size, avg, n)
//!                    │
//!                    ├─ invalid → errors.record(reason)
//!                    │
//!                    └─────────→ reporter.maybe_report(seq, avg, errors)
//!                                         │
//!                                         ↓
//!                           Report { result, anomaly, snapshot }
//! ```
//!
//! `observe` does bounded arithmetic over a fixed array: no I/O, no
//! allocation, no locking. One thread owns a monitor through `&mut self`;
//! sharing one across threads needs a single lock around the whole call.
//! Separate streams use separate monitors and share nothing.
//!
//! ## Usage Example
//!
//! ```rust
//! use frameguard_core::{CompressedFrame, FrameMonitor};
//!
//! let mut monitor = FrameMonitor::new();
//!
//! let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9];
//! let report = monitor.observe(CompressedFrame::new(&jpeg, 0));
//!
//! assert!(report.is_valid());
//! assert!(!report.is_anomalous());
//! assert!(report.snapshot.is_some()); // frame 0 always reports
//! ```

use crate::{
    anomaly::{AnomalyDetector, AnomalyReport},
    buffer::SizeHistory,
    config::MonitorConfig,
    constants::buffers::HISTORY_CAPACITY,
    counter::ErrorCounter,
    errors::ConfigResult,
    frame::CompressedFrame,
    metrics::{MetricsReporter, MetricsSnapshot},
    traits::Validator,
    validators::{FailureReason, MarkerValidator, ValidationResult},
};

/// Everything the monitor learned about one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// Sequence number of the observed frame
    pub sequence_number: u32,
    /// Frame length in bytes
    pub frame_size: u32,
    /// Structural verdict
    pub result: ValidationResult,
    /// Size check against the rolling mean
    pub anomaly: AnomalyReport,
    /// Periodic snapshot, on reporting frames only
    pub snapshot: Option<MetricsSnapshot>,
}

impl Report {
    /// Frame passed validation
    pub const fn is_valid(&self) -> bool {
        self.result.valid
    }

    /// Frame size was flagged
    pub const fn is_anomalous(&self) -> bool {
        self.anomaly.is_anomalous
    }

    /// Why the frame failed, `FailureReason::None` when valid
    pub const fn failure_reason(&self) -> FailureReason {
        self.result.failure_reason
    }
}

/// Integrity and size monitor for one stream of compressed frames
///
/// `N` is the size history window (10 by default); `V` the structural
/// validator (JPEG markers by default).
#[derive(Debug, Clone)]
pub struct FrameMonitor<const N: usize = HISTORY_CAPACITY, V = MarkerValidator> {
    config: MonitorConfig,
    validator: V,
    history: SizeHistory<N>,
    detector: AnomalyDetector,
    errors: ErrorCounter,
    reporter: MetricsReporter,
    frames_observed: u32,
    anomaly_count: u32,
}

impl FrameMonitor {
    /// Monitor with default configuration and a 10-frame window
    pub fn new() -> Self {
        Self::build(MonitorConfig::default(), MarkerValidator::jpeg())
    }
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameMonitor<N> {
    /// Monitor using the configured boundary markers
    pub fn with_config(config: MonitorConfig) -> ConfigResult<Self> {
        Self::with_validator(config, MarkerValidator::from_config(&config))
    }
}

impl<const N: usize, V: Validator> FrameMonitor<N, V> {
    /// Monitor with a custom structural validator
    ///
    /// The configuration is checked against the window size `N`; the marker
    /// settings in it are only used by [`MarkerValidator`].
    pub fn with_validator(config: MonitorConfig, validator: V) -> ConfigResult<Self> {
        if let Err(err) = config.validate_for_capacity(N) {
            log_debug!("Rejected monitor configuration: {}", err);
            return Err(err);
        }

        Ok(Self::build(config, validator))
    }

    fn build(config: MonitorConfig, validator: V) -> Self {
        Self {
            config,
            validator,
            history: SizeHistory::new(),
            detector: AnomalyDetector::from_config(&config),
            errors: ErrorCounter::new(),
            reporter: MetricsReporter::from_config(&config),
            frames_observed: 0,
            anomaly_count: 0,
        }
    }

    /// Run every check on one frame and update the stream state
    pub fn observe(&mut self, frame: CompressedFrame<'_>) -> Report {
        let result = self.validator.validate(frame.bytes());
        let frame_size = frame.size();

        // Invalid frames never enter the baseline
        if result.valid {
            self.history.record(frame_size);
        }

        let (average, samples) = self.history.average_and_count();
        let anomaly = self.detector.check(frame_size, average, samples);

        if !result.valid {
            match result.failure_reason {
                FailureReason::None => self.errors.increment(),
                reason => self.errors.record(reason),
            }
        }

        self.frames_observed = self.frames_observed.saturating_add(1);
        if anomaly.is_anomalous {
            self.anomaly_count = self.anomaly_count.saturating_add(1);
        }

        let snapshot = self
            .reporter
            .maybe_report(frame.sequence_number(), average, self.errors.value())
            .map(|snapshot| snapshot.with_activity(self.frames_observed, self.anomaly_count));

        Report {
            sequence_number: frame.sequence_number(),
            frame_size,
            result,
            anomaly,
            snapshot,
        }
    }

    /// Observe a frame that fills the whole slice
    pub fn observe_bytes(&mut self, bytes: &[u8], sequence_number: u32) -> Report {
        self.observe(CompressedFrame::new(bytes, sequence_number))
    }

    /// Current rolling mean and sample count
    pub fn average_and_count(&self) -> (u32, usize) {
        self.history.average_and_count()
    }

    /// Recent valid frame sizes
    pub fn history(&self) -> &SizeHistory<N> {
        &self.history
    }

    /// Invalid frame counters
    pub fn errors(&self) -> &ErrorCounter {
        &self.errors
    }

    /// Invalid frames since the stream started
    pub fn error_count(&self) -> u32 {
        self.errors.value()
    }

    /// Frames observed, saturating at `u32::MAX`
    pub fn frames_observed(&self) -> u32 {
        self.frames_observed
    }

    /// Frames flagged as size anomalies
    pub fn anomaly_count(&self) -> u32 {
        self.anomaly_count
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Structural validator in use
    pub fn validator(&self) -> &V {
        &self.validator
    }
}
