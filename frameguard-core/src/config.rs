//! Monitor Configuration
//!
//! ## Options
//!
//! | option | effect | default |
//! |---|---|---|
//! | `min_samples_for_anomaly` | samples before anomaly checks start | 5 |
//! | `anomaly_ratio_threshold` | relative deviation that flags a frame | 0.5 |
//! | `metrics_interval_frames` | frames between snapshots | 100 |
//! | `min_frame_length` | bytes required before markers are read | 4 |
//! | `leading_marker` | expected first two bytes | `FF D8` |
//! | `trailing_marker` | expected last two bytes | `FF D9` |
//!
//! The history window is not a field: it is the `N` parameter of
//! [`FrameMonitor<N>`](crate::monitor::FrameMonitor), 10 by default, so the
//! window stays a fixed array.
//!
//! ## Example
//!
//! ```rust
//! use frameguard_core::{MonitorConfig, FrameMonitor};
//!
//! let config = MonitorConfig::default()
//!     .with_anomaly_ratio_threshold(0.3)
//!     .with_metrics_interval_frames(30);
//!
//! let monitor: FrameMonitor = FrameMonitor::with_config(config)?;
//! assert_eq!(monitor.config().metrics_interval_frames, 30);
//! # Ok::<(), frameguard_core::ConfigError>(())
//! ```

use crate::{
    constants::{
        buffers::HISTORY_CAPACITY,
        frame::{JPEG_EOI_MARKER, JPEG_SOI_MARKER, MARKER_LEN, MIN_FRAME_LENGTH},
        thresholds::{
            ANOMALY_RATIO_THRESHOLD, LENIENT_ANOMALY_RATIO_THRESHOLD,
            LENIENT_MIN_SAMPLES_FOR_ANOMALY, METRICS_INTERVAL_FRAMES, MIN_SAMPLES_FOR_ANOMALY,
            STRICT_ANOMALY_RATIO_THRESHOLD, STRICT_MIN_SAMPLES_FOR_ANOMALY,
        },
    },
    errors::{ConfigError, ConfigResult},
};

/// Tunable settings of a [`FrameMonitor`](crate::monitor::FrameMonitor)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Populated history slots before anomaly checks activate
    pub min_samples_for_anomaly: usize,
    /// Absolute relative deviation that flags a frame
    pub anomaly_ratio_threshold: f32,
    /// Frames between metrics snapshots
    pub metrics_interval_frames: u32,
    /// Minimum frame length before markers are read
    pub min_frame_length: usize,
    /// Expected first two bytes
    pub leading_marker: [u8; MARKER_LEN],
    /// Expected last two bytes
    pub trailing_marker: [u8; MARKER_LEN],
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::jpeg()
    }
}

impl MonitorConfig {
    /// Defaults for a JPEG / MJPEG stream
    pub const fn jpeg() -> Self {
        Self {
            min_samples_for_anomaly: MIN_SAMPLES_FOR_ANOMALY,
            anomaly_ratio_threshold: ANOMALY_RATIO_THRESHOLD,
            metrics_interval_frames: METRICS_INTERVAL_FRAMES,
            min_frame_length: MIN_FRAME_LENGTH,
            leading_marker: JPEG_SOI_MARKER,
            trailing_marker: JPEG_EOI_MARKER,
        }
    }

    /// Fixed scene: earlier baseline, tighter threshold
    pub const fn strict() -> Self {
        Self {
            min_samples_for_anomaly: STRICT_MIN_SAMPLES_FOR_ANOMALY,
            anomaly_ratio_threshold: STRICT_ANOMALY_RATIO_THRESHOLD,
            ..Self::jpeg()
        }
    }

    /// Busy scene: later baseline, looser threshold
    pub const fn lenient() -> Self {
        Self {
            min_samples_for_anomaly: LENIENT_MIN_SAMPLES_FOR_ANOMALY,
            anomaly_ratio_threshold: LENIENT_ANOMALY_RATIO_THRESHOLD,
            ..Self::jpeg()
        }
    }

    /// Set the anomaly sample gate
    pub const fn with_min_samples_for_anomaly(mut self, samples: usize) -> Self {
        self.min_samples_for_anomaly = samples;
        self
    }

    /// Set the anomaly ratio threshold
    pub const fn with_anomaly_ratio_threshold(mut self, threshold: f32) -> Self {
        self.anomaly_ratio_threshold = threshold;
        self
    }

    /// Set the metrics interval
    pub const fn with_metrics_interval_frames(mut self, frames: u32) -> Self {
        self.metrics_interval_frames = frames;
        self
    }

    /// Set the minimum frame length
    pub const fn with_min_frame_length(mut self, length: usize) -> Self {
        self.min_frame_length = length;
        self
    }

    /// Set both boundary markers
    pub const fn with_markers(mut self, leading: [u8; MARKER_LEN], trailing: [u8; MARKER_LEN]) -> Self {
        self.leading_marker = leading;
        self.trailing_marker = trailing;
        self
    }

    /// Check against the default history window
    pub fn validate(&self) -> ConfigResult<()> {
        self.validate_for_capacity(HISTORY_CAPACITY)
    }

    /// Check against a specific history window
    pub fn validate_for_capacity(&self, capacity: usize) -> ConfigResult<()> {
        if self.min_frame_length < MIN_FRAME_LENGTH {
            return Err(ConfigError::FrameLengthTooSmall {
                value: self.min_frame_length,
                required: MIN_FRAME_LENGTH,
            });
        }

        if self.leading_marker == self.trailing_marker {
            return Err(ConfigError::IdenticalMarkers);
        }

        let threshold = self.anomaly_ratio_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidRatioThreshold { value: threshold });
        }

        if self.min_samples_for_anomaly == 0 || self.min_samples_for_anomaly > capacity {
            return Err(ConfigError::InvalidSampleGate {
                value: self.min_samples_for_anomaly,
                capacity,
            });
        }

        if self.metrics_interval_frames == 0 {
            return Err(ConfigError::ZeroMetricsInterval);
        }

        Ok(())
    }
}
