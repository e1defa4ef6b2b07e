//! Frame Size Anomaly Detection
//!
//! ## Overview
//!
//! A JPEG's size tracks scene complexity, and scene complexity changes
//! slowly between consecutive frames. A sudden jump or collapse in size,
//! against the rolling mean of recent valid frames, usually means:
//!
//! - **Collapse**: encoder produced an almost empty or black frame
//! - **Jump**: quantization tables reset, or garbage appended after EOI
//! - **Either**: sensor glitch, exposure step, or a real scene cut
//!
//! The detector only reports; it never rejects a frame.
//!
//! ## Rule
//!
//! ```text
//! samples < min_samples      → not evaluated, ratio = 0
//! ratio = (size - mean) / mean
//! anomalous ⇔ |ratio| > threshold      (strictly greater)
//! ```
//!
//! With the defaults, mean 100 and 5 samples: 160 → 0.6 (anomalous),
//! 150 → 0.5 (not), 40 → -0.6 (anomalous).
//!
//! ## Division Safety
//!
//! The history never counts a zero-size slot as a sample, so once the sample
//! gate is passed the mean is at least 1. The detector still refuses to
//! divide by a zero mean and reports "not anomalous" instead, so a broken
//! caller cannot inject NaN or infinity into downstream telemetry.

use crate::{
    config::MonitorConfig,
    constants::thresholds::{ANOMALY_RATIO_THRESHOLD, MIN_SAMPLES_FOR_ANOMALY, PERCENT_SCALE},
};

/// Which way an anomalous frame deviates from the mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SizeDeviation {
    /// Larger than the rolling mean
    Oversized,
    /// Smaller than the rolling mean
    Undersized,
}

/// Size check of one frame against the rolling mean
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnomalyReport {
    /// Rolling mean the frame was compared against
    pub average: u32,
    /// Samples behind that mean
    pub valid_sample_count: usize,
    /// `(size - average) / average`, 0 when not evaluated
    pub deviation_ratio: f32,
    /// Deviation exceeded the threshold
    pub is_anomalous: bool,
}

impl AnomalyReport {
    /// Report for a frame that was not evaluated
    pub const fn not_evaluated(average: u32, valid_sample_count: usize) -> Self {
        Self {
            average,
            valid_sample_count,
            deviation_ratio: 0.0,
            is_anomalous: false,
        }
    }

    /// Deviation in percent, as shown in diagnostics
    pub fn deviation_percent(&self) -> f32 {
        self.deviation_ratio * PERCENT_SCALE
    }

    /// Direction of an anomalous deviation, `None` for normal frames
    pub fn direction(&self) -> Option<SizeDeviation> {
        if !self.is_anomalous {
            return None;
        }

        if self.deviation_ratio > 0.0 {
            Some(SizeDeviation::Oversized)
        } else {
            Some(SizeDeviation::Undersized)
        }
    }
}

/// Flags frames whose size strays too far from the rolling mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyDetector {
    /// Samples required before any frame is judged
    min_samples: usize,

    /// Absolute relative deviation that triggers a flag
    ratio_threshold: f32,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLES_FOR_ANOMALY,
            ratio_threshold: ANOMALY_RATIO_THRESHOLD,
        }
    }
}

impl AnomalyDetector {
    /// Detector with custom gate and threshold
    ///
    /// The gate is at least one sample and the threshold is taken as an
    /// absolute value.
    pub fn new(min_samples: usize, ratio_threshold: f32) -> Self {
        Self {
            min_samples: min_samples.max(1),
            ratio_threshold: libm::fabsf(ratio_threshold),
        }
    }

    /// Detector matching a monitor configuration
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(config.min_samples_for_anomaly, config.anomaly_ratio_threshold)
    }

    /// Samples required before evaluation
    pub const fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Configured deviation threshold
    pub const fn ratio_threshold(&self) -> f32 {
        self.ratio_threshold
    }

    /// Compare a frame size with the history mean
    pub fn check(&self, current_size: u32, average: u32, valid_sample_count: usize) -> AnomalyReport {
        if valid_sample_count < self.min_samples {
            return AnomalyReport::not_evaluated(average, valid_sample_count);
        }

        if average == 0 {
            log_warn!(
                "Zero size average with {} samples, skipping anomaly check",
                valid_sample_count
            );
            return AnomalyReport::not_evaluated(average, valid_sample_count);
        }

        let diff = i64::from(current_size) - i64::from(average);
        let deviation_ratio = diff as f32 / average as f32;

        AnomalyReport {
            average,
            valid_sample_count,
            deviation_ratio,
            is_anomalous: libm::fabsf(deviation_ratio) > self.ratio_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn below_gate_never_flags() {
        let detector = AnomalyDetector::default();
        let report = detector.check(1000, 100, 4);

        assert!(!report.is_anomalous);
        assert_eq!(report.deviation_ratio, 0.0);
        assert_eq!(report.valid_sample_count, 4);
    }

    #[test]
    fn oversized_frame_flagged() {
        let report = AnomalyDetector::default().check(160, 100, 5);

        assert!(approx(report.deviation_ratio, 0.6));
        assert!(report.is_anomalous);
        assert_eq!(report.direction(), Some(SizeDeviation::Oversized));
        assert!(approx(report.deviation_percent(), 60.0));
    }

    #[test]
    fn moderate_growth_not_flagged() {
        let report = AnomalyDetector::default().check(140, 100, 5);

        assert!(approx(report.deviation_ratio, 0.4));
        assert!(!report.is_anomalous);
        assert_eq!(report.direction(), None);
    }

    #[test]
    fn threshold_is_strict() {
        let report = AnomalyDetector::default().check(150, 100, 5);
        assert!(approx(report.deviation_ratio, 0.5));
        assert!(!report.is_anomalous);
    }

    #[test]
    fn undersized_frame_flagged() {
        let report = AnomalyDetector::default().check(40, 100, 10);

        assert!(approx(report.deviation_ratio, -0.6));
        assert!(report.is_anomalous);
        assert_eq!(report.direction(), Some(SizeDeviation::Undersized));
    }

    #[test]
    fn zero_average_is_not_divided() {
        let report = AnomalyDetector::default().check(500, 0, 5);

        assert!(!report.is_anomalous);
        assert_eq!(report.deviation_ratio, 0.0);
        assert!(report.deviation_ratio.is_finite());
    }

    #[test]
    fn custom_detector_clamps_inputs() {
        let detector = AnomalyDetector::new(0, -0.25);
        assert_eq!(detector.min_samples(), 1);
        assert_eq!(detector.ratio_threshold(), 0.25);

        assert!(detector.check(130, 100, 1).is_anomalous);
    }
}
