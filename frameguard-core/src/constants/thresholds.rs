//! Anomaly and Reporting Thresholds
//!
//! Gates that decide when the rolling size baseline is trusted and how often
//! a metrics snapshot is produced.

// ===== ANOMALY DETECTION =====

/// Minimum populated history slots before size anomalies are evaluated.
///
/// With fewer samples a single large I-frame dominates the mean and every
/// following frame looks abnormal. Half the default window is the first
/// point where one outlier moves the mean by at most a fifth.
pub const MIN_SAMPLES_FOR_ANOMALY: usize = 5;

/// Relative deviation from the rolling mean that marks a frame anomalous.
///
/// Compared with strict greater-than against `|size - mean| / mean`.
/// 0.5 = a frame half again as large, or half as small, as recent frames.
pub const ANOMALY_RATIO_THRESHOLD: f32 = 0.5;

/// Tighter ratio for fixed scenes (doorways, corridors).
pub const STRICT_ANOMALY_RATIO_THRESHOLD: f32 = 0.25;

/// Sample gate paired with [`STRICT_ANOMALY_RATIO_THRESHOLD`].
pub const STRICT_MIN_SAMPLES_FOR_ANOMALY: usize = 3;

/// Looser ratio for scenes with frequent motion or lighting changes.
pub const LENIENT_ANOMALY_RATIO_THRESHOLD: f32 = 1.0;

/// Sample gate paired with [`LENIENT_ANOMALY_RATIO_THRESHOLD`].
pub const LENIENT_MIN_SAMPLES_FOR_ANOMALY: usize = 8;

// ===== METRICS =====

/// Frames between two metrics snapshots.
///
/// Snapshots are emitted when `sequence_number % interval == 0`, so frame 0
/// always produces one. At 30 fps this is one snapshot every ~3.3 s.
pub const METRICS_INTERVAL_FRAMES: u32 = 100;

/// Percentage scale for reporting deviation ratios.
pub const PERCENT_SCALE: f32 = 100.0;
