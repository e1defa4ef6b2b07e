//! Constants for FrameGuard Core
//!
//! Every number the monitor depends on lives here, with its unit and the
//! reason it has the value it has. Nothing in the validation path should use
//! a bare literal.
//!
//! ## Organization
//!
//! - **Frame**: boundary markers and minimum lengths of a compressed frame
//! - **Buffers**: fixed storage sizes
//! - **Thresholds**: statistical gates and reporting cadence
//!
//! The defaults of [`MonitorConfig`](crate::config::MonitorConfig) are built
//! from these values.

/// Boundary markers and frame length limits.
pub mod frame;

/// Fixed storage sizes for embedded targets.
pub mod buffers;

/// Anomaly gates and metrics cadence.
pub mod thresholds;

pub use frame::{
    JPEG_SOI_MARKER, JPEG_EOI_MARKER, MARKER_LEN, MIN_FRAME_LENGTH,
    BOUNDARY_WINDOW_LEN,
};

pub use buffers::HISTORY_CAPACITY;

pub use thresholds::{
    MIN_SAMPLES_FOR_ANOMALY, ANOMALY_RATIO_THRESHOLD, METRICS_INTERVAL_FRAMES,
};
