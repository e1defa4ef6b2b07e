//! Core integrity engine for FrameGuard
//!
//! Checks compressed camera frames right after the encoder produced them.
//! Decides whether each frame is structurally whole, tracks its size
//! against recent frames, and keeps error counters for periodic reporting.
//!
//! Key constraints:
//! - Fixed memory: the size history is a compile-time array
//! - No heap allocation, I/O or locking in `observe`
//! - No division by zero or NaN in the size statistics
//!
//! ```no_run
//! use frameguard_core::{CompressedFrame, FrameMonitor, MetricsSink};
//! use frameguard_core::sinks::NullSink;
//!
//! let mut monitor = FrameMonitor::new();
//! let mut sink = NullSink;
//!
//! # let encoder_output = [0xFF, 0xD8, 0xFF, 0xD9];
//! let report = monitor.observe(CompressedFrame::new(&encoder_output, 0));
//! sink.publish_report(&report);
//!
//! if !report.is_valid() {
//!     // Pipeline decides: drop, forward, or resend
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod anomaly;
pub mod buffer;
pub mod config;
pub mod constants;
pub mod counter;
pub mod errors;
pub mod frame;
pub mod metrics;
pub mod monitor;
pub mod policy;
pub mod sinks;
pub mod traits;
pub mod validators;

// Public API
pub use anomaly::{AnomalyDetector, AnomalyReport, SizeDeviation};
pub use buffer::SizeHistory;
pub use config::MonitorConfig;
pub use counter::ErrorCounter;
pub use errors::{ConfigError, ConfigResult, FrameError, FrameResult};
pub use frame::CompressedFrame;
pub use metrics::{MetricsReporter, MetricsSnapshot};
pub use monitor::{FrameMonitor, Report};
pub use policy::Disposition;
pub use traits::{DispositionPolicy, MetricsSink, Validator};
pub use validators::{FailureReason, MarkerValidator, ValidationResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
