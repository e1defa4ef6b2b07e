//! Error Types
//!
//! ## Design Philosophy
//!
//! A frame that fails validation is NOT an error here. It is a classified,
//! expected outcome carried as a [`FailureReason`](crate::validators::FailureReason)
//! inside the returned report. Errors in this module cover the two places a
//! caller can hand the monitor something unusable:
//!
//! - **Frame construction**: a declared length larger than the buffer
//! - **Configuration**: settings that would break the monitor's invariants
//!
//! Like the rest of the crate, errors stay small and allocation free:
//! inline data and `&'static str` only, `Copy` so they can be returned from
//! hot paths without moves.
//!
//! ## Example
//!
//! ```rust
//! use frameguard_core::{CompressedFrame, FrameError};
//!
//! let encoder_output = [0xFFu8, 0xD8, 0x00, 0xFF, 0xD9, 0x00, 0x00];
//!
//! match CompressedFrame::from_buffer(&encoder_output, 5, 7) {
//!     Ok(frame) => assert_eq!(frame.len(), 5),
//!     Err(FrameError::LengthExceedsBuffer { .. }) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for frame construction
pub type FrameResult<T> = Result<T, FrameError>;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors building a [`CompressedFrame`](crate::frame::CompressedFrame)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Declared frame length is larger than the buffer holding it
    #[error("Frame length {length} exceeds buffer of {capacity} bytes")]
    LengthExceedsBuffer {
        /// Length reported by the encoder
        length: usize,
        /// Size of the buffer the frame was written into
        capacity: usize,
    },
}

/// Configuration rejected by [`MonitorConfig::validate`](crate::config::MonitorConfig::validate)
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Minimum frame length cannot hold both markers without overlap
    #[error("Minimum frame length {value} is below {required} bytes")]
    FrameLengthTooSmall {
        /// Configured minimum
        value: usize,
        /// Smallest length that fits both markers
        required: usize,
    },

    /// Leading and trailing markers are the same byte pair
    #[error("Leading and trailing markers are identical")]
    IdenticalMarkers,

    /// Ratio threshold is NaN, infinite, zero or negative
    #[error("Anomaly ratio threshold {value} must be finite and positive")]
    InvalidRatioThreshold {
        /// Configured threshold
        value: f32,
    },

    /// Sample gate is zero or can never be reached by the history window
    #[error("Minimum sample count {value} outside [1, {capacity}]")]
    InvalidSampleGate {
        /// Configured sample gate
        value: usize,
        /// History capacity the gate must fit in
        capacity: usize,
    },

    /// Metrics interval of zero frames
    #[error("Metrics interval must be at least one frame")]
    ZeroMetricsInterval,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::LengthExceedsBuffer { length, capacity } =>
                defmt::write!(fmt, "Length {} exceeds buffer {}", length, capacity),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::FrameLengthTooSmall { value, required } =>
                defmt::write!(fmt, "Min length {} below {}", value, required),
            Self::IdenticalMarkers =>
                defmt::write!(fmt, "Identical markers"),
            Self::InvalidRatioThreshold { value } =>
                defmt::write!(fmt, "Invalid ratio threshold {}", value),
            Self::InvalidSampleGate { value, capacity } =>
                defmt::write!(fmt, "Sample gate {} outside [1, {}]", value, capacity),
            Self::ZeroMetricsInterval =>
                defmt::write!(fmt, "Zero metrics interval"),
        }
    }
}
