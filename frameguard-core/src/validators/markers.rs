//! Boundary marker validator
//!
//! Validates a frame from its length and the two bytes at each end.

use crate::{
    config::MonitorConfig,
    constants::frame::{JPEG_EOI_MARKER, JPEG_SOI_MARKER, MARKER_LEN, MIN_FRAME_LENGTH},
    traits::Validator,
};

use super::result::ValidationResult;
use super::utils;

/// Checks the leading and trailing boundary markers of a compressed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerValidator {
    /// Frames shorter than this are rejected before any byte is read
    min_frame_length: usize,

    /// Expected first two bytes
    leading_marker: [u8; MARKER_LEN],

    /// Expected last two bytes
    trailing_marker: [u8; MARKER_LEN],
}

impl Default for MarkerValidator {
    fn default() -> Self {
        Self::jpeg()
    }
}

impl MarkerValidator {
    /// JPEG SOI / EOI validator
    pub const fn jpeg() -> Self {
        Self {
            min_frame_length: MIN_FRAME_LENGTH,
            leading_marker: JPEG_SOI_MARKER,
            trailing_marker: JPEG_EOI_MARKER,
        }
    }

    /// Validator with custom markers
    ///
    /// The minimum length never drops below two non-overlapping markers.
    pub fn new_with_markers(
        min_frame_length: usize,
        leading_marker: [u8; MARKER_LEN],
        trailing_marker: [u8; MARKER_LEN],
    ) -> Self {
        Self {
            min_frame_length: min_frame_length.max(MIN_FRAME_LENGTH),
            leading_marker,
            trailing_marker,
        }
    }

    /// Validator matching a monitor configuration
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new_with_markers(
            config.min_frame_length,
            config.leading_marker,
            config.trailing_marker,
        )
    }

    /// Configured minimum length
    pub const fn min_frame_length(&self) -> usize {
        self.min_frame_length
    }
}

impl Validator for MarkerValidator {
    fn validate(&self, bytes: &[u8]) -> ValidationResult {
        if bytes.len() < self.min_frame_length {
            return ValidationResult::too_small();
        }

        // Both checks run so the reason covers both ends
        let has_leading = utils::starts_with_marker(bytes, self.leading_marker);
        let has_trailing = utils::ends_with_marker(bytes, self.trailing_marker);

        ValidationResult::from_markers(has_leading, has_trailing, utils::boundary_window(bytes))
    }
}

/// Validate a frame against the JPEG markers with default limits
pub fn validate_frame(bytes: &[u8]) -> ValidationResult {
    MarkerValidator::jpeg().validate(bytes)
}
