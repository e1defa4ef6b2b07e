//! Validation outcome types

use crate::constants::frame::BOUNDARY_WINDOW_LEN;

/// Why a frame failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FailureReason {
    /// Frame passed
    None = 0,
    /// Shorter than the minimum frame length; markers were not read
    TooSmall = 1,
    /// Start marker absent, end marker present
    MissingLeadingMarker = 2,
    /// Start marker present, end marker absent
    MissingTrailingMarker = 3,
    /// Neither marker present
    BothMarkersMissing = 4,
}

impl FailureReason {
    /// Number of variants, for per-reason tables
    pub const COUNT: usize = 5;

    /// All variants in discriminant order
    pub const ALL: [FailureReason; Self::COUNT] = [
        FailureReason::None,
        FailureReason::TooSmall,
        FailureReason::MissingLeadingMarker,
        FailureReason::MissingTrailingMarker,
        FailureReason::BothMarkersMissing,
    ];

    /// Classify the two marker checks of a frame long enough to check
    pub const fn from_markers(has_leading: bool, has_trailing: bool) -> Self {
        match (has_leading, has_trailing) {
            (true, true) => FailureReason::None,
            (false, true) => FailureReason::MissingLeadingMarker,
            (true, false) => FailureReason::MissingTrailingMarker,
            (false, false) => FailureReason::BothMarkersMissing,
        }
    }

    /// Table index for this reason
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name for logs and telemetry
    pub const fn name(&self) -> &'static str {
        match self {
            FailureReason::None => "none",
            FailureReason::TooSmall => "too_small",
            FailureReason::MissingLeadingMarker => "missing_leading_marker",
            FailureReason::MissingTrailingMarker => "missing_trailing_marker",
            FailureReason::BothMarkersMissing => "both_markers_missing",
        }
    }
}

/// First and last bytes of a frame, kept for diagnostics
///
/// For a frame of exactly four bytes both windows cover the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundaryBytes {
    /// Bytes `[0..4]`
    pub head: [u8; BOUNDARY_WINDOW_LEN],
    /// Bytes `[len-4..len]`
    pub tail: [u8; BOUNDARY_WINDOW_LEN],
}

/// Result of validating one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidationResult {
    /// Frame starts with the leading marker
    pub has_leading_marker: bool,
    /// Frame ends with the trailing marker
    pub has_trailing_marker: bool,
    /// Both markers present and length sufficient
    pub valid: bool,
    /// Classification of the failure, `None` when valid
    pub failure_reason: FailureReason,
    /// Edge bytes, absent when the frame was too small to read them
    pub boundary: Option<BoundaryBytes>,
}

impl ValidationResult {
    /// Result for a frame below the minimum length
    pub const fn too_small() -> Self {
        Self {
            has_leading_marker: false,
            has_trailing_marker: false,
            valid: false,
            failure_reason: FailureReason::TooSmall,
            boundary: None,
        }
    }

    /// Result for a frame whose markers were checked
    pub const fn from_markers(
        has_leading_marker: bool,
        has_trailing_marker: bool,
        boundary: Option<BoundaryBytes>,
    ) -> Self {
        let failure_reason = FailureReason::from_markers(has_leading_marker, has_trailing_marker);

        Self {
            has_leading_marker,
            has_trailing_marker,
            valid: has_leading_marker && has_trailing_marker,
            failure_reason,
            boundary,
        }
    }
}
