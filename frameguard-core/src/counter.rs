//! Saturating error counter
//!
//! Counts frames that failed validation, in total and per failure reason.
//! Counts only go up and stop at `u32::MAX`: a counter that wrapped to zero
//! would read as a stream that suddenly recovered.

use crate::validators::FailureReason;

/// Monotonic count of invalid frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCounter {
    total: u32,
    by_reason: [u32; FailureReason::COUNT],
}

impl ErrorCounter {
    /// Counter starting at zero
    pub const fn new() -> Self {
        Self {
            total: 0,
            by_reason: [0; FailureReason::COUNT],
        }
    }

    /// Count one invalid frame of unknown cause
    pub fn increment(&mut self) {
        self.total = self.total.saturating_add(1);
    }

    /// Count one invalid frame and its reason
    ///
    /// `FailureReason::None` is not an error and is ignored.
    pub fn record(&mut self, reason: FailureReason) {
        if reason == FailureReason::None {
            return;
        }

        self.increment();
        let slot = &mut self.by_reason[reason.index()];
        *slot = slot.saturating_add(1);
    }

    /// Total invalid frames
    pub const fn value(&self) -> u32 {
        self.total
    }

    /// Invalid frames with the given reason
    pub const fn count_for(&self, reason: FailureReason) -> u32 {
        self.by_reason[reason.index()]
    }

    /// True once the total can no longer grow
    pub const fn is_saturated(&self) -> bool {
        self.total == u32::MAX
    }
}
