//! Frame disposition policies
//!
//! What happens to a frame after it was observed is the pipeline's call,
//! not the monitor's: only the pipeline can drop a buffer, forward it, or
//! send the previous frame again. These ready-made policies cover the usual
//! reactions to an invalid frame. None of them is ever called by
//! [`FrameMonitor::observe`](crate::monitor::FrameMonitor::observe).
//!
//! ```rust
//! use frameguard_core::{FrameMonitor, DispositionPolicy};
//! use frameguard_core::policy::{Disposition, SkipInvalid};
//!
//! let mut monitor = FrameMonitor::new();
//! let mut policy = SkipInvalid;
//!
//! let report = monitor.observe_bytes(&[0x00, 0x00, 0x00], 1);
//! assert_eq!(policy.decide(&report), Disposition::Drop);
//! ```

use crate::{monitor::Report, traits::DispositionPolicy};

/// Fate of an observed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Disposition {
    /// Send the frame downstream
    Forward,
    /// Discard the frame
    Drop,
    /// Discard the frame and send the last good one again
    ResendPrevious,
}

/// Drop invalid frames, forward the rest
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipInvalid;

impl DispositionPolicy for SkipInvalid {
    fn decide(&mut self, report: &Report) -> Disposition {
        if report.is_valid() {
            Disposition::Forward
        } else {
            Disposition::Drop
        }
    }
}

/// Forward every frame; the monitor already counted the failure
#[derive(Debug, Clone, Copy, Default)]
pub struct CountAndContinue;

impl DispositionPolicy for CountAndContinue {
    fn decide(&mut self, _report: &Report) -> Disposition {
        Disposition::Forward
    }
}

/// Replace invalid frames with the last good one
///
/// Until a valid frame has been seen there is nothing to resend, so invalid
/// frames are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResendPrevious {
    have_previous: bool,
}

impl ResendPrevious {
    /// Policy with no good frame seen yet
    pub const fn new() -> Self {
        Self { have_previous: false }
    }
}

impl DispositionPolicy for ResendPrevious {
    fn decide(&mut self, report: &Report) -> Disposition {
        if report.is_valid() {
            self.have_previous = true;
            Disposition::Forward
        } else if self.have_previous {
            Disposition::ResendPrevious
        } else {
            Disposition::Drop
        }
    }
}
