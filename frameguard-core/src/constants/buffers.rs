//! Buffer Sizes
//!
//! Storage in the monitor is fixed at compile time. These sizes decide the
//! whole memory footprint of a [`FrameMonitor`](crate::monitor::FrameMonitor).

/// Default capacity of the rolling frame size window.
///
/// - 10 samples × 4 bytes = 40 bytes of history
/// - At 30 fps covers the last third of a second of valid frames
/// - Enough to smooth scene changes without hiding a stuck encoder
///
/// Source: camera diagnostics moving-average window
pub const HISTORY_CAPACITY: usize = 10;
