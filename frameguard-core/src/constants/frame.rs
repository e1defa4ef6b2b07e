//! Frame Boundary Constants
//!
//! A baseline or progressive JPEG always starts with the Start Of Image
//! marker and ends with the End Of Image marker. Encoders that run out of
//! output buffer, or DMA transfers cut short, produce frames where one or both
//! are missing. Checking these four bytes is the cheapest structural test
//! that still catches truncation.

// ===== MARKERS =====

/// JPEG Start Of Image marker (SOI).
///
/// Source: ITU-T T.81, Table B.1
pub const JPEG_SOI_MARKER: [u8; MARKER_LEN] = [0xFF, 0xD8];

/// JPEG End Of Image marker (EOI).
///
/// Source: ITU-T T.81, Table B.1
pub const JPEG_EOI_MARKER: [u8; MARKER_LEN] = [0xFF, 0xD9];

/// Length of a boundary marker in bytes.
pub const MARKER_LEN: usize = 2;

// ===== LENGTHS =====

/// Minimum frame length before any marker byte is read.
///
/// Leading and trailing markers only stop overlapping at 4 bytes. Below that
/// a 2-byte `FF D9` frame would satisfy both checks with the same bytes, so
/// it is rejected as too small instead.
pub const MIN_FRAME_LENGTH: usize = 2 * MARKER_LEN;

/// Number of bytes captured from each end of a frame for diagnostics.
///
/// Four bytes show the marker plus the start of the next segment header
/// (`FF D8 FF E0` for JFIF, `FF D8 FF DB` for bare JPEG).
pub const BOUNDARY_WINDOW_LEN: usize = 4;
