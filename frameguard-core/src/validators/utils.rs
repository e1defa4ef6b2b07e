//! Byte-level helpers shared by frame validators
//!
//! All helpers take the frame slice and never index past it; callers only
//! need to have checked the minimum length once.

use crate::constants::frame::{BOUNDARY_WINDOW_LEN, MARKER_LEN};
use super::result::BoundaryBytes;

/// Check the first two bytes against a marker
pub fn starts_with_marker(bytes: &[u8], marker: [u8; MARKER_LEN]) -> bool {
    bytes.starts_with(&marker)
}

/// Check the last two bytes against a marker
pub fn ends_with_marker(bytes: &[u8], marker: [u8; MARKER_LEN]) -> bool {
    bytes.ends_with(&marker)
}

/// Copy the first and last four bytes, if the frame has at least four
pub fn boundary_window(bytes: &[u8]) -> Option<BoundaryBytes> {
    let len = bytes.len();
    if len < BOUNDARY_WINDOW_LEN {
        return None;
    }

    let mut head = [0u8; BOUNDARY_WINDOW_LEN];
    let mut tail = [0u8; BOUNDARY_WINDOW_LEN];
    head.copy_from_slice(&bytes[..BOUNDARY_WINDOW_LEN]);
    tail.copy_from_slice(&bytes[len - BOUNDARY_WINDOW_LEN..]);

    Some(BoundaryBytes { head, tail })
}
