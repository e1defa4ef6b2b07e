//! Borrowed view of an encoded frame
//!
//! Encoders usually write into a buffer sized for the worst case and report
//! how many bytes they actually used. [`CompressedFrame`] pairs the used part
//! of that buffer with the frame's sequence number, so the rest of the crate
//! only ever indexes inside the real frame.

use crate::errors::{FrameError, FrameResult};

/// A compressed frame handed to the monitor for one `observe` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedFrame<'a> {
    bytes: &'a [u8],
    sequence_number: u32,
}

impl<'a> CompressedFrame<'a> {
    /// Wrap a frame that fills the whole slice
    pub const fn new(bytes: &'a [u8], sequence_number: u32) -> Self {
        Self { bytes, sequence_number }
    }

    /// Wrap the first `length` bytes of an encoder output buffer
    ///
    /// Fails when the encoder reports more bytes than the buffer holds.
    pub fn from_buffer(buffer: &'a [u8], length: usize, sequence_number: u32) -> FrameResult<Self> {
        let bytes = buffer.get(..length).ok_or(FrameError::LengthExceedsBuffer {
            length,
            capacity: buffer.len(),
        })?;

        Ok(Self { bytes, sequence_number })
    }

    /// Frame payload, exactly `len()` bytes
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Frame length in bytes
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length frame
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Frame length as recorded in the size history
    ///
    /// Saturates at `u32::MAX`; no camera frame gets near 4 GiB.
    pub fn size(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }

    /// Sequence number assigned by the capture loop
    pub const fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
}
