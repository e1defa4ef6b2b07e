//! Synthetic encoder output
//!
//! Produces byte buffers shaped like JPEG frames: SOI, a deterministic
//! pseudo-random body, EOI. Corruptions mimic the encoder failures the
//! monitor is meant to catch.

/// How to damage a generated frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// Untouched frame
    None,
    /// Frame cut before its EOI marker
    Truncated,
    /// SOI overwritten, as when the encoder left a stale buffer
    StaleHeader,
    /// Both markers gone
    Garbage,
    /// Only a few bytes written
    Runt,
}

/// Deterministic frame factory
pub struct FrameGenerator {
    state: u32,
    sequence: u32,
}

impl FrameGenerator {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1), sequence: 0 }
    }

    /// Next sequence number, starting at 0
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        seq
    }

    // xorshift32, good enough for filler bytes
    fn next_byte(&mut self) -> u8 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        (x & 0xFF) as u8
    }

    /// Well-formed frame of exactly `size` bytes (size >= 4)
    pub fn jpeg(&mut self, size: usize) -> Vec<u8> {
        assert!(size >= 4, "JPEG frame needs room for both markers");

        let mut frame = Vec::with_capacity(size);
        frame.extend([0xFF, 0xD8]);
        for _ in 0..size - 4 {
            // Keep 0xFF out of the body so markers only appear at the ends
            frame.push(self.next_byte() & 0x7F);
        }
        frame.extend([0xFF, 0xD9]);
        frame
    }

    /// Frame of `size` bytes with the given damage
    pub fn frame(&mut self, size: usize, corruption: Corruption) -> Vec<u8> {
        match corruption {
            Corruption::None => self.jpeg(size),
            Corruption::Truncated => {
                let mut frame = self.jpeg(size + 2);
                frame.truncate(size);
                frame
            }
            Corruption::StaleHeader => {
                let mut frame = self.jpeg(size);
                frame[0] = 0x00;
                frame[1] = 0x00;
                frame
            }
            Corruption::Garbage => {
                let mut frame = self.jpeg(size);
                frame[0] = 0x00;
                let last = frame.len() - 1;
                frame[last] = 0x00;
                frame
            }
            Corruption::Runt => vec![0xFF; size.min(3)],
        }
    }
}
