//! Fixed-Size Frame Size History
//!
//! ## Overview
//!
//! The anomaly detector needs a baseline: how large have recent good frames
//! been? [`SizeHistory`] keeps the last `N` valid frame sizes in a ring
//! buffer whose storage is a plain array, sized at compile time through a
//! const generic. Nothing here allocates and nothing grows.
//!
//! ## Design Rationale
//!
//! ### Zero Means Empty
//!
//! A valid frame is at least four bytes long, so a size of zero never
//! describes a real frame. The buffer uses `0` as its empty-slot marker
//! instead of `Option<u32>`, which halves the slot size and keeps the average
//! scan branch-light:
//!
//! ```text
//! SizeHistory<5> after three records:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │ 120 │ 118 │ 131 │  0  │  0  │
//! └─────┴─────┴─────┴─────┴─────┘
//!                      ↑
//!                      └── write_pos = 3
//!
//! average_and_count() = ((120 + 118 + 131) / 3, 3) = (123, 3)
//! ```
//!
//! Recording a size of zero is therefore the same as leaving the slot empty.
//!
//! ### Overwrite, Don't Fail
//!
//! When full, `record` overwrites the oldest slot. Recent frames matter more
//! than old ones for a moving baseline.
//!
//! ### Outliers Stay In
//!
//! Every recorded size counts toward the average, including frames the
//! detector later flags. A burst of abnormal frames shifts the baseline
//! toward itself; callers that want a robust baseline must filter before
//! calling `record`.
//!
//! ## Usage Example
//!
//! ```rust
//! use frameguard_core::buffer::SizeHistory;
//!
//! let mut history: SizeHistory<10> = SizeHistory::new();
//! assert_eq!(history.average_and_count(), (0, 0));
//!
//! for size in [100, 110, 90] {
//!     history.record(size);
//! }
//! assert_eq!(history.average_and_count(), (100, 3));
//! ```

use crate::constants::buffers::HISTORY_CAPACITY;

/// Ring buffer of the most recent valid frame sizes
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - occupied slots (non-zero) never exceed `N`
///
/// ## Thread Safety
///
/// Not synchronized. One pipeline thread owns it through its monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeHistory<const N: usize = HISTORY_CAPACITY> {
    /// Frame sizes in bytes, 0 = unoccupied
    slots: [u32; N],

    /// Slot the next record goes into
    write_pos: usize,
}

impl<const N: usize> SizeHistory<N> {
    const NON_EMPTY: () = assert!(N > 0, "SizeHistory needs at least one slot");

    /// Creates an empty history
    ///
    /// ```rust
    /// use frameguard_core::buffer::SizeHistory;
    /// static EMPTY: SizeHistory<10> = SizeHistory::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;

        Self {
            slots: [0; N],
            write_pos: 0,
        }
    }

    /// Records a frame size, overwriting the oldest when full
    pub fn record(&mut self, size: u32) {
        self.slots[self.write_pos] = size;
        self.write_pos = (self.write_pos + 1) % N;
    }

    /// Integer mean of occupied slots and how many there are
    ///
    /// Returns `(0, 0)` when nothing is recorded yet. Callers must read that
    /// as "no baseline", not as an average frame size of zero.
    pub fn average_and_count(&self) -> (u32, usize) {
        let (sum, count) = self
            .slots
            .iter()
            .filter(|&&size| size > 0)
            .fold((0u64, 0usize), |(sum, count), &size| (sum + u64::from(size), count + 1));

        if count == 0 {
            return (0, 0);
        }

        // Mean of u32 values always fits in u32
        let average = u32::try_from(sum / count as u64).unwrap_or(u32::MAX);
        (average, count)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|&&size| size > 0).count()
    }

    /// True when no size is recorded
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|&size| size == 0)
    }

    /// True when every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|&size| size > 0)
    }

    /// Window size
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recently recorded size
    pub fn last(&self) -> Option<u32> {
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };

        match self.slots[idx] {
            0 => None,
            size => Some(size),
        }
    }

    /// Occupied sizes from oldest to newest
    ///
    /// The oldest slot is always the one about to be overwritten, so the
    /// walk starts at `write_pos` and wraps once around the array.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..N)
            .map(move |offset| self.slots[(self.write_pos + offset) % N])
            .filter(|&size| size > 0)
    }

    /// Forget every recorded size
    pub fn clear(&mut self) {
        self.slots = [0; N];
        self.write_pos = 0;
    }
}

impl<const N: usize> Default for SizeHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}
