//! Split of an interval into its constant prefix and volatile suffix.

use crate::Word;

/// The low-order bits that differ between the two endpoints of an interval.
///
/// Every value in `[low, high]` shares the bits above [`count`](Self::count)
/// with both endpoints; only the low `count` bits vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedBits<W> {
    mask: W,
    count: u32,
}

impl<W: Word> ChangedBits<W> {
    /// Compute the changed bits of the interval `[low, high]`.
    pub fn between(low: W, high: W) -> Self {
        let xored = low ^ high;
        if xored.is_zero() {
            return Self {
                mask: W::zero(),
                count: 0,
            };
        }

        let count = xored.highest_set_bit() + 1;
        Self {
            mask: W::low_bits(count),
            count,
        }
    }

    /// Number of low-order bits that vary across the interval.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mask covering the volatile suffix.
    pub fn mask(&self) -> W {
        self.mask
    }

    /// `value` with the volatile suffix cleared.
    pub fn constant_prefix(&self, value: W) -> W {
        value & !self.mask
    }

    /// `value` reduced to the volatile suffix.
    pub fn volatile_suffix(&self, value: W) -> W {
        value & self.mask
    }
}
