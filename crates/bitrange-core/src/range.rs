//! Wildcard bit-pattern and its interval test

use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use tracing::trace;

use crate::{ChangedBits, RangeError, Word};

/// A fixed-width bit pattern with pinned and don't-care bits.
///
/// A set bit in `mask` pins the corresponding bit of `base`; a clear bit is
/// don't-care. The don't-care bits of `base` are ignored, so equality and
/// hashing only look at `mask` and `base & mask`.
#[derive(Debug, Clone, Copy)]
pub struct BitRange<W> {
    base: W,
    mask: W,
    base_and_mask: W,
}

pub type BitRange8 = BitRange<u8>;
pub type BitRange16 = BitRange<u16>;
pub type BitRange32 = BitRange<u32>;
pub type BitRange64 = BitRange<u64>;

#[inline]
fn within<W: Word>(value: W, begin: W, end: W) -> bool {
    value >= begin && value <= end
}

impl<W: Word> BitRange<W> {
    /// Create a pattern from its base value and fixed-bit mask
    pub fn new(base: W, mask: W) -> Self {
        Self {
            base,
            mask,
            base_and_mask: base & mask,
        }
    }

    /// Pattern matching exactly `value`
    pub fn exact(value: W) -> Self {
        Self::new(value, W::max_value())
    }

    /// Pattern matching every value
    pub fn any() -> Self {
        Self::new(W::zero(), W::zero())
    }

    /// Replace the base value, keeping the mask
    pub fn set_base(&mut self, base: W) -> &mut Self {
        self.base = base;
        self.base_and_mask = self.base & self.mask;
        self
    }

    /// Replace the fixed-bit mask, keeping the base value
    pub fn set_mask(&mut self, mask: W) -> &mut Self {
        self.mask = mask;
        self.base_and_mask = self.base & self.mask;
        self
    }

    /// Base value as given, don't-care bits included
    pub fn base(&self) -> W {
        self.base
    }

    /// Mask of the pinned bits
    pub fn mask(&self) -> W {
        self.mask
    }

    /// The pinned bits of the base value
    pub fn base_and_mask(&self) -> W {
        self.base_and_mask
    }

    /// Check whether `value` satisfies every pinned bit
    #[inline]
    pub fn matches(&self, value: W) -> bool {
        (value & self.mask) == self.base_and_mask
    }

    /// Check whether any value of `[begin, end]` matches the pattern.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`. Use [`try_intersects`](Self::try_intersects)
    /// to get an error instead.
    pub fn intersects(&self, begin: W, end: W) -> bool {
        assert!(
            begin <= end,
            "interval begin {begin} is greater than end {end}"
        );
        self.intersects_ordered(begin, end)
    }

    /// Like [`intersects`](Self::intersects), but reports an inverted
    /// interval as an error.
    pub fn try_intersects(&self, begin: W, end: W) -> Result<bool, RangeError> {
        if begin > end {
            return Err(RangeError::InvertedInterval {
                begin: begin.into(),
                end: end.into(),
            });
        }
        Ok(self.intersects_ordered(begin, end))
    }

    /// Check whether any value of `range` matches the pattern. An empty range
    /// never does.
    pub fn intersects_range(&self, range: &RangeInclusive<W>) -> bool {
        !range.is_empty() && self.intersects_ordered(*range.start(), *range.end())
    }

    fn intersects_ordered(&self, begin: W, end: W) -> bool {
        if begin == end {
            return self.matches(begin);
        }

        // All values of the interval share the bits above the changed ones,
        // so those must already agree with the pattern.
        let changed = ChangedBits::between(begin, end);
        if changed.constant_prefix(begin & self.mask) != changed.constant_prefix(self.base_and_mask)
        {
            trace!(%begin, %end, count = changed.count(), "constant prefix rejected");
            return false;
        }

        let low = changed.volatile_suffix(begin);
        let high = changed.volatile_suffix(end);
        let reduced = Self::new(
            changed.volatile_suffix(self.base),
            changed.volatile_suffix(self.mask),
        );

        let mut any_bits = changed.volatile_suffix(!reduced.mask);
        if any_bits.is_zero() {
            trace!(%begin, %end, "volatile suffix fully pinned");
            return within(reduced.base_and_mask, low, high);
        }

        // Resolve the don't-care bits from the top. Every candidate in the
        // interval agrees with the bits already committed to `probe`.
        let mut probe = reduced.base_and_mask;
        while !any_bits.is_zero() {
            let bit = W::bit(any_bits.highest_set_bit());

            // Smallest completion with `bit` set.
            let right = (probe & !any_bits) | bit;
            if within(right, low, high) {
                return true;
            }
            if right < low {
                probe |= bit;
                any_bits ^= bit;
                continue;
            }

            // Largest completion with `bit` clear.
            let left = (probe | any_bits) ^ bit;
            if within(left, low, high) {
                return true;
            }
            if left < low {
                trace!(%begin, %end, %bit, "interval falls between completions");
                return false;
            }

            probe &= !bit;
            any_bits ^= bit;
        }

        false
    }
}

impl<W: Word> Default for BitRange<W> {
    fn default() -> Self {
        Self::any()
    }
}

impl<W: Word> PartialEq for BitRange<W> {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask && self.base_and_mask == other.base_and_mask
    }
}

impl<W: Word> Eq for BitRange<W> {}

impl<W: Word> Hash for BitRange<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask.hash(state);
        self.base_and_mask.hash(state);
    }
}
