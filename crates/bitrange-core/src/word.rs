//! Integer widths a [`BitRange`](crate::BitRange) can be instantiated with.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign};

use num_traits::{PrimInt, Unsigned};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned primitive integer usable as the word of a bit pattern.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait Word:
    PrimInt
    + Unsigned
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Hash
    + Into<u64>
    + fmt::Debug
    + fmt::Display
    + fmt::Binary
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// The bit width of this type.
    const BITS: u32;

    /// Index of the most significant set bit.
    ///
    /// `self` must be non-zero.
    #[inline]
    fn highest_set_bit(self) -> u32 {
        debug_assert!(!self.is_zero(), "highest_set_bit called on zero");
        Self::BITS - 1 - self.leading_zeros()
    }

    /// A word with only bit `index` set.
    #[inline]
    fn bit(index: u32) -> Self {
        Self::one() << index as usize
    }

    /// A word with the low `count` bits set. `count` may be anything up to
    /// and including [`BITS`](Self::BITS).
    #[inline]
    fn low_bits(count: u32) -> Self {
        if count == 0 {
            Self::zero()
        } else {
            Self::max_value() >> (Self::BITS - count) as usize
        }
    }
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_set_bit() {
        assert_eq!(1u8.highest_set_bit(), 0);
        assert_eq!(0b0101_0000u8.highest_set_bit(), 6);
        assert_eq!(u16::MAX.highest_set_bit(), 15);
        assert_eq!(0x8000_0000u32.highest_set_bit(), 31);
        assert_eq!((1u64 << 63).highest_set_bit(), 63);
    }

    #[test]
    fn test_low_bits() {
        assert_eq!(u8::low_bits(0), 0);
        assert_eq!(u8::low_bits(3), 0b111);
        assert_eq!(u8::low_bits(8), u8::MAX);
        assert_eq!(u64::low_bits(64), u64::MAX);
        assert_eq!(u64::low_bits(63), u64::MAX >> 1);
    }

    #[test]
    fn test_bit() {
        assert_eq!(u8::bit(7), 0x80);
        assert_eq!(u32::bit(0), 1);
    }
}
