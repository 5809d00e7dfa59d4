//! Pattern formatter

use bitrange_core::{BitRange, Word};

/// Render a pattern as `W::BITS` characters, most significant bit first.
/// Pinned bits become `0`/`1`, don't-care bits `?`.
pub fn format<W: Word>(range: &BitRange<W>) -> String {
    (0..W::BITS)
        .rev()
        .map(|index| {
            let bit = W::bit(index);
            if (range.mask() & bit).is_zero() {
                '?'
            } else if (range.base() & bit).is_zero() {
                '0'
            } else {
                '1'
            }
        })
        .collect()
}
