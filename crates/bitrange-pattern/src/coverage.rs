//! How much of the value space a pattern covers

use bitrange_core::{BitRange, Word};

/// Number of `W` values the pattern matches
pub fn match_count<W: Word>(range: &BitRange<W>) -> u128 {
    1u128 << (W::BITS - range.mask().count_ones())
}

/// Probability that a uniformly random `W` matches the pattern
pub fn match_probability<W: Word>(range: &BitRange<W>) -> f64 {
    0.5_f64.powi(range.mask().count_ones() as i32)
}

/// Format a count as human-readable string
pub fn format_count(count: u128) -> String {
    let count = count as f64;
    if count >= 1e18 {
        format!("{:.2}E", count / 1e18)
    } else if count >= 1e15 {
        format!("{:.2}P", count / 1e15)
    } else if count >= 1e12 {
        format!("{:.2}T", count / 1e12)
    } else if count >= 1e9 {
        format!("{:.2}G", count / 1e9)
    } else if count >= 1e6 {
        format!("{:.2}M", count / 1e6)
    } else if count >= 1e3 {
        format!("{:.2}K", count / 1e3)
    } else {
        format!("{:.0}", count)
    }
}
