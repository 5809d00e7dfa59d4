//! Brute-force checks of `BitRange::intersects`.

use bitrange_core::{BitRange, BitRange16, BitRange64, BitRange8, Word};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rayon::prelude::*;

/// Every distinct 8-bit pattern with `base & mask` ranging over all subsets of
/// `mask`. Don't-care bits of `base` are filled with junk so the matcher is
/// checked to ignore them.
fn patterns_with_mask(mask: u8) -> Vec<BitRange8> {
    let mut patterns = Vec::new();
    let mut fixed = mask;
    loop {
        patterns.push(BitRange::new(fixed | (!mask & 0b0101_0101), mask));
        if fixed == 0 {
            break;
        }
        fixed = (fixed - 1) & mask;
    }
    patterns
}

/// Compare against enumeration for every `pattern_step`-th pattern of each
/// mask and every interval whose begin is a multiple of `begin_step`.
fn sweep_u8(begin_step: usize, pattern_step: usize) -> Option<String> {
    (0u32..256).into_par_iter().find_map_any(|mask| {
        for range in patterns_with_mask(mask as u8).into_iter().step_by(pattern_step) {
            // matching[v + 1] counts the matches in [0, v].
            let mut matching = [0u16; 257];
            for value in 0..=u8::MAX {
                matching[value as usize + 1] =
                    matching[value as usize] + range.matches(value) as u16;
            }

            for begin in (0..=u8::MAX).step_by(begin_step) {
                for end in begin..=u8::MAX {
                    let expected = matching[end as usize + 1] > matching[begin as usize];
                    if range.intersects(begin, end) != expected {
                        return Some(format!(
                            "base={:08b} mask={:08b} begin={:08b} end={:08b} expected={}",
                            range.base(),
                            range.mask(),
                            begin,
                            end,
                            expected
                        ));
                    }
                }
            }
        }
        None
    })
}

fn intersects_by_enumeration<W: Word>(range: &BitRange<W>, begin: W, end: W) -> bool {
    let mut value = begin;
    loop {
        if range.matches(value) {
            return true;
        }
        if value == end {
            return false;
        }
        value = value + W::one();
    }
}

/// Enumerates the completions of the pattern instead of the interval, which
/// stays cheap for wide words as long as few bits are don't-care.
fn intersects_by_completions<W: Word>(range: &BitRange<W>, begin: W, end: W) -> bool {
    let free = !range.mask();
    let mut bits = free;
    loop {
        let candidate = range.base_and_mask() | bits;
        if candidate >= begin && candidate <= end {
            return true;
        }
        if bits.is_zero() {
            return false;
        }
        bits = (bits - W::one()) & free;
    }
}

fn ordered<W: Word>(a: W, b: W) -> (W, W) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn test_u8_every_pattern() {
    if let Some(failure) = sweep_u8(7, 1) {
        panic!("mismatch against enumeration: {failure}");
    }
}

#[test]
fn test_u8_every_interval() {
    if let Some(failure) = sweep_u8(1, 5) {
        panic!("mismatch against enumeration: {failure}");
    }
}

#[test]
#[ignore = "visits every 8-bit pattern and interval; run with --ignored"]
fn test_u8_exhaustive() {
    if let Some(failure) = sweep_u8(1, 1) {
        panic!("mismatch against enumeration: {failure}");
    }
}

#[test]
fn test_u16_pattern_boundaries() {
    let range = BitRange16::new(0b0000_0000_1000_0001, 0b0000_0001_1000_0011);
    for begin in (0..=u16::MAX).step_by(257) {
        for end in [begin, begin.saturating_add(1), begin.saturating_add(600), u16::MAX] {
            assert_eq!(
                range.intersects(begin, end),
                intersects_by_enumeration(&range, begin, end),
                "begin={begin:#018b} end={end:#018b}"
            );
        }
    }
}

#[quickcheck]
fn matches_enumeration_u16(base: u16, mask: u16, a: u16, b: u16) -> bool {
    let range = BitRange16::new(base, mask);
    let (begin, end) = ordered(a, b);
    range.intersects(begin, end) == intersects_by_enumeration(&range, begin, end)
}

#[quickcheck]
fn matches_enumeration_u16_short(base: u16, mask: u16, begin: u16, len: u8) -> bool {
    let range = BitRange16::new(base, mask);
    let end = begin.saturating_add(len as u16);
    range.intersects(begin, end) == intersects_by_enumeration(&range, begin, end)
}

#[quickcheck]
fn matches_completions_u32(base: u32, free: (u32, u32, u32), a: u32, b: u32) -> TestResult {
    let mask = !(free.0 & free.1 & free.2);
    if mask.count_zeros() > 14 {
        return TestResult::discard();
    }
    let range = BitRange::new(base, mask);
    let (begin, end) = ordered(a, b);
    TestResult::from_bool(
        range.intersects(begin, end) == intersects_by_completions(&range, begin, end),
    )
}

#[quickcheck]
fn matches_completions_u64(base: u64, free: (u64, u64, u64), a: u64, b: u64) -> TestResult {
    let mask = !(free.0 & free.1 & free.2);
    if mask.count_zeros() > 14 {
        return TestResult::discard();
    }
    let range = BitRange64::new(base, mask);
    let (begin, end) = ordered(a, b);
    TestResult::from_bool(
        range.intersects(begin, end) == intersects_by_completions(&range, begin, end),
    )
}

#[quickcheck]
fn matches_completions_u64_near_pattern(
    base: u64,
    free: (u64, u64, u64),
    noise: u64,
    len: u32,
) -> TestResult {
    let mask = !(free.0 & free.1 & free.2);
    if mask.count_zeros() > 14 {
        return TestResult::discard();
    }
    let range = BitRange64::new(base, mask);
    // Start close to a completion so the don't-care bits decide the answer.
    let begin = range.base_and_mask() ^ (noise & 0xffff);
    let end = begin.saturating_add(len as u64);
    TestResult::from_bool(
        range.intersects(begin, end) == intersects_by_completions(&range, begin, end),
    )
}

#[quickcheck]
fn single_value_is_matches(base: u64, mask: u64, value: u64) -> bool {
    let range = BitRange64::new(base, mask);
    range.intersects(value, value) == range.matches(value)
}

#[quickcheck]
fn full_mask_is_equality(base: u32, value: u32) -> bool {
    BitRange::new(base, u32::MAX).matches(value) == (value == base)
}

#[quickcheck]
fn empty_mask_matches_everything(base: u64, a: u64, b: u64) -> bool {
    let range = BitRange64::new(base, 0);
    let (begin, end) = ordered(a, b);
    range.matches(a) && range.intersects(begin, end)
}
