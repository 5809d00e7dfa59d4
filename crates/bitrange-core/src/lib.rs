//! BitRange Core
//!
//! Wildcard bit-patterns over fixed-width unsigned integers, and the test for
//! whether such a pattern matches any value of a closed interval without
//! walking the interval.

mod changed_bits;
mod error;
mod range;
mod word;

pub use changed_bits::ChangedBits;
pub use error::RangeError;
pub use range::{BitRange, BitRange16, BitRange32, BitRange64, BitRange8};
pub use word::Word;
