//! Error types

use thiserror::Error;

/// Caller contract violations of the interval queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("interval begin {begin} is greater than end {end}")]
    InvertedInterval { begin: u64, end: u64 },
}
