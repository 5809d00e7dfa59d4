//! BitRange Pattern Text
//!
//! Conversion between `BitRange` patterns and their textual form, e.g.
//! `"011?'??10"`, plus statistics about how much a pattern matches.

mod coverage;
mod format;
mod parse;
mod pattern;

pub use coverage::{format_count, match_count, match_probability};
pub use format::format;
pub use parse::{parse, ParsePolicy, PatternError, PatternParser};
pub use pattern::Pattern;
