//! Pattern with a textual representation

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use bitrange_core::{BitRange, Word};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{format, parse, PatternError};

/// A [`BitRange`] that parses from and displays as pattern text.
///
/// Serializes as its canonical text, e.g. `"011???10"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pattern<W: Word>(BitRange<W>);

impl<W: Word> Pattern<W> {
    pub fn new(range: BitRange<W>) -> Self {
        Self(range)
    }

    pub fn into_inner(self) -> BitRange<W> {
        self.0
    }
}

impl<W: Word> From<BitRange<W>> for Pattern<W> {
    fn from(range: BitRange<W>) -> Self {
        Self(range)
    }
}

impl<W: Word> Deref for Pattern<W> {
    type Target = BitRange<W>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<W: Word> FromStr for Pattern<W> {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl<W: Word> fmt::Display for Pattern<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.0))
    }
}

impl<W: Word> Serialize for Pattern<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, W: Word> Deserialize<'de> for Pattern<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
