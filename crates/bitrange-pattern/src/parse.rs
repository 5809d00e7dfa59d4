//! Pattern parser

use bitrange_core::{BitRange, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern is empty")]
    EmptyPattern,
    #[error("Pattern contains invalid character '{character}' at position {position} (valid: 0, 1, ?, separators ' _ and space)")]
    InvalidCharacter { character: char, position: usize },
}

/// What the parser does with characters that are neither bits nor separators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsePolicy {
    /// Reject them, and reject patterns without any bit
    #[default]
    Strict,
    /// Skip them
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Fixed(bool),
    Any,
    Separator,
}

impl Symbol {
    fn from_char(character: char) -> Option<Self> {
        match character {
            '0' => Some(Symbol::Fixed(false)),
            '1' => Some(Symbol::Fixed(true)),
            '?' => Some(Symbol::Any),
            '\'' | '_' | ' ' => Some(Symbol::Separator),
            _ => None,
        }
    }
}

/// Parser for textual bit patterns.
///
/// Bits are written most significant first and assigned from the end of the
/// text: the last bit character is bit 0. Leading characters beyond the word
/// width are dropped, and bits the text does not reach are don't-care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternParser {
    policy: ParsePolicy,
}

impl PatternParser {
    pub fn new(policy: ParsePolicy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::new(ParsePolicy::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ParsePolicy::Lenient)
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn parse<W: Word>(&self, text: &str) -> Result<BitRange<W>, PatternError> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            match Symbol::from_char(character) {
                Some(Symbol::Separator) => {}
                Some(symbol) => bits.push(symbol),
                None if self.policy == ParsePolicy::Lenient => {}
                None => {
                    return Err(PatternError::InvalidCharacter {
                        character,
                        position,
                    })
                }
            }
        }

        if bits.is_empty() && self.policy == ParsePolicy::Strict {
            return Err(PatternError::EmptyPattern);
        }

        let mut base = W::zero();
        let mut mask = W::zero();
        for (index, symbol) in bits.iter().rev().take(W::BITS as usize).enumerate() {
            let bit = W::bit(index as u32);
            match symbol {
                Symbol::Fixed(true) => {
                    base |= bit;
                    mask |= bit;
                }
                Symbol::Fixed(false) => mask |= bit,
                Symbol::Any | Symbol::Separator => {}
            }
        }

        Ok(BitRange::new(base, mask))
    }
}

/// Parse a pattern with the strict policy
pub fn parse<W: Word>(text: &str) -> Result<BitRange<W>, PatternError> {
    PatternParser::strict().parse(text)
}
