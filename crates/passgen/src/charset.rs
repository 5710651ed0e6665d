//! Working alphabet assembly from the enabled character classes.
use std::fmt;

use crate::{CharClass, Configuration, GenerationError, Result};

/// Ordered sequence of characters eligible for selection.
///
/// Built by concatenating the enabled classes in [`CharClass::ALL`] order.
/// Characters are never deduplicated, so a special alphabet that overlaps
/// another enabled class weights the shared characters more heavily.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    /// Characters in assembly order.
    chars: Vec<char>,
}

impl Charset {
    /// Assemble the charset for `config`.
    ///
    /// Fails with [`GenerationError::EmptyCharset`] when nothing would be
    /// selectable: every class disabled, or only `special` enabled with an
    /// empty alphabet.
    pub fn from_config(config: &Configuration) -> Result<Self> {
        let mut chars = Vec::new();
        for class in CharClass::ALL {
            if !config.is_enabled(class) {
                continue;
            }
            let alphabet = class
                .alphabet()
                .unwrap_or(config.special_alphabet.as_str());
            chars.extend(alphabet.chars());
        }
        if chars.is_empty() {
            return Err(GenerationError::EmptyCharset);
        }
        Ok(Self { chars })
    }

    /// Number of characters, counting duplicates.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a successfully assembled charset.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Does the charset contain `c`?
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Characters in assembly order.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
