//! In-memory generator options: character classes, length and the special alphabet.
use std::{fmt, num::NonZeroUsize, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::defaults;

/// One independently toggleable character class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Latin capitals `A-Z`.
    Uppercase,
    /// Latin small letters `a-z`.
    Lowercase,
    /// Decimal digits `0-9`.
    Digits,
    /// The configurable special alphabet.
    Special,
}

impl CharClass {
    /// All classes in charset assembly order.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digits, Self::Special];

    /// Canonical alphabet of a fixed class. `Special` has none; its characters
    /// come from [`Configuration::special_alphabet`].
    pub fn alphabet(self) -> Option<&'static str> {
        match self {
            Self::Uppercase => Some(defaults::UPPERCASE),
            Self::Lowercase => Some(defaults::LOWERCASE),
            Self::Digits => Some(defaults::DIGITS),
            Self::Special => None,
        }
    }

    /// Short name used on the command line (`upper`, `lower`, `digits`, `special`).
    pub fn spec(self) -> &'static str {
        match self {
            Self::Uppercase => "upper",
            Self::Lowercase => "lower",
            Self::Digits => "digits",
            Self::Special => "special",
        }
    }

    /// Menu title for this class. The special entry shows the alphabet in use.
    pub fn label(self, special_alphabet: &str) -> String {
        match self {
            Self::Uppercase => "Uppercase (A-Z)".to_string(),
            Self::Lowercase => "Lowercase (a-z)".to_string(),
            Self::Digits => "Digits (0-9)".to_string(),
            Self::Special => format!("Special ({special_alphabet})"),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec())
    }
}

/// Unknown character class name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character class '{0}' (expected upper, lower, digits or special)")]
pub struct ParseCharClassError(pub String);

impl FromStr for CharClass {
    type Err = ParseCharClassError;

    /// Case-insensitive; accepts the short spec names and the full variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(Self::Uppercase),
            "lower" | "lowercase" => Ok(Self::Lowercase),
            "digits" | "digit" => Ok(Self::Digits),
            "special" | "symbols" => Ok(Self::Special),
            _ => Err(ParseCharClassError(s.to_string())),
        }
    }
}

/// Options that parameterize password generation.
///
/// The all-classes-disabled state is representable on purpose: it is only
/// rejected when a password is requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Target password length in characters.
    #[serde(default = "defaults::default_length")]
    pub length: NonZeroUsize,
    /// Include `A-Z`.
    #[serde(default = "defaults::default_enabled")]
    pub uppercase: bool,
    /// Include `a-z`.
    #[serde(default = "defaults::default_enabled")]
    pub lowercase: bool,
    /// Include `0-9`.
    #[serde(default = "defaults::default_enabled")]
    pub digits: bool,
    /// Include the special alphabet.
    #[serde(default = "defaults::default_enabled")]
    pub special: bool,
    /// Characters contributed by the special class, used verbatim.
    #[serde(default = "defaults::default_special_alphabet")]
    pub special_alphabet: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: defaults::LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            special_alphabet: defaults::default_special_alphabet(),
        }
    }
}

impl Configuration {
    /// Builder-style override of the special alphabet.
    pub fn with_special_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.special_alphabet = alphabet.into();
        self
    }

    /// Replace the special alphabet verbatim, duplicates included.
    pub fn set_special_alphabet(&mut self, alphabet: impl Into<String>) {
        self.special_alphabet = alphabet.into();
    }

    /// Replace the target length. Zero is refused and leaves the length as it was.
    ///
    /// Returns `true` when the new length was applied.
    pub fn set_length(&mut self, n: usize) -> bool {
        match NonZeroUsize::new(n) {
            Some(len) => {
                debug!(length = n, "length set");
                self.length = len;
                true
            }
            None => {
                warn!(current = self.length.get(), "ignoring zero password length");
                false
            }
        }
    }

    /// Is `class` currently enabled?
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Special => self.special,
        }
    }

    /// Flip the flag for `class` and return its new state.
    pub fn toggle(&mut self, class: CharClass) -> bool {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Special => &mut self.special,
        };
        *flag = !*flag;
        debug!(class = %class, enabled = *flag, "class toggled");
        *flag
    }

    /// Flip the uppercase flag.
    pub fn toggle_uppercase(&mut self) -> bool {
        self.toggle(CharClass::Uppercase)
    }

    /// Flip the lowercase flag.
    pub fn toggle_lowercase(&mut self) -> bool {
        self.toggle(CharClass::Lowercase)
    }

    /// Flip the digits flag.
    pub fn toggle_digits(&mut self) -> bool {
        self.toggle(CharClass::Digits)
    }

    /// Flip the special flag.
    pub fn toggle_special(&mut self) -> bool {
        self.toggle(CharClass::Special)
    }

    /// Enabled classes in assembly order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_menu_tool() {
        let c = Configuration::default();
        assert_eq!(c.length.get(), 16);
        assert!(c.uppercase && c.lowercase && c.digits && c.special);
        assert_eq!(c.special_alphabet, "!@#$%^&*");
        assert_eq!(c.enabled_classes(), CharClass::ALL.to_vec());
    }

    #[test]
    fn zero_length_is_refused() {
        let mut c = Configuration::default();
        assert!(c.set_length(24));
        assert_eq!(c.length.get(), 24);
        assert!(!c.set_length(0));
        assert_eq!(c.length.get(), 24);
    }

    #[test]
    fn all_classes_can_be_disabled() {
        let mut c = Configuration::default();
        assert!(!c.toggle_uppercase());
        assert!(!c.toggle_lowercase());
        assert!(!c.toggle_digits());
        assert!(!c.toggle_special());
        assert!(c.enabled_classes().is_empty());
    }

    #[test]
    fn parse_class_names() {
        assert_eq!("upper".parse::<CharClass>(), Ok(CharClass::Uppercase));
        assert_eq!("Lowercase".parse::<CharClass>(), Ok(CharClass::Lowercase));
        assert_eq!(" digits ".parse::<CharClass>(), Ok(CharClass::Digits));
        assert_eq!("SPECIAL".parse::<CharClass>(), Ok(CharClass::Special));
        assert!("emoji".parse::<CharClass>().is_err());
        for class in CharClass::ALL {
            assert_eq!(class.spec().parse::<CharClass>(), Ok(class));
        }
    }

    #[test]
    fn special_label_shows_alphabet() {
        assert_eq!(CharClass::Special.label("-_"), "Special (-_)");
        assert_eq!(CharClass::Digits.label("-_"), "Digits (0-9)");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: Configuration =
            serde_json::from_str(r#"{"length": 20, "special": false}"#).expect("parse");
        assert_eq!(c.length.get(), 20);
        assert!(!c.special);
        assert!(c.uppercase);
        assert_eq!(c.special_alphabet, "!@#$%^&*");
    }
}
