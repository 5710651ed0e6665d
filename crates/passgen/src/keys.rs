//! Key chords for the global hotkey: keys, modifier sets and chord specs.
//!
//! - `Key`: letters `A-Z` and digits `0-9`, the keys a binding can use.
//! - `Modifiers`: bitflag set of command/option/control/shift.
//! - `Chord`: modifiers plus one key, parsed from and rendered to specs such
//!   as `"cmd+shift+p"`.
use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of modifier keys held down for a chord.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        /// ⌘
        const COMMAND = 1 << 0;
        /// ⌥
        const OPTION = 1 << 1;
        /// ⌃
        const CONTROL = 1 << 2;
        /// ⇧
        const SHIFT = 1 << 3;
    }
}

impl Modifiers {
    /// Canonical order with spec name and glyph for each modifier.
    const TABLE: [(Self, &'static str, char); 4] = [
        (Self::COMMAND, "cmd", '⌘'),
        (Self::OPTION, "opt", '⌥'),
        (Self::CONTROL, "ctrl", '⌃'),
        (Self::SHIFT, "shift", '⇧'),
    ];

    /// Parses one modifier name. Case-insensitive, accepts common aliases
    /// (cmd/command, opt/option/alt, ctrl/control, shift).
    pub fn from_spec(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cmd" | "command" => Some(Self::COMMAND),
            "opt" | "option" | "alt" => Some(Self::OPTION),
            "ctrl" | "control" => Some(Self::CONTROL),
            "shift" => Some(Self::SHIFT),
            _ => None,
        }
    }

    /// Spec names of the contained modifiers in canonical order.
    pub fn specs(self) -> Vec<&'static str> {
        Self::TABLE
            .iter()
            .filter(|(m, _, _)| self.contains(*m))
            .map(|(_, spec, _)| *spec)
            .collect()
    }

    /// Glyphs of the contained modifiers in canonical order.
    pub fn glyphs(self) -> String {
        Self::TABLE
            .iter()
            .filter(|(m, _, _)| self.contains(*m))
            .map(|(_, _, glyph)| *glyph)
            .collect()
    }
}

/// A non-modifier key usable in a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A letter key, stored as its uppercase ASCII character.
    Letter(char),
    /// A top-row digit key, `0..=9`.
    Digit(u8),
}

impl Key {
    /// Letter key for `c` (either case). `None` for non-ASCII-letters.
    pub const fn letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parses a key spec: a single letter or digit, case-insensitive.
    pub fn from_spec(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if let Some(d) = c.to_digit(10) {
            return u8::try_from(d).ok().map(Self::Digit);
        }
        Self::letter(c)
    }

    /// Lowercase spec string (`"p"`, `"1"`).
    pub fn to_spec(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_lowercase().to_string(),
            Self::Digit(d) => d.to_string(),
        }
    }

    /// Character shown on the keycap (`'P'`, `'1'`).
    pub fn cap(self) -> char {
        match self {
            Self::Letter(c) => c,
            Self::Digit(d) => char::from(b'0' + d),
        }
    }
}

/// A key chord: a set of modifiers plus a single key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Chord {
    /// Modifier keys held down for this chord.
    pub modifiers: Modifiers,
    /// The non-modifier key for this chord.
    pub key: Key,
}

impl Chord {
    /// Build a chord from parts.
    pub const fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Parses a chord specification of the form "cmd+shift+p".
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by "+"; the last component is always the key.
    /// - Repeated modifiers are accepted and collapse into one.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = Key::from_spec(parts.pop()?)?;
        let mut modifiers = Modifiers::empty();
        for m in parts {
            modifiers |= Modifiers::from_spec(m)?;
        }
        Some(Self { modifiers, key })
    }

    /// Canonical spec form: modifiers in cmd, opt, ctrl, shift order, then the key.
    pub fn to_string_canonical(&self) -> String {
        let mut out: Vec<String> = self
            .modifiers
            .specs()
            .into_iter()
            .map(str::to_string)
            .collect();
        out.push(self.key.to_spec());
        out.join("+")
    }

    /// Glyph form as shown in menus (`"⌘⇧P"`).
    pub fn glyphs(&self) -> String {
        let mut out = self.modifiers.glyphs();
        out.push(self.key.cap());
        out
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_canonical())
    }
}

/// Chord spec that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid chord '{0}' (expected e.g. cmd+shift+p)")]
pub struct ParseChordError(pub String);

impl FromStr for Chord {
    type Err = ParseChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseChordError(s.to_string()))
    }
}
