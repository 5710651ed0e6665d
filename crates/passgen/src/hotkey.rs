//! The fixed set of hotkey choices and which one is active.
use serde::Serialize;
use tracing::debug;

use crate::{Chord, Key, Modifiers};

/// A selectable global hotkey: a menu label and the chord it registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HotkeyBinding {
    /// Title shown in the hotkey menu.
    pub label: &'static str,
    /// Chord the hotkey collaborator registers with the OS.
    pub chord: Chord,
}

/// Builds a letter chord in const context.
const fn letter(modifiers: Modifiers, c: char) -> Chord {
    Chord::new(modifiers, Key::Letter(c))
}

/// Bindings offered by the hotkey menu, in menu order. Index 0 is the default.
pub const HOTKEY_OPTIONS: [HotkeyBinding; 3] = [
    HotkeyBinding {
        label: "⌘⇧P",
        chord: letter(Modifiers::COMMAND.union(Modifiers::SHIFT), 'P'),
    },
    HotkeyBinding {
        label: "^⌥P",
        chord: letter(Modifiers::CONTROL.union(Modifiers::OPTION), 'P'),
    },
    HotkeyBinding {
        label: "⌘⌥G",
        chord: letter(Modifiers::COMMAND.union(Modifiers::OPTION), 'G'),
    },
];

/// Tracks which of [`HOTKEY_OPTIONS`] is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotkeySelection {
    /// Index into [`HOTKEY_OPTIONS`].
    index: usize,
}

impl HotkeySelection {
    /// Number of selectable bindings.
    pub const fn len() -> usize {
        HOTKEY_OPTIONS.len()
    }

    /// Index of the active binding.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active binding.
    pub fn active(&self) -> HotkeyBinding {
        HOTKEY_OPTIONS[self.index]
    }

    /// Make `index` the active binding.
    ///
    /// # Panics
    ///
    /// When `index >= HOTKEY_OPTIONS.len()`. The offered indices come from the
    /// same process that calls this, so an out-of-range value is a bug in the
    /// caller rather than a runtime condition.
    pub fn select(&mut self, index: usize) -> HotkeyBinding {
        assert!(
            index < HOTKEY_OPTIONS.len(),
            "hotkey index {index} out of range (0..{})",
            HOTKEY_OPTIONS.len()
        );
        self.index = index;
        let binding = self.active();
        debug!(index, chord = %binding.chord, "hotkey selected");
        binding
    }

    /// Index of the option that registers `chord`, if any.
    pub fn find(chord: &Chord) -> Option<usize> {
        HOTKEY_OPTIONS.iter().position(|b| b.chord == *chord)
    }
}
