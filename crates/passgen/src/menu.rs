//! Menu model for the status bar menu.
//!
//! This is plain data: the renderer walks the sections, shows check marks and
//! sends back the [`Command`] attached to a clicked entry. It is rebuilt from
//! scratch after every state change.
use serde::Serialize;

use crate::{
    CharClass, Configuration, HotkeySelection, LENGTH_OPTIONS, controller::Command,
    hotkey::HOTKEY_OPTIONS,
};

/// A clickable menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Entry title.
    pub title: String,
    /// Whether a check mark is shown.
    pub checked: bool,
    /// Command sent when clicked. `None` for entries the front end handles
    /// itself (quit).
    #[serde(skip)]
    pub command: Option<Command>,
}

impl MenuEntry {
    /// An unchecked entry triggering `command`.
    fn action(title: impl Into<String>, command: Option<Command>) -> Self {
        Self {
            title: title.into(),
            checked: false,
            command,
        }
    }

    /// A checkable entry triggering `command`.
    fn check(title: impl Into<String>, checked: bool, command: Command) -> Self {
        Self {
            title: title.into(),
            checked,
            command: Some(command),
        }
    }
}

/// One row of the top-level menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuItem {
    /// A top-level entry.
    Entry(MenuEntry),
    /// A titled submenu.
    Submenu {
        /// Submenu title.
        title: String,
        /// Entries in display order.
        entries: Vec<MenuEntry>,
    },
    /// Visual separator.
    Separator,
}

/// The whole status bar menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Rows in display order.
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Build the menu for the given state.
    pub fn build(config: &Configuration, hotkey: HotkeySelection) -> Self {
        let lengths = LENGTH_OPTIONS
            .iter()
            .map(|n| {
                MenuEntry::check(
                    format!("{n} characters"),
                    config.length.get() == *n,
                    Command::SetLength(*n),
                )
            })
            .collect();

        let classes = CharClass::ALL
            .into_iter()
            .map(|class| {
                MenuEntry::check(
                    class.label(&config.special_alphabet),
                    config.is_enabled(class),
                    Command::ToggleClass(class),
                )
            })
            .collect();

        let hotkeys = HOTKEY_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, b)| MenuEntry::check(b.label, hotkey.index() == i, Command::SelectHotkey(i)))
            .collect();

        Self {
            items: vec![
                MenuItem::Entry(MenuEntry::action(
                    "Generate Password",
                    Some(Command::GenerateRequested),
                )),
                MenuItem::Separator,
                MenuItem::Submenu {
                    title: "Length".to_string(),
                    entries: lengths,
                },
                MenuItem::Submenu {
                    title: "Characters".to_string(),
                    entries: classes,
                },
                MenuItem::Submenu {
                    title: "Hotkey".to_string(),
                    entries: hotkeys,
                },
                MenuItem::Separator,
                MenuItem::Entry(MenuEntry::action("Quit", None)),
            ],
        }
    }

    /// Find a submenu by title.
    pub fn submenu(&self, title: &str) -> Option<&[MenuEntry]> {
        self.items.iter().find_map(|item| match item {
            MenuItem::Submenu { title: t, entries } if t == title => Some(entries.as_slice()),
            _ => None,
        })
    }
}
