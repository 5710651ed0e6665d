//! Command-line interface definitions for passgen.

use std::num::NonZeroUsize;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use passgen::{Chord, Configuration, HotkeySelection};

use crate::error::{Error, Result};

/// Command-line interface for the `passgen` binary.
#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    about = "Generate random passwords from a configurable character set",
    version
)]
pub struct Cli {
    /// Logging controls shared across passgen binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Initial generator options.
    #[command(flatten)]
    pub options: OptionArgs,

    /// What to do. Defaults to `generate`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print freshly generated passwords, one per line.
    Generate {
        /// How many passwords to print.
        #[arg(long, short = 'n', default_value = "1", value_name = "N")]
        count: NonZeroUsize,
    },
    /// Print the characters passwords are drawn from.
    Charset,
    /// Dump options, active hotkey and menu model as JSON.
    State,
    /// Read menu/hotkey commands from stdin and apply them in order.
    ///
    /// One command per line: generate, length <n>, toggle <class>,
    /// hotkey <index|chord>, menu, quit.
    Run,
}

/// Flags that seed the in-memory configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Password length in characters
    #[arg(long, short = 'l', global = true, value_name = "N")]
    pub length: Option<NonZeroUsize>,

    /// Exclude uppercase letters (A-Z)
    #[arg(long, global = true)]
    pub no_upper: bool,

    /// Exclude lowercase letters (a-z)
    #[arg(long, global = true)]
    pub no_lower: bool,

    /// Exclude digits (0-9)
    #[arg(long, global = true)]
    pub no_digits: bool,

    /// Exclude special characters
    #[arg(long, global = true)]
    pub no_special: bool,

    /// Special characters to draw from, used verbatim
    #[arg(long, global = true, value_name = "CHARS", allow_hyphen_values = true)]
    pub special: Option<String>,

    /// Active hotkey: an option index or one of the offered chords (e.g. cmd+shift+p)
    #[arg(long, global = true, value_name = "INDEX|CHORD")]
    pub hotkey: Option<String>,
}

impl OptionArgs {
    /// Configuration described by these flags, starting from the defaults.
    pub fn configuration(&self) -> Configuration {
        let mut config = Configuration::default();
        if let Some(n) = self.length {
            config.length = n;
        }
        config.uppercase = !self.no_upper;
        config.lowercase = !self.no_lower;
        config.digits = !self.no_digits;
        config.special = !self.no_special;
        if let Some(chars) = &self.special {
            config.set_special_alphabet(chars.as_str());
        }
        config
    }

    /// Requested hotkey index, validated against the offered options.
    pub fn hotkey_index(&self) -> Result<Option<usize>> {
        self.hotkey.as_deref().map(resolve_hotkey).transpose()
    }
}

/// Resolve a hotkey spec: an in-range option index, or a chord that one of
/// the options registers.
pub fn resolve_hotkey(spec: &str) -> Result<usize> {
    let spec = spec.trim();
    if let Ok(index) = spec.parse::<usize>() {
        return if index < HotkeySelection::len() {
            Ok(index)
        } else {
            Err(Error::UnknownHotkey(spec.to_string()))
        };
    }
    Chord::parse(spec)
        .and_then(|chord| HotkeySelection::find(&chord))
        .ok_or_else(|| Error::UnknownHotkey(spec.to_string()))
}
