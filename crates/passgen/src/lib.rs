//! passgen: password generation engine and option state for a status bar
//! password generator.
//!
//! - [`Configuration`]: enabled character classes, length and special alphabet.
//! - [`Charset`]: the working alphabet assembled from a configuration.
//! - [`generate`] / [`generate_with`]: pure generation from a configuration
//!   snapshot and a [`RandomSource`].
//! - [`HotkeySelection`]: which of the fixed [`HOTKEY_OPTIONS`] is active.
//! - [`Controller`]: owns the state and applies [`Command`]s from the menu or
//!   hotkey front end, returning an [`Outcome`].
//!
//! Menu rendering, hotkey capture, clipboard writes and sounds belong to the
//! front end; this crate only describes what they should do.

mod charset;
mod config;
mod controller;
mod defaults;
mod error;
mod generator;
mod hotkey;
mod keys;
pub mod menu;
mod random;

pub use charset::Charset;
pub use config::{CharClass, Configuration, ParseCharClassError};
pub use controller::{Command, Controller, Feedback, Outcome};
pub use defaults::LENGTH_OPTIONS;
pub use error::{GenerationError, RandomSourceError, Result};
pub use generator::{Password, generate, generate_with};
pub use hotkey::{HOTKEY_OPTIONS, HotkeyBinding, HotkeySelection};
pub use keys::{Chord, Key, Modifiers, ParseChordError};
pub use random::{OsRandom, RandomSource};
