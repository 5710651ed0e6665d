//! Error handling for the passgen binary.

use std::{io, result};

use passgen::GenerationError;
use thiserror::Error;

/// Convenient result type for CLI operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A password could not be generated.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// State could not be serialized.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Hotkey spec matched neither an option index nor an offered chord.
    #[error("unknown hotkey '{0}' (use an index 0..{max} or one of the offered chords)", max = passgen::HotkeySelection::len())]
    UnknownHotkey(String),
    /// A driver input line could not be understood.
    #[error("line {line}: {message}")]
    BadLine {
        /// 1-based input line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}
