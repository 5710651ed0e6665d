#![warn(missing_docs)]

//! Entry point for the `passgen` binary.

mod cli;
mod commands;
mod driver;
mod error;

use std::{io, num::NonZeroUsize, process};

use clap::Parser;
use passgen::{Command, Controller};
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli {
        log,
        options,
        command,
    } = Cli::parse();
    logging::init(&log);

    let mut ctl = Controller::new(options.configuration());
    if let Some(index) = options.hotkey_index()? {
        ctl.handle(Command::SelectHotkey(index));
    }
    debug!(config = ?ctl.config(), "options ready");

    let command = command.unwrap_or(Commands::Generate {
        count: NonZeroUsize::MIN,
    });
    commands::execute(&mut ctl, command, io::stdin().lock(), io::stdout().lock())
}
