//! Subcommand execution against a controller and an output sink.

use std::io::{BufRead, Write};

use passgen::{
    Charset, Command, Configuration, Controller, HotkeyBinding, Outcome, RandomSource, menu::Menu,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::Commands,
    driver,
    error::{Error, Result},
};

/// Snapshot written by `passgen state`.
#[derive(Serialize)]
struct StateDump<'a> {
    /// Current options.
    config: &'a Configuration,
    /// Active hotkey binding.
    hotkey: HotkeyBinding,
    /// Menu model for the current state.
    menu: Menu,
}

/// Run one subcommand. Data goes to `out`; `input` is only read by `run`.
pub fn execute<R, I, W>(
    ctl: &mut Controller<R>,
    command: Commands,
    input: I,
    mut out: W,
) -> Result<()>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    match command {
        Commands::Generate { count } => {
            for _ in 0..count.get() {
                match ctl.handle(Command::GenerateRequested) {
                    Outcome::Generated(pw) => writeln!(out, "{}", pw.as_str())?,
                    Outcome::Failed(e) => return Err(Error::Generation(e)),
                    other => debug!(?other, "unexpected outcome"),
                }
            }
        }
        Commands::Charset => {
            let charset = Charset::from_config(ctl.config())?;
            writeln!(out, "{charset}")?;
        }
        Commands::State => {
            let dump = StateDump {
                config: ctl.config(),
                hotkey: ctl.hotkey().active(),
                menu: ctl.menu(),
            };
            serde_json::to_writer_pretty(&mut out, &dump)?;
            writeln!(out)?;
        }
        Commands::Run => {
            let summary = driver::run(ctl, input, &mut out)?;
            debug!(?summary, "input exhausted");
        }
    }
    out.flush()?;
    Ok(())
}
