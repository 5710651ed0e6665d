//! Line-oriented driver that stands in for the menu and hotkey front end.
//!
//! Each input line is one user action. Generated passwords are written to the
//! output, one per line; feedback cues and rebind requests are logged.

use std::{
    fmt::Write as _,
    io::{BufRead, Write},
};

use passgen::{
    CharClass, Command, Controller, Feedback, Outcome, RandomSource,
    menu::{Menu, MenuItem},
};
use tracing::{error, info, warn};

use crate::{
    cli::resolve_hotkey,
    error::{Error, Result},
};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Blank line or comment.
    Empty,
    /// A controller command.
    Command(Command),
    /// Print the current menu.
    Menu,
    /// Stop reading input.
    Quit,
}

/// Parse one input line. `number` is 1-based and only used for errors.
pub fn parse_line(number: usize, text: &str) -> Result<Line> {
    let bad = |message: String| Error::BadLine {
        line: number,
        message,
    };
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(Line::Empty);
    }
    let (word, arg) = match text.split_once(char::is_whitespace) {
        Some((w, a)) => (w, Some(a.trim())),
        None => (text, None),
    };
    let line = match (word.to_ascii_lowercase().as_str(), arg) {
        ("generate" | "g", None) => Line::Command(Command::GenerateRequested),
        ("length", Some(n)) => {
            let n = n
                .parse::<usize>()
                .map_err(|e| bad(format!("invalid length '{n}': {e}")))?;
            Line::Command(Command::SetLength(n))
        }
        ("toggle", Some(class)) => {
            let class = class
                .parse::<CharClass>()
                .map_err(|e| bad(e.to_string()))?;
            Line::Command(Command::ToggleClass(class))
        }
        ("hotkey", Some(spec)) => {
            let index = resolve_hotkey(spec).map_err(|e| bad(e.to_string()))?;
            Line::Command(Command::SelectHotkey(index))
        }
        ("menu", None) => Line::Menu,
        ("quit" | "exit", None) => Line::Quit,
        _ => return Err(bad(format!("unrecognised command '{text}'"))),
    };
    Ok(line)
}

/// Render the menu as indented text with check marks.
pub fn render_menu(menu: &Menu) -> String {
    let mut out = String::new();
    for item in &menu.items {
        match item {
            MenuItem::Entry(e) => {
                let _ignored = writeln!(out, "{}", e.title);
            }
            MenuItem::Separator => out.push_str("---\n"),
            MenuItem::Submenu { title, entries } => {
                let _ignored = writeln!(out, "{title}");
                for e in entries {
                    let mark = if e.checked { 'x' } else { ' ' };
                    let _ignored = writeln!(out, "  [{mark}] {}", e.title);
                }
            }
        }
    }
    out
}

/// Counts of what happened during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Passwords written to the output.
    pub generated: usize,
    /// Generation attempts that failed.
    pub failed: usize,
    /// Lines that could not be parsed.
    pub rejected: usize,
}

/// Feed every line of `input` through `ctl`, writing passwords and menus to `out`.
///
/// Unparseable lines and failed generations are logged and skipped; only I/O
/// errors end the run early.
pub fn run<R, I, W>(ctl: &mut Controller<R>, input: I, mut out: W) -> Result<Summary>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    let mut summary = Summary::default();
    for (i, text) in input.lines().enumerate() {
        let text = text?;
        let line = match parse_line(i + 1, &text) {
            Ok(line) => line,
            Err(e) => {
                warn!("{e}");
                summary.rejected += 1;
                continue;
            }
        };
        match line {
            Line::Empty => {}
            Line::Quit => break,
            Line::Menu => out.write_all(render_menu(&ctl.menu()).as_bytes())?,
            Line::Command(cmd) => {
                let outcome = ctl.handle(cmd);
                signal(outcome.feedback());
                match outcome {
                    Outcome::Generated(pw) => {
                        writeln!(out, "{}", pw.as_str())?;
                        summary.generated += 1;
                    }
                    Outcome::Failed(e) => {
                        error!("could not generate password: {e}");
                        summary.failed += 1;
                    }
                    Outcome::Rebind(binding) => {
                        info!(chord = %binding.chord, label = binding.label, "register hotkey");
                    }
                    Outcome::Updated => {}
                }
            }
        }
    }
    out.flush()?;
    Ok(summary)
}

/// Stand-in for the audible cue a desktop front end would play.
fn signal(feedback: Feedback) {
    match feedback {
        Feedback::Success => info!("feedback: success"),
        Feedback::Failure => warn!("feedback: failure"),
        Feedback::None => {}
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use passgen::{Configuration, RandomSourceError};

    use super::*;

    /// Always returns zero bytes, so every password is the first charset character repeated.
    struct Zeros;

    impl RandomSource for Zeros {
        fn fill(&mut self, buf: &mut [u8]) -> std::result::Result<(), RandomSourceError> {
            buf.fill(0);
            Ok(())
        }
    }

    fn drive(script: &str) -> (Summary, String) {
        let mut ctl = Controller::with_rng(Configuration::default(), Zeros);
        let mut out = Vec::new();
        let summary = run(&mut ctl, Cursor::new(script), &mut out).expect("run");
        (summary, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            parse_line(1, "generate").expect("parse"),
            Line::Command(Command::GenerateRequested)
        );
        assert_eq!(
            parse_line(1, "  length 20 ").expect("parse"),
            Line::Command(Command::SetLength(20))
        );
        assert_eq!(
            parse_line(1, "toggle digits").expect("parse"),
            Line::Command(Command::ToggleClass(CharClass::Digits))
        );
        assert_eq!(
            parse_line(1, "hotkey cmd+opt+g").expect("parse"),
            Line::Command(Command::SelectHotkey(2))
        );
        assert_eq!(parse_line(1, "# note").expect("parse"), Line::Empty);
        assert_eq!(parse_line(1, "QUIT").expect("parse"), Line::Quit);
    }

    #[test]
    fn parse_errors_carry_line_number() {
        let err = parse_line(7, "length many").expect_err("bad length");
        assert!(err.to_string().starts_with("line 7:"), "{err}");
        assert!(parse_line(1, "hotkey 9").is_err());
        assert!(parse_line(1, "toggle emoji").is_err());
        assert!(parse_line(1, "generate now").is_err());
        assert!(parse_line(1, "dance").is_err());
    }

    #[test]
    fn script_applies_commands_in_order() {
        let (summary, out) = drive("generate\nlength 4\ntoggle upper\ngenerate\n");
        assert_eq!(summary.generated, 2);
        assert_eq!(out, "AAAAAAAAAAAAAAAA\naaaa\n");
    }

    #[test]
    fn failures_and_bad_lines_do_not_stop_the_run() {
        let script = "toggle upper\ntoggle lower\ntoggle digits\ntoggle special\n\
                      generate\nbogus\ntoggle digits\ngenerate\n";
        let (summary, out) = drive(script);
        assert_eq!(
            summary,
            Summary {
                generated: 1,
                failed: 1,
                rejected: 1,
            }
        );
        assert_eq!(out, "0000000000000000\n");
    }

    #[test]
    fn quit_stops_reading() {
        let (summary, out) = drive("generate\nquit\ngenerate\n");
        assert_eq!(summary.generated, 1);
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn menu_shows_check_marks() {
        let (_, out) = drive("length 12\nhotkey 1\nmenu\n");
        assert!(out.starts_with("Generate Password\n---\nLength\n  [x] 12 characters\n"));
        assert!(out.contains("  [ ] 16 characters\n"));
        assert!(out.contains("  [x] ^⌥P\n"));
        assert!(out.ends_with("---\nQuit\n"));
    }
}
