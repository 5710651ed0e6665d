//! Command-driven owner of the option state.
//!
//! Front ends (menu, hotkey listener, CLI) translate user actions into
//! [`Command`]s and hand them to [`Controller::handle`]. The returned
//! [`Outcome`] tells them what to do next: copy a password, re-render the
//! menu, or re-register the global hotkey.
use tracing::{debug, info, warn};

use crate::{
    CharClass, Configuration, GenerationError, HotkeyBinding, HotkeySelection, OsRandom, Password,
    RandomSource, generate_with, menu::Menu,
};

/// A user action routed to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Produce a password from the current options.
    GenerateRequested,
    /// Set the target length.
    SetLength(usize),
    /// Flip one character class.
    ToggleClass(CharClass),
    /// Activate one of the fixed hotkey bindings. The index must be below
    /// `HOTKEY_OPTIONS.len()`; see [`HotkeySelection::select`].
    SelectHotkey(usize),
}

/// Cue the front end should give the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Confirmation cue after a password was produced.
    Success,
    /// Non-destructive failure cue (a beep).
    Failure,
    /// Nothing to signal.
    None,
}

/// Result of handling one [`Command`].
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A password is ready for the clipboard.
    Generated(Password),
    /// Generation failed; the options are unchanged.
    Failed(GenerationError),
    /// Options changed; the menu should be rebuilt.
    Updated,
    /// The active hotkey changed; re-register it and rebuild the menu.
    Rebind(HotkeyBinding),
}

impl Outcome {
    /// Feedback cue for this outcome.
    pub fn feedback(&self) -> Feedback {
        match self {
            Self::Generated(_) => Feedback::Success,
            Self::Failed(_) => Feedback::Failure,
            Self::Updated | Self::Rebind(_) => Feedback::None,
        }
    }
}

/// Owns the configuration, the hotkey selection and the random source.
#[derive(Debug)]
pub struct Controller<R = OsRandom> {
    /// Generator options.
    config: Configuration,
    /// Active global hotkey.
    hotkey: HotkeySelection,
    /// Byte source for generation.
    rng: R,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Controller {
    /// Controller backed by the operating system CSPRNG.
    pub fn new(config: Configuration) -> Self {
        Self::with_rng(config, OsRandom)
    }
}

impl<R: RandomSource> Controller<R> {
    /// Controller backed by an explicit random source.
    pub fn with_rng(config: Configuration, rng: R) -> Self {
        Self {
            config,
            hotkey: HotkeySelection::default(),
            rng,
        }
    }

    /// Current options.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Current hotkey selection.
    pub fn hotkey(&self) -> HotkeySelection {
        self.hotkey
    }

    /// Apply one command.
    pub fn handle(&mut self, cmd: Command) -> Outcome {
        debug!(?cmd, "handling command");
        match cmd {
            Command::GenerateRequested => match generate_with(&self.config, &mut self.rng) {
                Ok(pw) => {
                    info!(length = pw.len(), "password generated");
                    Outcome::Generated(pw)
                }
                Err(e) => {
                    warn!(error = %e, "password generation failed");
                    Outcome::Failed(e)
                }
            },
            Command::SetLength(n) => {
                self.config.set_length(n);
                Outcome::Updated
            }
            Command::ToggleClass(class) => {
                self.config.toggle(class);
                Outcome::Updated
            }
            Command::SelectHotkey(index) => {
                let binding = self.hotkey.select(index);
                info!(chord = %binding.chord, "hotkey rebound");
                Outcome::Rebind(binding)
            }
        }
    }

    /// Menu model reflecting the current state.
    pub fn menu(&self) -> Menu {
        Menu::build(&self.config, self.hotkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomSourceError;

    /// Random source that always fails.
    struct Broken;

    impl RandomSource for Broken {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<(), RandomSourceError> {
            Err(RandomSourceError::new("entropy unavailable"))
        }
    }

    #[test]
    fn generate_uses_current_length() {
        let mut c: Controller = Controller::default();
        assert_eq!(c.handle(Command::SetLength(20)), Outcome::Updated);
        let Outcome::Generated(pw) = c.handle(Command::GenerateRequested) else {
            panic!("expected a password");
        };
        assert_eq!(pw.len(), 20);
    }

    #[test]
    fn empty_selection_fails_without_touching_config() {
        let mut c: Controller = Controller::default();
        for class in CharClass::ALL {
            c.handle(Command::ToggleClass(class));
        }
        let before = c.config().clone();
        let out = c.handle(Command::GenerateRequested);
        assert_eq!(out, Outcome::Failed(GenerationError::EmptyCharset));
        assert_eq!(out.feedback(), Feedback::Failure);
        assert_eq!(c.config(), &before);
    }

    #[test]
    fn random_failure_is_reported() {
        let mut c = Controller::with_rng(Configuration::default(), Broken);
        let out = c.handle(Command::GenerateRequested);
        assert_eq!(
            out,
            Outcome::Failed(GenerationError::RandomSource(RandomSourceError::new(
                "entropy unavailable"
            )))
        );
        assert_eq!(c.config(), &Configuration::default());
    }

    #[test]
    fn zero_length_keeps_previous() {
        let mut c: Controller = Controller::default();
        c.handle(Command::SetLength(0));
        assert_eq!(c.config().length.get(), 16);
    }

    #[test]
    fn select_hotkey_requests_rebind() {
        let mut c: Controller = Controller::default();
        let out = c.handle(Command::SelectHotkey(1));
        assert_eq!(out.feedback(), Feedback::None);
        match out {
            Outcome::Rebind(b) => assert_eq!(b.chord.to_string(), "opt+ctrl+p"),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(c.hotkey().index(), 1);
    }

    #[test]
    fn success_feedback() {
        let mut c: Controller = Controller::default();
        assert_eq!(
            c.handle(Command::GenerateRequested).feedback(),
            Feedback::Success
        );
    }
}
