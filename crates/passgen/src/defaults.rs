// Defaults and constants for the generator options

use std::num::NonZeroUsize;

pub(crate) const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const DIGITS: &str = "0123456789";
pub(crate) const SPECIAL: &str = "!@#$%^&*";

pub(crate) const LENGTH: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(n) => n,
    None => unreachable!(),
};

/// Lengths offered by the length menu.
pub const LENGTH_OPTIONS: [usize; 5] = [12, 16, 20, 24, 32];

// Serde default functions
pub(crate) const fn default_length() -> NonZeroUsize {
    LENGTH
}
pub(crate) const fn default_enabled() -> bool {
    true
}
pub(crate) fn default_special_alphabet() -> String {
    SPECIAL.to_string()
}
