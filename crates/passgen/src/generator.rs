//! Secure random selection of password characters.
use std::{fmt, mem};

use tracing::{trace, warn};
use zeroize::Zeroizing;

use crate::{Charset, Configuration, OsRandom, RandomSource, Result};

/// Largest charset every element of which a single random byte can reach.
const BYTE_REACH: usize = 256;

/// A freshly generated password. The contents are wiped on drop and never
/// shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// The password text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True only for an empty password, which the generator never produces.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hand the text to a consumer such as a clipboard writer.
    pub fn into_string(self) -> String {
        let mut inner = self.0;
        mem::take(&mut *inner)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

/// Generate a password for `config` using the operating system CSPRNG.
pub fn generate(config: &Configuration) -> Result<Password> {
    generate_with(config, &mut OsRandom)
}

/// Generate a password for `config`, drawing bytes from `rng`.
///
/// Exactly `config.length` bytes are requested in a single call and each byte
/// `b` selects `charset[b % charset.len()]`. A source failure fails the whole
/// attempt; nothing partial is returned and nothing is retried.
pub fn generate_with<R>(config: &Configuration, rng: &mut R) -> Result<Password>
where
    R: RandomSource + ?Sized,
{
    let charset = Charset::from_config(config)?;
    if charset.len() > BYTE_REACH {
        warn!(
            charset_len = charset.len(),
            "charset exceeds 256 characters; trailing characters cannot be selected"
        );
    }

    let length = config.length.get();
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    rng.fill(&mut bytes)?;

    let password = select(&charset, &bytes);
    trace!(length, charset_len = charset.len(), "password generated");
    Ok(Password(password))
}

/// Map each byte onto the charset by modulo.
///
/// The output is sized for the widest character up front so the string never
/// reallocates and leaves an unwiped copy of a partial password behind.
fn select(charset: &Charset, bytes: &[u8]) -> Zeroizing<String> {
    let chars = charset.as_chars();
    let widest = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let mut out = Zeroizing::new(String::with_capacity(bytes.len() * widest));
    for b in bytes {
        out.push(chars[usize::from(*b) % chars.len()]);
    }
    out
}
