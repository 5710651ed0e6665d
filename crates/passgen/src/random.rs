//! Sources of cryptographically secure random bytes.
use crate::RandomSourceError;

/// Something that can fill a buffer with secure random bytes.
///
/// Implementations either fill the whole buffer or fail; partial fills are
/// never reported as success.
pub trait RandomSource {
    /// Fill `buf` completely.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomSourceError>;
}

/// The operating system CSPRNG, via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomSourceError> {
        getrandom::fill(buf).map_err(|e| RandomSourceError::new(e.to_string()))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomSourceError> {
        (**self).fill(buf)
    }
}
