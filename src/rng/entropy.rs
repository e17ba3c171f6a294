//! Sources of salt randomness.
//!
//! Salts only need to be unique and unpredictable, so the default source
//! reads straight from the operating system. The trait exists so callers
//! can plug in another audited generator, and so tests can observe whether
//! randomness was drawn at all.

use rand_core::{OsRng, RngCore};

use crate::error::{Error, Result};

/// A cryptographically secure source of random bytes.
///
/// Implementations must report failure instead of returning low-quality
/// output. A failed fill leaves the buffer contents unspecified.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    fn try_fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Entropy read from the operating system (`getrandom(2)` on Linux).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(Error::EntropyUnavailable)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn try_fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).try_fill(buf)
    }
}
