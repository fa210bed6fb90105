//! Pluggable randomness for [`crate::envelope::SimpleEnvelope`].
//!
//! The envelope needs a fresh random salt and IV for every encryption, but
//! hard-wiring a CSPRNG into the type would make the interop fixture (a
//! salt/IV captured from a peer implementation) impossible to reproduce
//! deterministically in a test. [`RandomSource`] is the seam: production
//! callers use [`OsRandom`], tests supply a fixed or scripted byte stream.

use rand::RngCore;

/// A source of random bytes.
///
/// Implementors are only required to fill `buf` with *some* bytes; whether
/// those bytes are cryptographically secure is the implementor's
/// responsibility. [`SimpleEnvelope`](crate::envelope::SimpleEnvelope) uses
/// this trait for its salt and IV, both of which must come from a secure
/// source in production use.
pub trait RandomSource {
    /// Fill `buf` completely with random bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

/// The default [`RandomSource`], backed by the operating system's CSPRNG
/// via `rand`'s thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        rand::thread_rng().fill_bytes(buf);
    }
}

/// A [`RandomSource`] that replays a fixed byte sequence, cycling if it
/// runs out. Only present so tests can reproduce a captured fixture; not
/// exported from the crate root.
#[cfg(test)]
pub(crate) struct FixedRandom<'a> {
    bytes: &'a [u8],
    pos: usize,
}

#[cfg(test)]
impl<'a> FixedRandom<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for FixedRandom<'_> {
    fn fill(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
    }
}
