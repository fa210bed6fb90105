//! # blowfish-rs
//!
//! A from-scratch implementation of the Blowfish block cipher: the
//! 16-round Feistel core ([`engine::RoundEngine`]), three modes of
//! operation built on top of it ([`modes::ecb`], [`modes::cbc`],
//! [`modes::cfb`]), a password-based string-encryption envelope
//! ([`envelope::SimpleEnvelope`]), and a streaming CFB adapter
//! ([`stream`]) that speaks the same little-endian length-prefixed wire
//! format as external peer implementations.
//!
//! ## Example
//!
//! ```rust
//! use blowfish_rs::modes::cbc::CbcMode;
//!
//! let mut cipher = CbcMode::new(b"a 16-byte key!!!").unwrap();
//! cipher.set_iv(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//!
//! let plaintext = [0u8; 16];
//! let mut ciphertext = [0u8; 16];
//! cipher.encrypt(&plaintext, &mut ciphertext).unwrap();
//!
//! cipher.set_iv(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//! let mut recovered = [0u8; 16];
//! cipher.decrypt(&ciphertext, &mut recovered).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! ## Security note
//!
//! This crate provides the raw Blowfish primitive and the historical
//! modes built on it. It does not compute a MAC over ciphertext, and
//! [`envelope::SimpleEnvelope`]'s key derivation is a single unsalted
//! SHA-1 hash of the password — both are preserved for compatibility
//! with an existing on-disk/wire format, not recommended for new designs.

use thiserror::Error;

pub mod consts;
pub mod engine;
pub mod envelope;
pub mod modes;
pub mod rand_source;
pub mod stream;
pub mod vectors;

#[cfg(test)]
mod tests;

pub use crate::engine::RoundEngine;
pub use crate::rand_source::{OsRandom, RandomSource};

/// Size in bytes of a single Blowfish block.
pub const BLOCK_SIZE: usize = 8;

/// Maximum supported Blowfish key length, in bytes (448 bits).
pub const MAX_KEY_LENGTH: usize = 56;

/// Every failure this crate's cipher-level API can report.
///
/// Envelope-level decryption failures are deliberately *not* reported
/// through this type — see [`envelope::SimpleEnvelope::decrypt`], which
/// collapses bad base64, short ciphertext, and bad padding into a single
/// `None` so a caller can't use error variants as a padding oracle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material longer than [`MAX_KEY_LENGTH`] was supplied.
    #[error("key length {length} exceeds the maximum supported length")]
    BadKeyLength {
        /// The length, in bytes, of the rejected key.
        length: usize,
    },

    /// A mode that requires block-aligned input/output was called with a
    /// byte count that isn't a multiple of [`BLOCK_SIZE`].
    #[error("byte count {count} is not a multiple of the block size")]
    Unaligned {
        /// The offending byte count.
        count: usize,
    },

    /// A source or destination range fell outside the bounds of the
    /// buffer it was supposed to index into.
    #[error("range [{offset}, {offset} + {len}) is out of bounds for a buffer of length {capacity}")]
    OutOfBounds {
        /// Start offset of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Actual length of the buffer.
        capacity: usize,
    },

    /// An operation was attempted on a [`RoundEngine`] (or a mode wrapping
    /// one) after [`RoundEngine::invalidate`] was called.
    #[error("operation attempted on an invalidated cipher instance")]
    InstanceInvalidated,

    /// Reserved for callers that want to surface envelope decode failures
    /// as an error rather than `None`; the envelope API itself never
    /// returns this variant (see the type-level note above).
    #[error("input could not be decoded")]
    DecodeFailure,

    /// `self_test` found a mismatch against the embedded test vectors.
    #[error("embedded self-test vectors did not match")]
    SelfTestFailed,

    /// Propagated I/O failure from [`stream::StreamReader`] /
    /// [`stream::StreamWriter`].
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Helper macro to bail out early with an [`Error`] if a condition (or
/// several) holds. Mirrors the teacher crate's `bail!`, generalized to
/// accept a single condition/error pair as well as a list.
#[macro_export]
macro_rules! bail {
    ($expression:expr, $err:expr) => {
        if $expression {
            return Err($err);
        }
    };
    ( $( $cond:expr , $err:expr ),+ $(,)? ) => {
        $(
            if $cond {
                return Err($err);
            }
        )+
    };
}

/// Run the embedded Eric Young test-vector suite against a fresh
/// [`RoundEngine`] built for each vector's key.
///
/// Returns `true` iff every vector's `encrypt_block` matches the expected
/// ciphertext and the corresponding `decrypt_block` recovers the original
/// plaintext. A `false` return (or, for callers that want a hard failure,
/// [`Error::SelfTestFailed`] via [`self_test_checked`]) indicates an
/// implementation defect, not a usage error.
pub fn self_test() -> bool {
    self_test_checked().is_ok()
}

/// Like [`self_test`], but returns [`Error::SelfTestFailed`] on the first
/// mismatching vector instead of a bare bool.
pub fn self_test_checked() -> Result<(), Error> {
    for vector in vectors::ERIC_YOUNG_VECTORS {
        let engine = RoundEngine::new(&vector.key)?;

        let (hi, lo) = RoundEngine::block_from_bytes(&vector.plaintext);
        let (chi, clo) = engine.encrypt_block(hi, lo)?;
        if RoundEngine::block_to_bytes(chi, clo) != vector.ciphertext {
            return Err(Error::SelfTestFailed);
        }

        let (dhi, dlo) = engine.decrypt_block(chi, clo)?;
        if RoundEngine::block_to_bytes(dhi, dlo) != vector.plaintext {
            return Err(Error::SelfTestFailed);
        }
    }
    Ok(())
}
