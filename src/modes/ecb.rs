//! Electronic Codebook mode: the bare cipher applied independently to
//! each block, with no chaining state at all.

use crate::engine::RoundEngine;
use crate::{bail, Error, BLOCK_SIZE};

/// Stateless, block-aligned ECB encryption/decryption.
///
/// ECB leaks equal-plaintext-block patterns into the ciphertext and is
/// kept here only for compatibility with callers that already rely on
/// it; prefer [`crate::modes::CbcMode`] or [`crate::modes::CfbMode`] for
/// new designs.
#[derive(Clone)]
pub struct EcbMode {
    engine: RoundEngine,
}

impl EcbMode {
    /// Build a new ECB instance, running the key schedule on `key`.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            engine: RoundEngine::new(key)?,
        })
    }

    /// Re-run the key schedule on `key`, discarding any prior state.
    pub fn initialize(&mut self, key: &[u8]) -> Result<(), Error> {
        self.engine.initialize(key)
    }

    /// Encrypt `src` into `dst`, both of which must have a length that is
    /// a non-zero multiple of [`crate::BLOCK_SIZE`]. `src` and `dst` are
    /// independent buffers here — Rust's aliasing rules rule out passing
    /// the same buffer as both an immutable and mutable borrow, so there
    /// is no in-place path through this entry point; use
    /// [`EcbMode::encrypt_in_place`] to encrypt a buffer in place.
    pub fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
        transform(&self.engine, src, dst, RoundEngine::encrypt_block)
    }

    /// Decrypt `src` into `dst`, under the same length contract as
    /// [`EcbMode::encrypt`]. See [`EcbMode::decrypt_in_place`] for the
    /// in-place variant.
    pub fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
        transform(&self.engine, src, dst, RoundEngine::decrypt_block)
    }

    /// Encrypt `buf` in place: each [`crate::BLOCK_SIZE`]-byte block is
    /// overwritten with its own ciphertext. `buf`'s length must be a
    /// non-zero multiple of [`crate::BLOCK_SIZE`].
    pub fn encrypt_in_place(&self, buf: &mut [u8]) -> Result<usize, Error> {
        transform_in_place(&self.engine, buf, RoundEngine::encrypt_block)
    }

    /// Decrypt `buf` in place, under the same length contract as
    /// [`EcbMode::encrypt_in_place`].
    pub fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<usize, Error> {
        transform_in_place(&self.engine, buf, RoundEngine::decrypt_block)
    }

    /// Overwrite the expanded key schedule with zero and mark this
    /// instance unusable.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
    }

    /// True if the key schedule produced a duplicate S-box entry.
    pub fn weak_key(&self) -> bool {
        self.engine.weak_key()
    }
}

fn transform(
    engine: &RoundEngine,
    src: &[u8],
    dst: &mut [u8],
    block_fn: fn(&RoundEngine, u32, u32) -> Result<(u32, u32), Error>,
) -> Result<usize, Error> {
    bail!(src.len() % BLOCK_SIZE != 0, Error::Unaligned { count: src.len() });
    bail!(
        dst.len() < src.len(),
        Error::OutOfBounds {
            offset: 0,
            len: src.len(),
            capacity: dst.len(),
        }
    );

    for (src_block, dst_block) in src.chunks_exact(BLOCK_SIZE).zip(dst.chunks_exact_mut(BLOCK_SIZE)) {
        let block: [u8; BLOCK_SIZE] = src_block.try_into().expect("chunks_exact yields BLOCK_SIZE slices");
        let (hi, lo) = RoundEngine::block_from_bytes(&block);
        let (chi, clo) = block_fn(engine, hi, lo)?;
        dst_block.copy_from_slice(&RoundEngine::block_to_bytes(chi, clo));
    }

    Ok(src.len())
}

fn transform_in_place(
    engine: &RoundEngine,
    buf: &mut [u8],
    block_fn: fn(&RoundEngine, u32, u32) -> Result<(u32, u32), Error>,
) -> Result<usize, Error> {
    bail!(buf.len() % BLOCK_SIZE != 0, Error::Unaligned { count: buf.len() });

    for block in buf.chunks_exact_mut(BLOCK_SIZE) {
        let bytes: [u8; BLOCK_SIZE] = block.try_into().expect("chunks_exact_mut yields BLOCK_SIZE slices");
        let (hi, lo) = RoundEngine::block_from_bytes(&bytes);
        let (chi, clo) = block_fn(engine, hi, lo)?;
        block.copy_from_slice(&RoundEngine::block_to_bytes(chi, clo));
    }

    Ok(buf.len())
}
