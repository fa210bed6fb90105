//! Cipher Block Chaining mode: each ciphertext block is XORed into the
//! next plaintext block before encryption, so identical plaintext blocks
//! no longer produce identical ciphertext.

use zeroize::Zeroize;

use crate::engine::RoundEngine;
use crate::{bail, Error, BLOCK_SIZE};

/// IV-chained, block-aligned CBC encryption/decryption.
#[derive(Clone)]
pub struct CbcMode {
    engine: RoundEngine,
    iv: [u8; BLOCK_SIZE],
}

impl CbcMode {
    /// Build a new CBC instance, running the key schedule on `key`. The
    /// IV starts out zeroed; call [`CbcMode::set_iv`] before encrypting.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            engine: RoundEngine::new(key)?,
            iv: [0u8; BLOCK_SIZE],
        })
    }

    /// Re-run the key schedule on `key` and reset the IV to zero.
    pub fn initialize(&mut self, key: &[u8]) -> Result<(), Error> {
        self.engine.initialize(key)?;
        self.iv = [0u8; BLOCK_SIZE];
        Ok(())
    }

    /// Replace the current IV with the first [`crate::BLOCK_SIZE`] bytes
    /// of `iv`.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), Error> {
        bail!(
            iv.len() < BLOCK_SIZE,
            Error::OutOfBounds {
                offset: 0,
                len: BLOCK_SIZE,
                capacity: iv.len(),
            }
        );
        self.iv.copy_from_slice(&iv[..BLOCK_SIZE]);
        Ok(())
    }

    /// A copy of the current IV (the most recently chained ciphertext
    /// block, or the last value passed to [`CbcMode::set_iv`]).
    pub fn iv(&self) -> [u8; BLOCK_SIZE] {
        self.iv
    }

    /// Encrypt `src` into `dst`; both must be a non-zero multiple of
    /// [`crate::BLOCK_SIZE`] in length. Advances the internal IV to the
    /// last emitted ciphertext block.
    pub fn encrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
        bail!(src.len() % BLOCK_SIZE != 0, Error::Unaligned { count: src.len() });
        bail!(
            dst.len() < src.len(),
            Error::OutOfBounds {
                offset: 0,
                len: src.len(),
                capacity: dst.len(),
            }
        );

        let mut prev = self.iv;
        for (src_block, dst_block) in src.chunks_exact(BLOCK_SIZE).zip(dst.chunks_exact_mut(BLOCK_SIZE)) {
            let mut working = [0u8; BLOCK_SIZE];
            for i in 0..BLOCK_SIZE {
                working[i] = src_block[i] ^ prev[i];
            }
            let (hi, lo) = RoundEngine::block_from_bytes(&working);
            let (chi, clo) = self.engine.encrypt_block(hi, lo)?;
            let ciphertext = RoundEngine::block_to_bytes(chi, clo);
            dst_block.copy_from_slice(&ciphertext);
            prev = ciphertext;
            working.zeroize();
        }
        self.iv = prev;
        Ok(src.len())
    }

    /// Decrypt `src` into `dst`, under the same length contract as
    /// [`CbcMode::encrypt`]. Advances the internal IV to the last
    /// consumed ciphertext block.
    pub fn decrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
        bail!(src.len() % BLOCK_SIZE != 0, Error::Unaligned { count: src.len() });
        bail!(
            dst.len() < src.len(),
            Error::OutOfBounds {
                offset: 0,
                len: src.len(),
                capacity: dst.len(),
            }
        );

        let mut prev = self.iv;
        for (src_block, dst_block) in src.chunks_exact(BLOCK_SIZE).zip(dst.chunks_exact_mut(BLOCK_SIZE)) {
            let cipher_bytes: [u8; BLOCK_SIZE] = src_block.try_into().expect("chunks_exact yields BLOCK_SIZE slices");
            let (hi, lo) = RoundEngine::block_from_bytes(&cipher_bytes);
            let (dhi, dlo) = self.engine.decrypt_block(hi, lo)?;
            let mut plain = RoundEngine::block_to_bytes(dhi, dlo);
            for i in 0..BLOCK_SIZE {
                plain[i] ^= prev[i];
            }
            dst_block.copy_from_slice(&plain);
            prev = cipher_bytes;
            plain.zeroize();
        }
        self.iv = prev;
        Ok(src.len())
    }

    /// Overwrite the expanded key schedule and IV with zero and mark
    /// this instance unusable.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
        self.iv.zeroize();
    }

    /// True if the key schedule produced a duplicate S-box entry.
    pub fn weak_key(&self) -> bool {
        self.engine.weak_key()
    }
}
