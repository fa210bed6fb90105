//! Cipher Feedback mode: a self-synchronizing stream mode built from the
//! block cipher, accepting arbitrary byte counts rather than requiring
//! block-aligned buffers.

use zeroize::Zeroize;

use crate::engine::RoundEngine;
use crate::{bail, Error, BLOCK_SIZE};

/// Byte-oriented CFB encryption/decryption with a running keystream
/// buffer.
///
/// Unlike [`crate::modes::EcbMode`] and [`crate::modes::CbcMode`], CFB has
/// no alignment requirement: [`CfbMode::encrypt`]/[`CfbMode::decrypt`]
/// accept any number of bytes, and splitting a call into two pieces
/// produces the same output as one call over the concatenation (see the
/// `cfb_split_matches_single_call` test).
#[derive(Clone)]
pub struct CfbMode {
    engine: RoundEngine,
    iv: [u8; BLOCK_SIZE],
    iv_bytes_left: usize,
}

impl CfbMode {
    /// Build a new CFB instance, running the key schedule on `key`. The
    /// IV starts out zeroed with an empty keystream buffer, so the first
    /// byte processed triggers a fresh block encryption.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            engine: RoundEngine::new(key)?,
            iv: [0u8; BLOCK_SIZE],
            iv_bytes_left: 0,
        })
    }

    /// Re-run the key schedule on `key` and reset the IV/cursor.
    pub fn initialize(&mut self, key: &[u8]) -> Result<(), Error> {
        self.engine.initialize(key)?;
        self.iv = [0u8; BLOCK_SIZE];
        self.iv_bytes_left = 0;
        Ok(())
    }

    /// Replace the current IV with the first [`crate::BLOCK_SIZE`] bytes
    /// of `iv` and force a fresh block encryption on the next byte
    /// processed.
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
        self.iv_bytes_left = 0;
        Ok(())
    }

    /// A copy of the current IV/keystream buffer.
    pub fn iv(&self) -> [u8; BLOCK_SIZE] {
        self.iv
    }

    /// Encrypt `src` into `dst` (equal lengths; any length, including
    /// zero, is valid).
    pub fn encrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
        self.run(src, dst, true)
    }

    /// Decrypt `src` into `dst`, under the same length contract as
    /// [`CfbMode::encrypt`].
    pub fn decrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
        self.run(src, dst, false)
    }

    fn run(&mut self, src: &[u8], dst: &mut [u8], encrypting: bool) -> Result<usize, Error> {
        bail!(
            dst.len() < src.len(),
            Error::OutOfBounds {
                offset: 0,
                len: src.len(),
                capacity: dst.len(),
            }
        );

        for (in_byte, out_byte) in src.iter().zip(dst.iter_mut()) {
            if self.iv_bytes_left == 0 {
                let (hi, lo) = RoundEngine::block_from_bytes(&self.iv);
                let (chi, clo) = self.engine.encrypt_block(hi, lo)?;
                self.iv = RoundEngine::block_to_bytes(chi, clo);
                self.iv_bytes_left = BLOCK_SIZE;
            }

            let idx = BLOCK_SIZE - self.iv_bytes_left;
            let keystream_byte = self.iv[idx];

            let result_byte = in_byte ^ keystream_byte;
            self.iv[idx] = if encrypting { result_byte } else { *in_byte };
            self.iv_bytes_left -= 1;

            *out_byte = result_byte;
        }

        Ok(src.len())
    }

    /// Overwrite the expanded key schedule and IV with zero and mark
    /// this instance unusable.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
        self.iv.zeroize();
        self.iv_bytes_left = 0;
    }

    /// True if the key schedule produced a duplicate S-box entry.
    pub fn weak_key(&self) -> bool {
        self.engine.weak_key()
    }
}
