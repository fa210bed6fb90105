//! A password-based string encryption facility built on [`CbcMode`].
//!
//! `SimpleEnvelope` derives a Blowfish key from a password with a single
//! unsalted SHA-1 hash, encrypts UTF-8 text with a random IV and a
//! non-standard padding scheme, and exposes a salted checksum so a
//! caller can verify a password offline without storing it. None of this
//! is a recommended construction for new designs — see the module-level
//! security note in the crate root — it exists to stay byte-compatible
//! with an established on-disk/wire format.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sha1::{Digest, Sha1};
use zeroize::Zeroize;

use crate::modes::CbcMode;
use crate::rand_source::{OsRandom, RandomSource};
use crate::BLOCK_SIZE;

const SHA1_LEN: usize = 20;
const CHECKSUM_LEN: usize = 2 * SHA1_LEN;

/// Password-based envelope over [`CbcMode`].
pub struct SimpleEnvelope<R: RandomSource = OsRandom> {
    cbc: CbcMode,
    key_checksum: String,
    random: R,
}

impl SimpleEnvelope<OsRandom> {
    /// Derive an envelope from `password` using the operating system's
    /// CSPRNG for the salt and per-message IVs.
    pub fn new(password: &str) -> Self {
        Self::with_random(password, OsRandom)
    }
}

impl<R: RandomSource> SimpleEnvelope<R> {
    /// Derive an envelope from `password`, using `random` for the salt
    /// and every subsequent IV. Exposed so tests can reproduce a fixed
    /// fixture; production callers should use [`SimpleEnvelope::new`].
    pub fn with_random(password: &str, mut random: R) -> Self {
        let mut key_raw = password.as_bytes().to_vec();

        let mut key = Sha1::digest(&key_raw).to_vec();
        let cbc = CbcMode::new(&key).expect("a 20-byte SHA-1 digest is always a valid Blowfish key");

        let mut salt = [0u8; SHA1_LEN];
        random.fill(&mut salt);

        let mut hasher = Sha1::new();
        hasher.update(salt);
        hasher.update(&key_raw);
        let checksum = hasher.finalize();

        let mut checksum_bytes = [0u8; CHECKSUM_LEN];
        checksum_bytes[..SHA1_LEN].copy_from_slice(&salt);
        checksum_bytes[SHA1_LEN..].copy_from_slice(&checksum);
        let key_checksum = BASE64.encode(checksum_bytes);

        key_raw.zeroize();
        key.zeroize();

        Self {
            cbc,
            key_checksum,
            random,
        }
    }

    /// The base64(salt || SHA1(salt || password)) checksum for this
    /// envelope's password, suitable for storing alongside encrypted
    /// data so a later [`verify_key`] call can check a candidate
    /// password without ever storing it in the clear.
    pub fn key_checksum(&self) -> &str {
        &self.key_checksum
    }

    /// Encrypt `plaintext`, returning base64(IV || ciphertext).
    ///
    /// A fresh random IV is drawn for every call, so encrypting the same
    /// plaintext twice produces different output.
    pub fn encrypt(&mut self, plaintext: &str) -> String {
        let mut buf = plaintext.as_bytes().to_vec();

        let modulo = buf.len() % BLOCK_SIZE;
        let pad_count = BLOCK_SIZE - modulo;
        buf.resize(buf.len() + pad_count, modulo as u8);

        let mut iv = [0u8; BLOCK_SIZE];
        self.random.fill(&mut iv);
        self.cbc
            .set_iv(&iv)
            .expect("iv is exactly BLOCK_SIZE bytes");

        let mut ciphertext = vec![0u8; buf.len()];
        self.cbc
            .encrypt(&buf, &mut ciphertext)
            .expect("buf was padded to a multiple of BLOCK_SIZE");
        buf.zeroize();

        let mut out = Vec::with_capacity(BLOCK_SIZE + ciphertext.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&ciphertext);

        BASE64.encode(out)
    }

    /// Decrypt a value produced by [`SimpleEnvelope::encrypt`].
    ///
    /// Returns `None` for any failure — bad base64, a ciphertext shorter
    /// than one IV block, an illegal padding byte, or invalid UTF-8 —
    /// deliberately without distinguishing which, so a caller can't use
    /// error variants as a padding oracle (see [`crate::Error::DecodeFailure`]).
    pub fn decrypt(&mut self, cipher_text: &str) -> Option<String> {
        let data = BASE64.decode(cipher_text).ok()?;
        if data.len() < BLOCK_SIZE {
            return None;
        }

        let (iv, rest) = data.split_at(BLOCK_SIZE);
        let data_len = (rest.len() / BLOCK_SIZE) * BLOCK_SIZE;
        if data_len == 0 {
            return None;
        }

        self.cbc.set_iv(iv).ok()?;
        let mut plain = vec![0u8; data_len];
        self.cbc.decrypt(&rest[..data_len], &mut plain).ok()?;

        let pad_value = plain[data_len - 1];
        if pad_value >= BLOCK_SIZE as u8 {
            plain.zeroize();
            return None;
        }

        let recovered_len = data_len - BLOCK_SIZE + pad_value as usize;
        let result = String::from_utf8(plain[..recovered_len].to_vec()).ok();
        plain.zeroize();
        result
    }
}

/// Check whether `password` matches the password that produced
/// `stored_checksum` (as returned by [`SimpleEnvelope::key_checksum`]),
/// without needing to hold the original password anywhere.
///
/// Uses a constant-time comparison so the timing of this call does not
/// leak how many leading bytes of the computed checksum matched. Not
/// tied to any particular `RandomSource` choice, since verification
/// never generates randomness.
pub fn verify_key(password: &str, stored_checksum: &str) -> bool {
    let bytes = match BASE64.decode(stored_checksum) {
        Ok(bytes) if bytes.len() == CHECKSUM_LEN => bytes,
        _ => return false,
    };

    let (salt, expected) = bytes.split_at(SHA1_LEN);

    let mut hasher = Sha1::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let computed = hasher.finalize();

    constant_time_eq(&computed, expected)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
