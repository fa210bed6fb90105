use crate::modes::EcbMode;
use crate::Error;

#[test]
fn bulk_round_trip() {
    let key: Vec<u8> = (0u8..56).collect();
    let cipher = EcbMode::new(&key).unwrap();

    let plaintext: Vec<u8> = (0u16..800).map(|i| i as u8).collect();
    let mut ciphertext = vec![0u8; plaintext.len()];
    cipher.encrypt(&plaintext, &mut ciphertext).unwrap();

    let mut recovered = vec![0u8; plaintext.len()];
    cipher.decrypt(&ciphertext, &mut recovered).unwrap();

    assert_eq!(recovered, plaintext);
    assert_ne!(ciphertext, plaintext);
}

#[test]
fn unaligned_count_is_rejected() {
    let cipher = EcbMode::new(b"a key").unwrap();
    let plaintext = [0u8; 5];
    let mut out = [0u8; 5];
    let err = cipher.encrypt(&plaintext, &mut out).unwrap_err();
    assert_eq!(err, Error::Unaligned { count: 5 });
}

#[test]
fn short_destination_is_rejected() {
    let cipher = EcbMode::new(b"a key").unwrap();
    let plaintext = [0u8; 16];
    let mut out = [0u8; 8];
    assert!(matches!(
        cipher.encrypt(&plaintext, &mut out),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn in_place_round_trip() {
    let key: Vec<u8> = (0u8..56).collect();
    let cipher = EcbMode::new(&key).unwrap();

    let original: Vec<u8> = (0u16..800).map(|i| i as u8).collect();
    let mut buf = original.clone();

    cipher.encrypt_in_place(&mut buf).unwrap();
    assert_ne!(buf, original);

    cipher.decrypt_in_place(&mut buf).unwrap();
    assert_eq!(buf, original);
}

#[test]
fn in_place_unaligned_count_is_rejected() {
    let cipher = EcbMode::new(b"a key").unwrap();
    let mut buf = [0u8; 5];
    let err = cipher.encrypt_in_place(&mut buf).unwrap_err();
    assert_eq!(err, Error::Unaligned { count: 5 });
}

#[test]
fn equal_plaintext_blocks_yield_equal_ciphertext_blocks() {
    let cipher = EcbMode::new(b"ecb pattern leak").unwrap();
    let plaintext = [1u8, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 7, 8];
    let mut ciphertext = [0u8; 16];
    cipher.encrypt(&plaintext, &mut ciphertext).unwrap();
    assert_eq!(ciphertext[0..8], ciphertext[8..16]);
}
