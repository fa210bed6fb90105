//! The embedded Eric Young self-test vectors.
//!
//! This is the classic 34-triple Blowfish test set that has shipped
//! alongside more or less every Blowfish implementation since Eric
//! Young's original one; [`crate::self_test`] runs every triple through
//! both [`crate::RoundEngine::encrypt_block`] and
//! [`crate::RoundEngine::decrypt_block`].

use hex_literal::hex;

/// One key/plaintext/ciphertext triple from the embedded self-test set.
pub struct Vector {
    /// The 8-byte key for this vector.
    pub key: [u8; 8],
    /// The 8-byte plaintext block.
    pub plaintext: [u8; 8],
    /// The expected 8-byte ciphertext block.
    pub ciphertext: [u8; 8],
}

/// The 34 Eric Young test vectors, key = 8 bytes each.
///
/// Vector 7 duplicates vector 1 deliberately — it is part of the
/// original published set and exercises re-scheduling the same key twice
/// in a row.
pub const ERIC_YOUNG_VECTORS: [Vector; 34] = [
    v(hex!("0000000000000000"), hex!("0000000000000000"), hex!("4EF997456198DD78")),
    v(hex!("FFFFFFFFFFFFFFFF"), hex!("FFFFFFFFFFFFFFFF"), hex!("51866FD5B85ECB8A")),
    v(hex!("3000000000000000"), hex!("1000000000000001"), hex!("7D856F9A613063F2")),
    v(hex!("1111111111111111"), hex!("1111111111111111"), hex!("2466DD878B963C9D")),
    v(hex!("0123456789ABCDEF"), hex!("1111111111111111"), hex!("61F9C3802281B096")),
    v(hex!("1111111111111111"), hex!("0123456789ABCDEF"), hex!("7D0CC630AFDA1EC7")),
    v(hex!("0000000000000000"), hex!("0000000000000000"), hex!("4EF997456198DD78")),
    v(hex!("FEDCBA9876543210"), hex!("0123456789ABCDEF"), hex!("0ACEAB0FC6A0A28D")),
    v(hex!("7CA110454A1A6E57"), hex!("01A1D6D039776742"), hex!("59C68245EB05282B")),
    v(hex!("0131D9619DC1376E"), hex!("5CD54CA83DEF57DA"), hex!("B1B8CC0B250F09A0")),
    v(hex!("07A1133E4A0B2686"), hex!("0248D43806F67172"), hex!("1730E5778BEA1DA4")),
    v(hex!("3849674C2602319E"), hex!("51454B582DDF440A"), hex!("A25E7856CF2651EB")),
    v(hex!("04B915BA43FEB5B6"), hex!("42FD443059577FA2"), hex!("353882B109CE8F1A")),
    v(hex!("0113B970FD34F2CE"), hex!("059B5E0851CF143A"), hex!("48F4D0884C379918")),
    v(hex!("0170F175468FB5E6"), hex!("0756D8E0774761D2"), hex!("432193B78951FC98")),
    v(hex!("43297FAD38E373FE"), hex!("762514B829BF486A"), hex!("13F04154D69D1AE5")),
    v(hex!("07A7137045DA2A16"), hex!("3BDD119049372802"), hex!("2EEDDA93FFD39C79")),
    v(hex!("04689104C2FD3B2F"), hex!("26955F6835AF609A"), hex!("D887E0393C2DA6E3")),
    v(hex!("37D06BB516CB7546"), hex!("164D5E404F275232"), hex!("5F99D04F5B163969")),
    v(hex!("1F08260D1AC2465E"), hex!("6B056E18759F5CCA"), hex!("4A057A3B24D3977B")),
    v(hex!("584023641ABA6176"), hex!("004BD6EF09176062"), hex!("452031C1E4FADA8E")),
    v(hex!("025816164629B007"), hex!("480D39006EE762F2"), hex!("7555AE39F59B87BD")),
    v(hex!("49793EBC79B3258F"), hex!("437540C8698F3CFA"), hex!("53C55F9CB49FC019")),
    v(hex!("4FB05E1515AB73A7"), hex!("072D43A077075292"), hex!("7A8E7BFA937E89A3")),
    v(hex!("49E95D6D4CA229BF"), hex!("02FE55778117F12A"), hex!("CF9C5D7A4986ADB5")),
    v(hex!("018310DC409B26D6"), hex!("1D9D5C5018F728C2"), hex!("D1ABB290658BC778")),
    v(hex!("1C587F1C13924FEF"), hex!("305532286D6F295A"), hex!("55CB3774D13EF201")),
    v(hex!("0101010101010101"), hex!("0123456789ABCDEF"), hex!("FA34EC4847B268B2")),
    v(hex!("1F1F1F1F0E0E0E0E"), hex!("0123456789ABCDEF"), hex!("A790795108EA3CAE")),
    v(hex!("E0FEE0FEF1FEF1FE"), hex!("0123456789ABCDEF"), hex!("C39E072D9FAC631D")),
    v(hex!("0000000000000000"), hex!("FFFFFFFFFFFFFFFF"), hex!("014933E0CDAFF6E4")),
    v(hex!("FFFFFFFFFFFFFFFF"), hex!("0000000000000000"), hex!("F21E9A77B71C49BC")),
    v(hex!("0123456789ABCDEF"), hex!("0000000000000000"), hex!("245946885754369A")),
    v(hex!("FEDCBA9876543210"), hex!("FFFFFFFFFFFFFFFF"), hex!("6B5C5A9C5D9E0A5A")),
];

const fn v(key: [u8; 8], plaintext: [u8; 8], ciphertext: [u8; 8]) -> Vector {
    Vector { key, plaintext, ciphertext }
}
