//! Legacy spreadsheet-protection password checksum.
//!
//! This is the XOR/shift scheme that produces the 16-bit value stored in
//! attributes such as:
//! - `sheetProtection password="...."`
//! - `workbookProtection workbookPassword="...."`
//!
//! The scheme dates back to the original binary spreadsheet format and is
//! **not** cryptographically secure; any reimplementation must match it
//! bit-for-bit so produced files interoperate with the legacy ecosystem.

use crate::error::ProtectionError;

/// Hash a password using the legacy worksheet/workbook protection algorithm.
///
/// Each UTF-16 code unit is shifted one bit further than the previous one,
/// folded back into a 15-bit window, and XOR-folded into the accumulator; the
/// result is then XORed with the input length and the constant `0xCE4B`.
///
/// The function is total: any input, including the empty string, produces a
/// value, and identical inputs always produce identical values.
#[must_use]
pub fn hash_password(password: &str) -> u16 {
    let mut hash: u16 = 0;
    let mut len: u16 = 0;

    for (i, unit) in password.encode_utf16().enumerate() {
        len = len.wrapping_add(1);
        // The per-character shift cycles through 1..=15 so the diffusion step
        // stays inside the 15-bit window for inputs of any length.
        let shift = (i % 15) as u32 + 1;
        let value = (unit as u32) << shift;
        let rotated_bits = value >> 15;
        hash ^= ((value & 0x7FFF) | rotated_bits) as u16;
    }

    hash ^= len;
    hash ^= 0xCE4B;
    hash
}

/// Render [`hash_password`] the way legacy files store it: uppercase hex with
/// no radix prefix and no zero padding.
///
/// The output is 1 to 4 characters from `0-9A-F`. Legacy producers strip the
/// `0x` prefix from an unpadded rendering rather than padding to 4 digits,
/// so the variable length is preserved here for compatibility.
#[must_use]
pub fn hash_password_hex(password: &str) -> String {
    format!("{:X}", hash_password(password))
}

/// Check a password attempt against a stored protection hash.
#[must_use]
pub fn verify_password(password: &str, hash: u16) -> bool {
    hash_password(password) == hash
}

/// Parse a stored protection digest (as produced by [`hash_password_hex`])
/// back into its 16-bit value.
///
/// Accepts 1 to 4 hex digits in either case, with surrounding whitespace
/// tolerated. Empty or non-hex input is rejected.
pub fn parse_password_hash(value: &str) -> Result<u16, ProtectionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProtectionError::InvalidPasswordHash {
            value: value.to_string(),
        });
    }
    u16::from_str_radix(trimmed, 16).map_err(|_| ProtectionError::InvalidPasswordHash {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_password_hashes_to_constant() {
        assert_eq!(hash_password(""), 0xCE4B);
        assert_eq!(hash_password_hex(""), "CE4B");
    }

    #[test]
    fn known_vector_single_char() {
        // 'A' (65): 65<<1 = 130, XOR length 1 = 131, XOR 0xCE4B = 0xCEC8.
        assert_eq!(hash_password("A"), 0xCEC8);
        assert_eq!(hash_password_hex("A"), "CEC8");
    }

    #[test]
    fn known_vectors_common_passwords() {
        // Values produced by the reference implementation of the legacy scheme.
        assert_eq!(hash_password_hex("password"), "83AF");
        assert_eq!(hash_password_hex("test"), "CBEB");
    }

    #[test]
    fn distinct_single_chars_hash_differently() {
        assert_ne!(hash_password("a"), hash_password("b"));
    }

    #[test]
    fn verify_round_trips() {
        let hash = hash_password("open sesame");
        assert!(verify_password("open sesame", hash));
        assert!(!verify_password("open sesame!", hash));
    }

    #[test]
    fn hex_digest_has_no_padding() {
        // At position 15 the shift wraps the code unit all the way around, so
        // the contribution is the unit itself; picking U+B1DA cancels the 14
        // leading 'a' contributions, the length, and the final constant.
        let s = format!("{}\u{B1DA}", "a".repeat(14));
        assert_eq!(hash_password(&s), 0);
        assert_eq!(hash_password_hex(&s), "0");
    }

    #[test]
    fn parse_accepts_short_and_mixed_case_digests() {
        assert_eq!(parse_password_hash("CE4B").unwrap(), 0xCE4B);
        assert_eq!(parse_password_hash("ce4b").unwrap(), 0xCE4B);
        assert_eq!(parse_password_hash(" 0 ").unwrap(), 0);
        assert_eq!(parse_password_hash("F").unwrap(), 0xF);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_password_hash("").is_err());
        assert!(parse_password_hash("   ").is_err());
        assert!(parse_password_hash("XYZ").is_err());
        assert!(parse_password_hash("12345").is_err());
        assert!(parse_password_hash("0x1A").is_err());
    }

    #[test]
    fn supplementary_plane_chars_hash_as_utf16_units() {
        // Non-BMP input goes through surrogate pairs; the hash must stay
        // total and deterministic for it.
        let s = "\u{1F4CA}";
        assert_eq!(hash_password(s), hash_password(s));
    }

    #[test]
    fn long_passwords_stay_in_range() {
        let s = "x".repeat(1000);
        let hex = hash_password_hex(&s);
        assert!(!hex.is_empty() && hex.len() <= 4, "digest {hex:?}");
    }

    proptest! {
        #[test]
        fn hash_is_deterministic(s in ".{0,64}") {
            prop_assert_eq!(hash_password(&s), hash_password(&s));
        }

        #[test]
        fn digest_is_short_uppercase_hex(s in ".{0,64}") {
            let hex = hash_password_hex(&s);
            prop_assert!((1..=4).contains(&hex.len()), "digest {:?}", hex);
            prop_assert!(
                hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)),
                "digest {:?}",
                hex
            );
        }

        #[test]
        fn digest_parses_back_to_hash(s in ".{0,64}") {
            let hash = hash_password(&s);
            prop_assert_eq!(parse_password_hash(&hash_password_hex(&s)).unwrap(), hash);
        }
    }
}
