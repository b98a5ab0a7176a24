//! Punycode: Encode Unicode domain labels as ASCII (RFC 3492).
//!
//! Punycode maps a label of Unicode code points onto letters, digits and
//! hyphens, tagged with `xn--`. The basic (ASCII) code points are copied
//! literally; the rest are encoded as deltas using adaptive
//! variable-length integers.
//!
//! This crate converts one label at a time. It does not normalize input,
//! split domain names on `.`, or check DNS length limits.
//!
//! # Key Properties
//!
//! - Roundtrip: `decode(encode(x)) == x` for any label
//! - ASCII identity: labels made only of ASCII pass through `encode`
//!   unchanged
//! - Pass-through: `decode` returns labels without the `xn--` tag unchanged
//!
//! # Examples
//!
//! ```
//! use punycode::{decode, encode, is_punycode};
//!
//! // ASCII labels pass through unchanged
//! assert_eq!(encode("example"), "example");
//!
//! // Non-ASCII labels get encoded and tagged
//! let encoded = encode("münchen");
//! assert_eq!(encoded, "xn--mnchen-3ya");
//! assert!(is_punycode(&encoded));
//! assert_eq!(decode(&encoded).unwrap(), "münchen");
//! ```

mod bootstring;
mod code_points;
mod decode;
mod encode;
mod error;

pub use code_points::{classify, pack, unpack, Classified};
pub use decode::{decode, decode_to_code_points, is_punycode};
pub use encode::{encode, encode_code_points, DELIMITER, PREFIX};
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Encoding Tests ====================

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode("example"), "example");
        assert_eq!(encode("a-b_c.d"), "a-b_c.d");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_encode_known_labels() {
        assert_eq!(encode("münchen"), "xn--mnchen-3ya");
        assert_eq!(encode("bücher"), "xn--bcher-kva");
        assert_eq!(encode("ü"), "xn--tda");
    }

    // ==================== Decoding Tests ====================

    #[test]
    fn test_decode_known_labels() {
        assert_eq!(decode("xn--mnchen-3ya").unwrap(), "münchen");
        assert_eq!(decode("xn--bcher-kva").unwrap(), "bücher");
    }

    #[test]
    fn test_decode_passthrough() {
        assert_eq!(decode("not-punycode").unwrap(), "not-punycode");
        assert_eq!(decode("example").unwrap(), "example");
    }

    #[test]
    fn test_decode_rejects_bad_symbols() {
        assert!(matches!(
            decode("xn--bcher-k_a"),
            Err(Error::InvalidSymbol { symbol: '_', .. })
        ));
    }

    // ==================== is_punycode Tests ====================

    #[test]
    fn test_is_punycode() {
        assert!(is_punycode("xn--nxasmq6b"));
        assert!(is_punycode(&encode("日本語")));

        assert!(!is_punycode("example.com"));
        assert!(!is_punycode(&encode("example")));
    }

    // ==================== Code Point Surface ====================

    #[test]
    fn test_code_point_roundtrip() {
        let original = unpack("Pročprostěnemluvíčesky");
        let encoded = encode_code_points(&original).unwrap();
        assert_eq!(decode_to_code_points(&encoded).unwrap(), original);
        assert_eq!(pack(&original).unwrap(), "Pročprostěnemluvíčesky");
    }

    #[test]
    fn test_classify_reexport() {
        let classified = classify(&unpack("aü"));
        assert_eq!(classified.basic, vec![0x61]);
        assert_eq!(classified.non_basic, vec![0xFC]);
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_very_long_label() {
        let original = "ü".repeat(5000);
        let encoded = encode(&original);
        assert_eq!(decode(&encoded).unwrap(), original);

        let ascii = "a".repeat(1000);
        assert_eq!(encode(&ascii), ascii);
    }

    #[test]
    fn test_high_code_points() {
        // A long basic run before U+10FFFF pushes the first delta past u32
        let original = format!("{}\u{10FFFF}", "a".repeat(5000));
        let encoded = encode(&original);
        assert_eq!(decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_delimiters_in_basic() {
        for original in ["-ü", "ü-", "--ü--", "a-ü-b"] {
            let encoded = encode(original);
            assert_eq!(decode(&encoded).unwrap(), original, "encoded: {}", encoded);
        }
    }
}
