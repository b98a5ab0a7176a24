//! Bootstring parameters and helpers for Punycode.
//!
//! RFC 3492 describes Bootstring as a family of encodings; Punycode is the
//! instance with base 36 over the alphabet a-z (0-25) + 0-9 (26-35).

/// Base for variable-length integer encoding.
pub(crate) const BASE: u32 = 36;

/// Minimum threshold value.
pub(crate) const T_MIN: u32 = 1;

/// Maximum threshold value.
pub(crate) const T_MAX: u32 = 26;

/// Skew factor for bias adaptation.
pub(crate) const SKEW: u32 = 38;

/// Damping factor for first adaptation.
pub(crate) const DAMP: u32 = 700;

/// Initial bias value.
pub(crate) const INITIAL_BIAS: u32 = 72;

/// First code point that is not basic.
pub(crate) const INITIAL_N: u32 = 0x80;

// RFC 3492 section 4 constraints on the parameters above.
const _: () = assert!(T_MIN <= T_MAX && T_MAX < BASE);
const _: () = assert!(SKEW >= 1);
const _: () = assert!(DAMP >= 2);
const _: () = assert!(INITIAL_BIAS % BASE <= BASE - T_MIN);

/// The encoding alphabet: a-z (0-25) + 0-9 (26-35).
const ALPHABET: &[u8; BASE as usize] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Adapt bias after encoding/decoding a delta.
///
/// `num_points` counts every code point handled so far, including the one
/// this delta belongs to and the basic code points. The first adaptation
/// divides by [`DAMP`] instead of 2 because the first delta is usually much
/// larger than the ones that follow.
pub(crate) fn adapt(delta: u64, num_points: u64, first_time: bool) -> u32 {
    let mut delta = if first_time {
        delta / u64::from(DAMP)
    } else {
        delta / 2
    };

    // The next delta will be inserting into a longer string
    delta += delta / num_points;

    let base_minus_tmin = u64::from(BASE - T_MIN);
    let limit = (base_minus_tmin * u64::from(T_MAX)) / 2;

    let mut k = 0u32;
    while delta > limit {
        delta /= base_minus_tmin;
        k += BASE;
    }

    // delta <= limit here, so the quotient is below BASE
    k + (((base_minus_tmin + 1) * delta) / (delta + u64::from(SKEW))) as u32
}

/// Encode a digit value (0-35) to its character representation.
///
/// Returns `None` if the digit is out of range.
pub(crate) fn encode_digit(d: u32) -> Option<char> {
    ALPHABET.get(d as usize).map(|&b| b as char)
}

/// Decode a character to its digit value (0-35).
///
/// Uppercase letters decode to the same digits as lowercase ones.
/// Returns `None` if the character is not in the alphabet.
pub(crate) fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

/// Calculate the threshold for a given position k and bias.
pub(crate) fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias.saturating_add(T_MIN) {
        T_MIN
    } else if k >= bias.saturating_add(T_MAX) {
        T_MAX
    } else {
        k - bias
    }
}
