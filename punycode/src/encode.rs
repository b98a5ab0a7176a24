//! Punycode encoding implementation.

use tracing::trace;

use crate::bootstring::{adapt, encode_digit, threshold, BASE, INITIAL_BIAS, INITIAL_N};
use crate::code_points::{classify, to_char, unpack};
use crate::error::Result;

/// The tag marking encoded labels.
pub const PREFIX: &str = "xn--";

/// The delimiter between basic code points and the encoded portion.
pub const DELIMITER: char = '-';

/// Encode a Unicode label as Punycode.
///
/// Labels made only of ASCII are returned unchanged, without the `xn--`
/// tag. Everything else is returned tagged.
///
/// # Examples
///
/// ```
/// use punycode::encode;
///
/// assert_eq!(encode("münchen"), "xn--mnchen-3ya");
/// assert_eq!(encode("example"), "example");
/// ```
pub fn encode(input: &str) -> String {
    if input.is_ascii() {
        trace!(label = input, "ascii label passes through unchanged");
        return input.to_string();
    }

    encode_impl(&unpack(input))
}

/// Encode a sequence of raw code points as Punycode.
///
/// Fails with [`crate::Error::OutOfRangeCodePoint`] if any value is a
/// surrogate or lies above `U+10FFFF`.
pub fn encode_code_points(input: &[u32]) -> Result<String> {
    for &cp in input {
        to_char(cp)?;
    }

    Ok(encode_impl(input))
}

/// Internal encoding implementation. `input` must hold scalar values only.
fn encode_impl(input: &[u32]) -> String {
    let classified = classify(input);

    if classified.non_basic.is_empty() {
        trace!(len = input.len(), "no non-basic code points, label unchanged");
        return classified.basic.iter().map(|&cp| basic_char(cp)).collect();
    }

    let mut output = String::with_capacity(PREFIX.len() + input.len() * 2);
    output.push_str(PREFIX);
    output.extend(classified.basic.iter().map(|&cp| basic_char(cp)));

    let b = classified.basic.len() as u64;
    if b > 0 {
        output.push(DELIMITER);
    }

    let mut n = u64::from(INITIAL_N);
    let mut bias = INITIAL_BIAS;
    let mut delta: u64 = 0;
    let mut h = b;

    // One pass per distinct non-basic code point, smallest first
    for m in classified.distinct_non_basic() {
        let m = u64::from(m);
        delta += (m - n) * (h + 1);
        n = m;

        for &c in input {
            let c = u64::from(c);
            if c < n {
                delta += 1;
            }
            if c == n {
                encode_varint(&mut output, delta, bias);
                bias = adapt(delta, h + 1, h == b);
                delta = 0;
                h += 1;
            }
        }

        delta += 1;
        n += 1;
    }

    debug_assert_eq!(h, input.len() as u64);
    trace!(label = output.as_str(), "encoded label");

    output
}

/// Basic code points are below 128, so they fit in a single ASCII byte.
fn basic_char(cp: u32) -> char {
    char::from(cp as u8)
}

/// Encode a value as a generalized variable-length integer.
fn encode_varint(output: &mut String, mut q: u64, bias: u32) {
    let mut k = BASE;

    loop {
        let t = threshold(k, bias);
        let t_wide = u64::from(t);

        if q < t_wide {
            output.push(encode_digit(q as u32).expect("value should be < BASE"));
            break;
        }

        let base_minus_t = u64::from(BASE - t);
        let digit = t_wide + (q - t_wide) % base_minus_t;
        output.push(encode_digit(digit as u32).expect("digit should be < BASE"));

        q = (q - t_wide) / base_minus_t;
        k += BASE;
    }
}
