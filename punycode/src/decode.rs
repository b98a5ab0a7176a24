//! Punycode decoding implementation.

use tracing::{debug, trace};

use crate::bootstring::{adapt, decode_digit, threshold, BASE, INITIAL_BIAS, INITIAL_N};
use crate::code_points::{to_char, unpack};
use crate::encode::{DELIMITER, PREFIX};
use crate::error::{Error, Result};

/// Quick check if a label has the shape of Punycode.
///
/// The label must start with the `xn--` tag and contain the delimiter at or
/// after the tag. The tag itself ends in the delimiter, so any tagged label
/// qualifies, including ones whose encoded tail has no delimiter of its own.
/// This doesn't validate that the encoding is well-formed.
///
/// ```
/// use punycode::is_punycode;
///
/// assert!(is_punycode("xn--nxasmq6b"));
/// assert!(!is_punycode("example.com"));
/// ```
pub fn is_punycode(input: &str) -> bool {
    input.starts_with(PREFIX)
}

/// Decode a Punycode label back to Unicode.
///
/// Labels without the `xn--` tag are not Punycode and come back unchanged.
///
/// # Examples
///
/// ```
/// use punycode::{decode, Error};
///
/// assert_eq!(decode("xn--mnchen-3ya").unwrap(), "münchen");
/// assert_eq!(decode("not-punycode").unwrap(), "not-punycode");
///
/// assert!(matches!(
///     decode("xn--mnchen-3y!"),
///     Err(Error::InvalidSymbol { symbol: '!', .. })
/// ));
/// ```
pub fn decode(input: &str) -> Result<String> {
    if !is_punycode(input) {
        trace!(label = input, "untagged label passes through unchanged");
        return Ok(input.to_string());
    }

    Ok(decode_tagged(input)?.into_iter().collect())
}

/// Decode a Punycode label to its code points.
///
/// Untagged labels pass through like in [`decode`].
pub fn decode_to_code_points(input: &str) -> Result<Vec<u32>> {
    if !is_punycode(input) {
        trace!(label = input, "untagged label passes through unchanged");
        return Ok(unpack(input));
    }

    Ok(decode_tagged(input)?.into_iter().map(u32::from).collect())
}

fn decode_tagged(input: &str) -> Result<Vec<char>> {
    decode_impl(input).map_err(|err| {
        debug!(label = input, error = %err, "rejected punycode label");
        err
    })
}

/// Internal decoding implementation. `input` must carry the tag.
fn decode_impl(input: &str) -> Result<Vec<char>> {
    let without_prefix = &input[PREFIX.len()..];

    // Everything before the last delimiter is copied verbatim
    let (basic, encoded) = match without_prefix.rfind(DELIMITER) {
        Some(pos) => (&without_prefix[..pos], &without_prefix[pos + 1..]),
        None => ("", without_prefix),
    };

    let mut output: Vec<char> = Vec::with_capacity(without_prefix.len());
    for c in basic.chars() {
        if !c.is_ascii() {
            return Err(Error::NonBasicLiteral(c));
        }
        output.push(c);
    }

    // Everything ahead of the tail is ASCII, so bytes and chars line up
    let mut position = input.len() - encoded.len();
    let mut symbols = encoded.chars();

    let mut n = u64::from(INITIAL_N);
    let mut i: u64 = 0;
    let mut bias = INITIAL_BIAS;

    while !symbols.as_str().is_empty() {
        let old_i = i;
        let mut w: u64 = 1;
        let mut k = BASE;

        loop {
            let symbol = symbols.next().ok_or(Error::UnexpectedEnd)?;
            let digit = decode_digit(symbol).ok_or(Error::InvalidSymbol { symbol, position })?;
            position += 1;

            // i += digit * w
            i = u64::from(digit)
                .checked_mul(w)
                .and_then(|dw| i.checked_add(dw))
                .ok_or(Error::Overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }

            // w *= (BASE - t)
            w = w.checked_mul(u64::from(BASE - t)).ok_or(Error::Overflow)?;
            k += BASE;
        }

        let len = output.len() as u64 + 1;
        bias = adapt(i - old_i, len, old_i == 0);

        n = n.checked_add(i / len).ok_or(Error::Overflow)?;
        i %= len;

        let c = to_char(u32::try_from(n).map_err(|_| Error::Overflow)?)?;
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output)
}
