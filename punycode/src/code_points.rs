//! Code point helpers: classification and UTF-8 packing.

use crate::bootstring::INITIAL_N;
use crate::error::{Error, Result};

/// A label split into its basic and non-basic code points.
///
/// Both subsequences keep the order of the original label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Every code point of the label.
    pub all: Vec<u32>,
    /// Code points below 128, which are emitted literally.
    pub basic: Vec<u32>,
    /// Code points of 128 and above, which need encoding.
    pub non_basic: Vec<u32>,
}

impl Classified {
    /// Distinct non-basic code points in ascending order.
    ///
    /// The encoder makes one pass per value in this list.
    pub fn distinct_non_basic(&self) -> Vec<u32> {
        let mut distinct = self.non_basic.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }
}

/// Returns `true` if `cp` is emitted literally by the encoder.
pub(crate) fn is_basic(cp: u32) -> bool {
    cp < INITIAL_N
}

/// Split a code point sequence into basic and non-basic code points.
///
/// # Examples
///
/// ```
/// use punycode::classify;
///
/// let classified = classify(&[0x61, 0xFC, 0x62, 0xFC]);
/// assert_eq!(classified.basic, vec![0x61, 0x62]);
/// assert_eq!(classified.non_basic, vec![0xFC, 0xFC]);
/// assert_eq!(classified.distinct_non_basic(), vec![0xFC]);
/// ```
pub fn classify(input: &[u32]) -> Classified {
    let mut classified = Classified {
        all: Vec::with_capacity(input.len()),
        ..Classified::default()
    };

    for &cp in input {
        classified.all.push(cp);
        if is_basic(cp) {
            classified.basic.push(cp);
        } else {
            classified.non_basic.push(cp);
        }
    }

    classified
}

/// Convert a single code point to a `char`.
///
/// Fails for surrogates and values above `U+10FFFF`.
pub(crate) fn to_char(cp: u32) -> Result<char> {
    char::from_u32(cp).ok_or(Error::OutOfRangeCodePoint(cp))
}

/// Unpack text into its code points.
pub fn unpack(input: &str) -> Vec<u32> {
    input.chars().map(u32::from).collect()
}

/// Pack code points into text.
///
/// Fails on the first value that is not a Unicode scalar value.
pub fn pack(code_points: &[u32]) -> Result<String> {
    code_points.iter().map(|&cp| to_char(cp)).collect()
}
