//! Code-point sequences.

use std::fmt::{self, Write};

use super::collector::from_fn;
use super::{Sequence, SequenceError};

/// A sequence of Unicode scalar values.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::CodePointSequence;
///
/// let text = CodePointSequence::from("héllo").concat(&CodePointSequence::from(" 🌍"));
/// assert_eq!(text.len(), 7);
/// assert_eq!(text.to_string(), "héllo 🌍");
/// assert_eq!(text.to_utf16().len(), 8);
/// ```
pub type CodePointSequence = Sequence<char>;

impl CodePointSequence {
    /// Creates a sequence from raw code points.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if a value is a surrogate
    /// or above `U+10FFFF`.
    pub fn from_code_points(code_points: &[u32]) -> Result<Self, SequenceError> {
        code_points
            .iter()
            .map(|&code_point| {
                char::from_u32(code_point).ok_or(SequenceError::invalid("invalid code point"))
            })
            .collect::<Result<Vec<char>, _>>()
            .map(Self::from_vec)
    }

    /// Decodes UTF-16 code units.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] on an unpaired surrogate.
    pub fn from_utf16(units: &[u16]) -> Result<Self, SequenceError> {
        char::decode_utf16(units.iter().copied())
            .collect::<Result<Vec<char>, _>>()
            .map(Self::from_vec)
            .map_err(|_| SequenceError::invalid("unpaired surrogate"))
    }

    /// Decodes UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] on malformed input.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, SequenceError> {
        std::str::from_utf8(bytes)
            .map(Self::from)
            .map_err(|_| SequenceError::invalid("malformed utf-8"))
    }

    /// Encodes the text as UTF-8.
    #[must_use]
    pub fn to_utf8(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Encodes the text as UTF-16.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut units = Vec::with_capacity(self.len());
        let mut scratch = [0_u16; 2];
        self.extract(&mut from_fn(|value: &char| {
            units.extend_from_slice(value.encode_utf16(&mut scratch));
            true
        }));
        units
    }

    /// Returns the code points as integers.
    #[must_use]
    pub fn to_code_points(&self) -> Vec<u32> {
        self.iter().map(|&value| u32::from(value)).collect()
    }
}

impl From<&str> for CodePointSequence {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<String> for CodePointSequence {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for CodePointSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let written = self.extract(&mut from_fn(|value: &char| formatter.write_char(*value).is_ok()));
        if written { Ok(()) } else { Err(fmt::Error) }
    }
}
