//! Byte sequences with hex and integer encodings.

use std::fmt;

use super::{Sequence, SequenceError};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const HEX_HEADER: &str = "0x";

/// A sequence of bytes.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::{ByteSequence, Endian};
///
/// let bytes = ByteSequence::from_hex("0x01ff", true).unwrap();
/// assert_eq!(bytes.to_vec(), vec![0x01, 0xFF]);
/// assert_eq!(bytes.to_string(), "0x01FF");
/// assert_eq!(bytes.to_integer(Endian::Big), Ok(0x01FF));
/// assert_eq!(bytes.to_integer(Endian::Little), Ok(0xFF01));
/// ```
pub type ByteSequence = Sequence<u8>;

/// Byte order for integer conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

fn hex_digit(character: u8) -> Result<u8, SequenceError> {
    char::from(character)
        .to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(SequenceError::invalid("invalid hex digit"))
}

impl ByteSequence {
    /// Parses hexadecimal text, two digits per byte.
    ///
    /// With `header`, the text must start with `"0x"`. Digits may be upper
    /// or lower case.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the header is missing,
    /// the digit count is odd or a digit is invalid.
    pub fn from_hex(text: &str, header: bool) -> Result<Self, SequenceError> {
        let digits = if header {
            text.strip_prefix(HEX_HEADER)
                .ok_or(SequenceError::invalid("missing hex header"))?
        } else {
            text
        };
        let digits = digits.as_bytes();
        if digits.len() % 2 != 0 {
            return Err(SequenceError::invalid("odd number of hex digits"));
        }
        digits
            .chunks_exact(2)
            .map(|pair| -> Result<u8, SequenceError> {
                Ok((hex_digit(pair[0])? << 4) | hex_digit(pair[1])?)
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Self::from_vec)
    }

    /// Formats the bytes as upper case hexadecimal text.
    #[must_use]
    pub fn to_hex(&self, header: bool) -> String {
        let mut text = String::with_capacity(self.len() * 2 + HEX_HEADER.len());
        if header {
            text.push_str(HEX_HEADER);
        }
        for &byte in self {
            text.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            text.push(char::from(HEX_DIGITS[usize::from(byte & 0xF)]));
        }
        text
    }

    /// Encodes the low `length` bytes of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `length > 8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::{ByteSequence, Endian};
    ///
    /// let big = ByteSequence::from_integer(0x0102_0304, 3, Endian::Big).unwrap();
    /// let little = ByteSequence::from_integer(0x0102_0304, 3, Endian::Little).unwrap();
    /// assert_eq!(big.to_hex(true), "0x020304");
    /// assert_eq!(little.to_hex(true), "0x040302");
    /// ```
    pub fn from_integer(value: u64, length: usize, endian: Endian) -> Result<Self, SequenceError> {
        if length > 8 {
            return Err(SequenceError::invalid("integer length exceeds 8 bytes"));
        }
        let bytes = match endian {
            Endian::Big => value.to_be_bytes()[8 - length..].to_vec(),
            Endian::Little => value.to_le_bytes()[..length].to_vec(),
        };
        Ok(Self::from_vec(bytes))
    }

    /// Decodes the bytes as an unsigned integer.
    ///
    /// The empty sequence decodes to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if there are more than 8
    /// bytes.
    pub fn to_integer(&self, endian: Endian) -> Result<u64, SequenceError> {
        if self.len() > 8 {
            return Err(SequenceError::invalid("integer length exceeds 8 bytes"));
        }
        let accumulate = |value: u64, byte: &u8| (value << 8) | u64::from(*byte);
        Ok(match endian {
            Endian::Big => self.iter().fold(0, accumulate),
            Endian::Little => self.iter().rev().fold(0, accumulate),
        })
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_hex(true))
    }
}
