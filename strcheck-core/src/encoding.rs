//! Resolving encoding names and decoding with the resolved encoding

use crate::error::{Error, Result};
use crate::subject::{require, Subject};
use std::fmt;
use std::str::FromStr;

/// Text encodings recognized by [`to_encoding`]
///
/// UTF-7 is deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// 7-bit ASCII
    Ascii,
    /// UTF-8
    Utf8,
    /// UTF-32, little-endian
    Utf32,
    /// UTF-16, little-endian
    Unicode,
}

impl TextEncoding {
    /// All supported encodings
    pub const ALL: [TextEncoding; 4] = [
        TextEncoding::Ascii,
        TextEncoding::Utf8,
        TextEncoding::Utf32,
        TextEncoding::Unicode,
    ];

    /// Canonical upper-case name, as accepted by [`to_encoding`]
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ASCII",
            TextEncoding::Utf8 => "UTF8",
            TextEncoding::Utf32 => "UTF32",
            TextEncoding::Unicode => "UNICODE",
        }
    }

    /// Byte order mark written ahead of encoded text
    pub fn byte_order_mark(self) -> &'static [u8] {
        match self {
            TextEncoding::Ascii => &[],
            TextEncoding::Utf8 => &[0xEF, 0xBB, 0xBF],
            TextEncoding::Utf32 => &[0xFF, 0xFE, 0x00, 0x00],
            TextEncoding::Unicode => &[0xFF, 0xFE],
        }
    }

    /// The `encoding_rs` codec for this encoding, where one exists
    ///
    /// The Encoding Standard has no UTF-32 and treats ASCII as a label of
    /// windows-1252, so both map to `None`.
    pub fn encoding_rs(self) -> Option<&'static encoding_rs::Encoding> {
        match self {
            TextEncoding::Utf8 => Some(encoding_rs::UTF_8),
            TextEncoding::Unicode => Some(encoding_rs::UTF_16LE),
            TextEncoding::Ascii | TextEncoding::Utf32 => None,
        }
    }

    /// Decode `bytes` strictly; malformed input is an `InvalidArgument`
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let malformed =
            || Error::invalid_argument("bytes", format!("malformed {} input", self.name()));

        match self {
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| b as char).collect())
                } else {
                    Err(malformed())
                }
            }
            TextEncoding::Utf8 | TextEncoding::Unicode => {
                let codec = self.encoding_rs().ok_or_else(malformed)?;
                codec
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
                    .ok_or_else(malformed)
            }
            TextEncoding::Utf32 => {
                let units = bytes.chunks_exact(4);
                if !units.remainder().is_empty() {
                    return Err(malformed());
                }
                units
                    .map(|unit| {
                        let code = u32::from_le_bytes([unit[0], unit[1], unit[2], unit[3]]);
                        char::from_u32(code).ok_or_else(malformed)
                    })
                    .collect()
            }
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TextEncoding::ALL
            .into_iter()
            .find(|encoding| encoding.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_argument("str", format!("unsupported encoding {s:?}")))
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve `"ASCII"`, `"UTF8"`, `"UTF32"` or `"UNICODE"`, ignoring case
pub fn to_encoding<S: Subject + ?Sized>(s: &S) -> Result<TextEncoding> {
    require(s)?.parse()
}
