//! Byte-to-text decoding of marker exports.
//!
//! Premiere Pro writes marker lists as UTF-16 little endian with a BOM.
//! Hand-edited files are usually UTF-8. [`Encoding::Auto`] sniffs the BOM
//! and falls back to a NUL-byte heuristic when there is none: UTF-8 text
//! never contains NUL, while the tabs, digits and colons of an export put
//! a NUL into every UTF-16 code unit they occupy.

use std::{cmp::Ordering, fmt, str::FromStr};

use tracing::trace;

use crate::error::{ChapterError, Result};

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// Number of leading bytes inspected by the UTF-16 heuristic.
const SNIFF_BYTES: usize = 4096;

/// Text encoding of an export file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Detect from BOM or content.
    #[default]
    Auto,
    /// UTF-16 little endian (Premiere default).
    Utf16Le,
    /// UTF-16 big endian.
    Utf16Be,
    /// UTF-8.
    Utf8,
}

impl Encoding {
    /// Returns the option name used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Utf16Le => "utf16le",
            Self::Utf16Be => "utf16be",
            Self::Utf8 => "utf8",
        }
    }

    /// Detects the encoding of raw bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use chapters::decode::Encoding;
    ///
    /// assert_eq!(Encoding::detect(&[0xFF, 0xFE, b'N', 0]), Encoding::Utf16Le);
    /// assert_eq!(Encoding::detect(b"N\0a\0"), Encoding::Utf16Le);
    /// // "И\t" without a BOM
    /// assert_eq!(Encoding::detect(&[0x18, 0x04, b'\t', 0]), Encoding::Utf16Le);
    /// assert_eq!(Encoding::detect(b"Name"), Encoding::Utf8);
    /// ```
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(BOM_UTF16_LE) {
            Self::Utf16Le
        } else if bytes.starts_with(BOM_UTF16_BE) {
            Self::Utf16Be
        } else if bytes.starts_with(BOM_UTF8) {
            Self::Utf8
        } else {
            sniff_utf16(bytes).unwrap_or(Self::Utf8)
        }
    }
}

/// Guesses UTF-16 byte order from where the NUL bytes fall.
///
/// The high byte of an ASCII code unit is NUL: the second byte of each
/// pair for little endian, the first for big endian. Non-ASCII units
/// (Cyrillic, CJK) rarely have a NUL byte, so the side with more NULs wins.
fn sniff_utf16(bytes: &[u8]) -> Option<Encoding> {
    let sample = &bytes[..bytes.len().min(SNIFF_BYTES)];
    let pairs = sample.chunks_exact(2);
    let even = pairs.clone().filter(|pair| pair[0] == 0).count();
    let odd = pairs.filter(|pair| pair[1] == 0).count();

    match odd.cmp(&even) {
        Ordering::Greater => Some(Encoding::Utf16Le),
        Ordering::Less => Some(Encoding::Utf16Be),
        Ordering::Equal => None,
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ChapterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "utf16le" | "utf-16le" => Ok(Self::Utf16Le),
            "utf16be" | "utf-16be" => Ok(Self::Utf16Be),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            _ => Err(ChapterError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Decodes raw export bytes into text.
///
/// A leading BOM matching the chosen encoding is stripped.
///
/// # Example
///
/// ```
/// use chapters::decode::{Encoding, decode};
///
/// let bytes = [0xFF, 0xFE, b'O', 0, b'K', 0];
/// assert_eq!(decode(&bytes, Encoding::Auto).unwrap(), "OK");
/// ```
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    let encoding = match encoding {
        Encoding::Auto => Encoding::detect(bytes),
        explicit => explicit,
    };
    trace!(%encoding, len = bytes.len(), "decoding export");

    match encoding {
        Encoding::Utf16Le => {
            decode_utf16(bytes.strip_prefix(BOM_UTF16_LE).unwrap_or(bytes), u16::from_le_bytes)
        }
        Encoding::Utf16Be => {
            decode_utf16(bytes.strip_prefix(BOM_UTF16_BE).unwrap_or(bytes), u16::from_be_bytes)
        }
        Encoding::Utf8 | Encoding::Auto => {
            let body = bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes);
            Ok(String::from_utf8(body.to_vec())?)
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(ChapterError::OddUtf16Length(bytes.len()));
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .enumerate()
        .map(|(position, ch)| ch.map_err(|_| ChapterError::InvalidUtf16 { position }))
        .collect()
}
