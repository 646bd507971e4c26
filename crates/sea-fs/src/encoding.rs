//! Text encoding detection and round-tripping
//!
//! Region files and game configs come from many sources; some are UTF-8, some
//! carry a BOM, and older ones are GBK or Big5. [`decode`] guesses the
//! encoding, and [`encode`] writes text back the same way it came in.
//!
//! Resolution order:
//!
//! 1. A byte-order mark, if present.
//! 2. The byte-frequency guess from `chardetng` (UTF-8 for ASCII-only input).
//! 3. The fixed fallbacks from [`fallback_encodings`].
//!
//! A candidate wins only if it decodes without malformed sequences *and* the
//! text contains one of the caller's markers. When nothing wins, the bytes are
//! decoded as UTF-8 with replacement characters and [`DecodedText::fallback`]
//! is set.

use chardetng::EncodingDetector;
use encoding_rs::{BIG5, Encoding, GBK, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::{Error, Result};

/// The XML prolog opener, the usual marker of a readable XML document.
pub const XML_PROLOG: &str = "<?xml";

/// Encodings tried after the detector's guess, in order.
///
/// Big5 covers cp950 and windows-1252 covers ISO-8859-1 under the WHATWG
/// encoding model.
pub fn fallback_encodings() -> [&'static Encoding; 4] {
    [UTF_8, GBK, BIG5, WINDOWS_1252]
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16LE_BOM: &[u8] = b"\xFF\xFE";
const UTF16BE_BOM: &[u8] = b"\xFE\xFF";

/// Text decoded from bytes, with what is needed to encode it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// The decoded text, without any byte-order mark.
    pub text: String,
    /// The encoding the bytes were decoded with.
    pub encoding: &'static Encoding,
    /// Whether the bytes began with a byte-order mark.
    pub bom: bool,
    /// True when no candidate produced a recognizable document and the text
    /// was force-decoded as UTF-8.
    pub fallback: bool,
}

impl DecodedText {
    /// WHATWG name of the encoding, e.g. `"UTF-8"` or `"GBK"`.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Encode `text` the way this document was encoded.
    pub fn reencode(&self, text: &str) -> Result<Vec<u8>> {
        encode(text, self.encoding, self.bom)
    }
}

/// Decode bytes, accepting the first candidate whose text contains a marker.
///
/// Markers are matched ignoring ASCII case.
pub fn decode(bytes: &[u8], markers: &[&str]) -> DecodedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes)
        && let Some(text) = decode_strict(&bytes[bom_len..], encoding)
        && has_marker(&text, markers)
    {
        return DecodedText {
            text,
            encoding,
            bom: true,
            fallback: false,
        };
    }

    decode_with_candidates(bytes, &candidates(bytes), markers)
}

/// Try each candidate in order, then fall back to lossy UTF-8.
pub fn decode_with_candidates(
    bytes: &[u8],
    candidates: &[&'static Encoding],
    markers: &[&str],
) -> DecodedText {
    for &encoding in candidates {
        match decode_strict(bytes, encoding) {
            Some(text) if has_marker(&text, markers) => {
                tracing::debug!(encoding = encoding.name(), "Decoded text");
                return DecodedText {
                    text,
                    encoding,
                    bom: false,
                    fallback: false,
                };
            }
            Some(_) => tracing::trace!(encoding = encoding.name(), "Decoded but no marker found"),
            None => tracing::trace!(encoding = encoding.name(), "Malformed for encoding"),
        }
    }

    let (body, bom) = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (rest, true),
        None => (bytes, false),
    };
    tracing::warn!("No candidate encoding recognized the text, decoding as UTF-8 with replacement");
    DecodedText {
        text: String::from_utf8_lossy(body).into_owned(),
        encoding: UTF_8,
        bom,
        fallback: true,
    }
}

/// Encode text into `encoding`, prefixing a byte-order mark when `bom` is set.
///
/// # Errors
///
/// Returns [`Error::Unencodable`] if `text` holds characters the encoding
/// cannot represent.
pub fn encode(text: &str, encoding: &'static Encoding, bom: bool) -> Result<Vec<u8>> {
    if encoding == UTF_16LE || encoding == UTF_16BE {
        let little = encoding == UTF_16LE;
        let mut out = Vec::with_capacity(text.len() * 2 + 2);
        if bom {
            out.extend_from_slice(if little { UTF16LE_BOM } else { UTF16BE_BOM });
        }
        for unit in text.encode_utf16() {
            let pair = if little {
                unit.to_le_bytes()
            } else {
                unit.to_be_bytes()
            };
            out.extend_from_slice(&pair);
        }
        return Ok(out);
    }

    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(Error::Unencodable {
            encoding: encoding.name().to_string(),
        });
    }

    let mut out = Vec::with_capacity(bytes.len() + UTF8_BOM.len());
    if bom && encoding == UTF_8 {
        out.extend_from_slice(UTF8_BOM);
    }
    out.extend_from_slice(&bytes);
    Ok(out)
}

/// Detector guess first, then the fixed fallbacks, without duplicates.
///
/// ASCII-only input is taken as UTF-8 so that text added later can hold any
/// character.
fn candidates(bytes: &[u8]) -> Vec<&'static Encoding> {
    let guess = if bytes.is_ascii() {
        UTF_8
    } else {
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        detector.guess(None, true)
    };
    tracing::debug!(guess = guess.name(), "Encoding detector guess");

    let mut list = vec![guess];
    for encoding in fallback_encodings() {
        if !list.contains(&encoding) {
            list.push(encoding);
        }
    }
    list
}

fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

fn has_marker(text: &str, markers: &[&str]) -> bool {
    markers
        .iter()
        .any(|marker| contains_ignore_ascii_case(text, marker))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
