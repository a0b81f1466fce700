//! Charset resolution and conversion of extracted text.
//!
//! RTF text is flattened to raw bytes in the document's codepage. This
//! module turns charset labels (`"cp932"`, `"utf-8"`, `"windows-1251"`,
//! `"1252"`) into [`encoding_rs`] encodings and converts byte strings
//! between them.

use std::borrow::Cow;

use encoding_rs::Encoding;
use log::warn;

use crate::error::{Error, Result};

/// Map a Windows codepage identifier to an encoding.
///
/// Codepages without an exact WHATWG counterpart map to the closest one.
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // DOS codepages (approximations)
        437 | 850 => Some(encoding_rs::IBM866),
        866 => Some(encoding_rs::IBM866),

        // Windows codepages
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian
        932 | 10001 => Some(encoding_rs::SHIFT_JIS),
        936 | 20936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        20932 => Some(encoding_rs::EUC_JP),
        54936 => Some(encoding_rs::GB18030),

        // ISO 8859
        28591 => Some(encoding_rs::WINDOWS_1252),
        28592 => Some(encoding_rs::ISO_8859_2),
        28595 => Some(encoding_rs::ISO_8859_5),
        28597 => Some(encoding_rs::ISO_8859_7),
        28605 => Some(encoding_rs::ISO_8859_15),

        // KOI8
        20866 => Some(encoding_rs::KOI8_R),
        21866 => Some(encoding_rs::KOI8_U),

        10000 => Some(encoding_rs::MACINTOSH),

        // Unicode
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        65001 => Some(encoding_rs::UTF_8),

        _ => None,
    }
}

/// Resolve a charset label.
///
/// Accepts `cp<N>` and bare numeric codepages in addition to the WHATWG
/// labels understood by [`Encoding::for_label`].
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    let normalized = label.trim().to_ascii_lowercase();
    let number = normalized.strip_prefix("cp").unwrap_or(&normalized);

    if let Ok(codepage) = number.parse::<u32>() {
        if let Some(encoding) = codepage_to_encoding(codepage) {
            return Ok(encoding);
        }
    }

    Encoding::for_label(normalized.as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Convert `bytes` from charset `from` to charset `to`.
///
/// Malformed input sequences are replaced with U+FFFD before re-encoding.
///
/// # Example
/// ```
/// use unrtf::encoding::convert;
///
/// let utf8 = convert(&[0x82, 0xa0], "cp932", "utf-8").unwrap();
/// assert_eq!(utf8, "あ".as_bytes());
/// ```
pub fn convert(bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
    let source = resolve(from)?;
    let target = resolve(to)?;
    Ok(convert_with(bytes, source, target).into_owned())
}

/// Convert between two resolved encodings; identical encodings pass through.
pub fn convert_with<'a>(
    bytes: &'a [u8],
    source: &'static Encoding,
    target: &'static Encoding,
) -> Cow<'a, [u8]> {
    if source == target {
        return Cow::Borrowed(bytes);
    }

    let (text, had_errors) = source.decode_without_bom_handling(bytes);
    if had_errors {
        warn!("malformed {} input replaced during decoding", source.name());
    }

    Cow::Owned(encode(&text, target))
}

fn encode(text: &str, target: &'static Encoding) -> Vec<u8> {
    // encoding_rs only encodes UTF-16 as UTF-8, so do it by hand
    if target == encoding_rs::UTF_16LE {
        return text.encode_utf16().flat_map(u16::to_le_bytes).collect();
    }
    if target == encoding_rs::UTF_16BE {
        return text.encode_utf16().flat_map(u16::to_be_bytes).collect();
    }

    let (bytes, _, unmappable) = target.encode(text);
    if unmappable {
        warn!(
            "characters not representable in {} were written as numeric references",
            target.name()
        );
    }
    bytes.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_codepages() {
        assert_eq!(resolve("cp932").unwrap(), encoding_rs::SHIFT_JIS);
        assert_eq!(resolve("CP1252").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(resolve("1251").unwrap(), encoding_rs::WINDOWS_1251);
        assert_eq!(resolve("cp65001").unwrap(), encoding_rs::UTF_8);
    }

    #[test]
    fn test_resolve_labels() {
        assert_eq!(resolve("utf-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve(" UTF8 ").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve("shift_jis").unwrap(), encoding_rs::SHIFT_JIS);
        assert_eq!(resolve("windows-1250").unwrap(), encoding_rs::WINDOWS_1250);
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(matches!(
            resolve("klingon"),
            Err(Error::UnknownEncoding(label)) if label == "klingon"
        ));
        assert!(resolve("cp99999").is_err());
    }

    #[test]
    fn test_convert_shift_jis_to_utf8() {
        let converted = convert(&[0x93, 0xfa, 0x96, 0x7b], "cp932", "utf-8").unwrap();
        assert_eq!(converted, "日本".as_bytes());
    }

    #[test]
    fn test_convert_utf8_to_windows_1252() {
        let converted = convert("café".as_bytes(), "utf-8", "cp1252").unwrap();
        assert_eq!(converted, b"caf\xe9");
    }

    #[test]
    fn test_convert_same_encoding_passes_through() {
        let raw = [0xff, 0xfe, 0x00];
        let converted = convert(&raw, "utf-8", "utf8").unwrap();
        assert_eq!(converted, raw);
    }

    #[test]
    fn test_convert_to_utf16le() {
        let converted = convert(b"Hi", "utf-8", "utf-16le").unwrap();
        assert_eq!(converted, b"H\x00i\x00");
    }

    #[test]
    fn test_convert_malformed_input_replaced() {
        let converted = convert(&[b'a', 0xff], "utf-8", "cp1252").unwrap();
        // U+FFFD is unmappable in windows-1252 and becomes a numeric reference
        assert_eq!(converted, b"a&#65533;");
    }
}
