//! RTF format detection.
//!
//! Detection is informational only: the parser accepts any non-empty input.

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// RTF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtfFormat {
    /// Major version from the `\rtf<N>` header word
    pub version: u32,
}

impl std::fmt::Display for RtfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RTF {}", self.version)
    }
}

/// RTF magic bytes: {\rtf
const RTF_MAGIC: &[u8] = b"{\\rtf";
const HEADER_LEN: usize = 16;

/// Detect RTF format from a file path.
///
/// Returns `Ok(None)` when the file does not start with an RTF header.
/// Leading ASCII whitespace is skipped, as in [`detect_format_from_bytes`].
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<Option<RtfFormat>> {
    let reader = BufReader::new(File::open(path)?);
    let mut header = Vec::with_capacity(HEADER_LEN);
    for byte in reader.bytes() {
        let byte = byte?;
        if header.is_empty() && byte.is_ascii_whitespace() {
            continue;
        }
        header.push(byte);
        if header.len() == HEADER_LEN {
            break;
        }
    }
    Ok(detect_format_from_bytes(&header))
}

/// Detect RTF format from the first bytes of a file.
///
/// Leading ASCII whitespace is skipped. A header without a version number
/// (`{\rtf}`) is reported as version 1.
pub fn detect_format_from_bytes(data: &[u8]) -> Option<RtfFormat> {
    let start = data.iter().position(|b| !b.is_ascii_whitespace())?;
    let rest = data[start..].strip_prefix(RTF_MAGIC)?;

    let digits: Vec<u8> = rest
        .iter()
        .copied()
        .take_while(u8::is_ascii_digit)
        .collect();
    if rest.len() > digits.len() && rest[digits.len()].is_ascii_alphabetic() {
        // e.g. {\rtfx is a different control word
        return None;
    }

    let version = std::str::from_utf8(&digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    Some(RtfFormat { version })
}

/// Check if bytes start with an RTF header.
pub fn is_rtf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_some()
}

/// Check if a file starts with an RTF header.
pub fn is_rtf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(Some(_)))
}
