//! Plain text rendering for RTF documents.

use log::debug;

use crate::encoding;
use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text in the configured output charset.
///
/// The flattened bytes are decoded with the input charset (the document's
/// `\ansicpg` when guessing) and re-encoded with the output charset. When
/// both resolve to the same encoding the bytes are returned untouched.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let detected = doc.detect_encoding();
    let from = options.input_encoding.label(detected.as_deref());

    let source = encoding::resolve(from)?;
    let target = encoding::resolve(&options.output_encoding)?;
    debug!(
        "rendering text from {} to {}",
        source.name(),
        target.name()
    );

    let raw = doc.flatten_to_bytes();
    Ok(encoding::convert_with(&raw, source, target).into_owned())
}

/// Convert a document to a UTF-8 `String`.
pub fn to_utf8(doc: &Document, options: &RenderOptions) -> Result<String> {
    let options = options.clone().with_output_encoding("utf-8");
    let bytes = to_text(doc, &options)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
