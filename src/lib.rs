//! # unrtf
//!
//! Plain text extraction from Rich Text Format documents.
//!
//! RTF is parsed into a tree of [`Node`]s: groups, control words, characters
//! and merged text runs. Flattening the tree drops formatting, hides
//! destination groups such as font and color tables, and turns `\par` into
//! line breaks. The resulting bytes are in the document's codepage and can
//! be converted to any charset known to `encoding_rs`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unrtf::{parse_file, render};
//!
//! fn main() -> unrtf::Result<()> {
//!     let doc = parse_file("letter.rtf")?;
//!
//!     println!("codepage: {:?}", doc.detect_encoding());
//!
//!     let options = render::RenderOptions::default();
//!     let text = render::to_utf8(&doc, &options)?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod encoding;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_rtf, RtfFormat};
pub use error::{Error, Result};
pub use model::{Document, Node};
pub use parser::{RtfParser, Scanner, MAX_GROUP_DEPTH};
pub use render::{InputEncoding, JsonFormat, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse RTF bytes into a document.
///
/// Fails with [`Error::InvalidArgument`] on empty input and with
/// [`Error::Parse`] when the input ends inside an escape.
///
/// # Example
///
/// ```
/// let doc = unrtf::parse_bytes(b"{\\rtf1 Hello\\par World}").unwrap();
/// assert_eq!(doc.flatten_to_bytes(), b"Hello\nWorld");
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    RtfParser::new(data)?.parse()
}

/// Parse an RTF file.
///
/// # Example
///
/// ```no_run
/// let doc = unrtf::parse_file("letter.rtf").unwrap();
/// println!("{} nodes", doc.node_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

/// Parse RTF from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_bytes(&data)
}

/// Extract text from an RTF file as UTF-8, guessing the input codepage.
///
/// # Example
///
/// ```no_run
/// let text = unrtf::extract_text("letter.rtf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = extract_text_with_options(path, &RenderOptions::default())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Extract text from an RTF file in the configured output charset.
///
/// An empty file yields empty output instead of an error.
pub fn extract_text_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    Unrtf::from_options(options.clone()).extract_file(path)
}

/// Builder for parsing and converting RTF documents.
///
/// # Example
///
/// ```no_run
/// use unrtf::Unrtf;
///
/// let text = Unrtf::new()
///     .with_input_encoding("cp932")?
///     .with_output_encoding("utf-8")
///     .parse("letter.rtf")?
///     .to_text()?;
/// # Ok::<(), unrtf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unrtf {
    render_options: RenderOptions,
}

impl Unrtf {
    /// Create a new Unrtf builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from existing render options.
    pub fn from_options(render_options: RenderOptions) -> Self {
        Self { render_options }
    }

    /// Set the input charset label; `guess` reads it from the document.
    pub fn with_input_encoding(mut self, label: &str) -> Result<Self> {
        self.render_options = self.render_options.with_input_encoding(label.parse()?);
        Ok(self)
    }

    /// Set the output charset label.
    pub fn with_output_encoding(mut self, label: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_output_encoding(label);
        self
    }

    /// Parse an RTF file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnrtfResult> {
        let document = parse_file(path)?;
        Ok(UnrtfResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse RTF bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnrtfResult> {
        let document = parse_bytes(data)?;
        Ok(UnrtfResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Read a file and render its text; empty files render as nothing.
    pub fn extract_file<P: AsRef<Path>>(self, path: P) -> Result<Vec<u8>> {
        let data = std::fs::read(path)?;
        self.extract_bytes(&data)
    }

    /// Render the text of RTF bytes; empty input renders as nothing.
    pub fn extract_bytes(self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            log::debug!("empty input, nothing to extract");
            return Ok(Vec::new());
        }
        self.parse_bytes(data)?.to_text()
    }
}

/// Result of parsing an RTF document.
pub struct UnrtfResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnrtfResult {
    /// Convert to text in the configured output charset.
    pub fn to_text(&self) -> Result<Vec<u8>> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to a UTF-8 string, ignoring the configured output charset.
    pub fn to_utf8(&self) -> Result<String> {
        render::to_utf8(&self.document, &self.render_options)
    }

    /// Convert the node tree to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Codepage declared by the document, if any.
    pub fn detected_encoding(&self) -> Option<String> {
        self.document.detect_encoding()
    }

    /// Raw text without charset conversion.
    pub fn raw_text(&self) -> Vec<u8> {
        self.document.flatten_to_bytes()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
