//! Rendering module for converting documents to output formats.

mod json;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{InputEncoding, RenderOptions, DEFAULT_ENCODING, GUESS_LABEL};
pub use text::{to_text, to_utf8};
