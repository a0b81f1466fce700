//! Rendering options and configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Label that asks for the input charset to be read from the document.
pub const GUESS_LABEL: &str = "guess";

/// Charset used when nothing else is known.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Options for rendering document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Charset of the raw text stored in the document
    pub input_encoding: InputEncoding,

    /// Charset of the rendered output
    pub output_encoding: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input charset.
    pub fn with_input_encoding(mut self, encoding: InputEncoding) -> Self {
        self.input_encoding = encoding;
        self
    }

    /// Set the output charset label.
    pub fn with_output_encoding(mut self, label: impl Into<String>) -> Self {
        self.output_encoding = label.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            input_encoding: InputEncoding::Guess,
            output_encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Where the input charset comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputEncoding {
    /// Use the document's `\ansicpg`, falling back to UTF-8
    #[default]
    Guess,
    /// A fixed charset label (e.g. `cp932`)
    Named(String),
}

impl InputEncoding {
    /// Charset label to decode with, given the codepage the document declares.
    pub fn label<'a>(&'a self, detected: Option<&'a str>) -> &'a str {
        match self {
            InputEncoding::Guess => detected.unwrap_or(DEFAULT_ENCODING),
            InputEncoding::Named(label) => label.as_str(),
        }
    }
}

impl FromStr for InputEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidArgument("empty encoding label".to_string()));
        }
        if s.eq_ignore_ascii_case(GUESS_LABEL) {
            Ok(InputEncoding::Guess)
        } else {
            Ok(InputEncoding::Named(s.to_string()))
        }
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEncoding::Guess => f.write_str(GUESS_LABEL),
            InputEncoding::Named(label) => f.write_str(label),
        }
    }
}
