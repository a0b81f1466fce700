//! Error types for unrtf library.

use std::io;
use thiserror::Error;

/// Result type alias for unrtf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during RTF processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument was rejected (e.g. an empty source buffer).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was attempted in a state that does not allow it.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The input ended where the RTF grammar requires more bytes.
    #[error("parse error: {message} at {offset}")]
    Parse {
        /// What the parser was expecting.
        message: String,
        /// Scanner offset at which the failure was detected.
        offset: usize,
    },

    /// The charset label could not be resolved.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a parse error at the given scanner offset.
    pub(crate) fn parse(message: impl Into<String>, offset: usize) -> Self {
        Error::Parse {
            message: message.into(),
            offset,
        }
    }
}
