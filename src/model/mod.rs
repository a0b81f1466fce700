//! Document model types for RTF content representation.
//!
//! The parser produces a tree of [`Node`]s owned by a [`Document`]; text
//! rendering walks that tree and never mutates it.

mod document;
mod node;

pub use document::Document;
pub use node::{Node, HIDDEN_TEXT_WORDS};
