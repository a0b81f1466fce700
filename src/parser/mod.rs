//! RTF parsing module.

mod rtf_parser;
mod scanner;

pub use rtf_parser::{RtfParser, MAX_GROUP_DEPTH};
pub use scanner::Scanner;
