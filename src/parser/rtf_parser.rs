//! Recursive-descent RTF parser.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{Document, Node};

use super::scanner::Scanner;

/// Whitespace bytes that never produce nodes on their own.
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | 0x0c | b'\n' | 0)
}

/// Bytes that terminate a control word and are swallowed with it.
fn is_delimiter(c: Option<u8>) -> bool {
    matches!(c, Some(c) if is_space(c) || c == b';')
}

/// Value of a `\'XX` escape; bytes that are not hex digits are skipped.
fn hex_value(h1: u8, h2: u8) -> u8 {
    [h1, h2]
        .iter()
        .filter_map(|b| (*b as char).to_digit(16))
        .fold(0u8, |acc, d| (acc << 4) | d as u8)
}

/// Deepest group nesting accepted before parsing fails.
pub const MAX_GROUP_DEPTH: usize = 256;

/// Integer value of a parameter string, saturating.
///
/// Leading whitespace and one sign are accepted; parsing stops at the
/// first non-digit.
fn leading_number(digits: &[u8]) -> i64 {
    let start = digits
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .unwrap_or(digits.len());
    let (negative, rest) = match &digits[start..] {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        rest => (false, rest),
    };

    let magnitude = rest
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

/// RTF document parser.
pub struct RtfParser<'a> {
    scanner: Scanner<'a>,
    depth: usize,
}

impl<'a> RtfParser<'a> {
    /// Create a parser over an RTF byte buffer.
    ///
    /// Fails with [`Error::InvalidArgument`] if `data` is empty.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Ok(Self::from_scanner(Scanner::new(data)?))
    }

    /// Create a parser from an existing scanner.
    pub fn from_scanner(scanner: Scanner<'a>) -> Self {
        Self { scanner, depth: 0 }
    }

    /// Parse the whole buffer into a [`Document`].
    ///
    /// The scanner is rewound afterwards, so calling `parse` again builds
    /// an identical document. Groups nested deeper than
    /// [`MAX_GROUP_DEPTH`] fail with [`Error::Parse`].
    pub fn parse(&mut self) -> Result<Document> {
        self.depth = 0;
        let nodes = self.parse_group();
        self.scanner.reset();
        let nodes = nodes?;

        let doc = Document::new(nodes);
        debug!(
            "parsed {} bytes into {} nodes",
            self.scanner.len(),
            doc.node_count()
        );
        Ok(doc)
    }

    /// Parse one nesting level and merge character runs into text nodes.
    fn parse_group(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        let mut run = Vec::new();

        for node in self.raw_parse()? {
            if let Node::Char { code } = node {
                run.push(code);
                continue;
            }
            if !run.is_empty() {
                nodes.push(Node::text_run(std::mem::take(&mut run)));
            }
            nodes.push(node);
        }
        if !run.is_empty() {
            nodes.push(Node::text_run(run));
        }

        Ok(nodes)
    }

    /// Parse one nesting level up to its closing brace or end of input.
    fn raw_parse(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while self.scanner.has_next() {
            let Some(c) = self.scanner.next() else {
                break;
            };
            match c {
                b'\\' => {
                    if let Some(node) = self.parse_backslash()? {
                        nodes.push(node);
                    }
                }
                b'{' => {
                    if self.depth >= MAX_GROUP_DEPTH {
                        return Err(Error::parse(
                            "group nesting too deep",
                            self.scanner.pos(),
                        ));
                    }
                    self.depth += 1;
                    let children = self.parse_group()?;
                    self.depth -= 1;
                    nodes.push(Node::block(children));
                }
                b'}' => return Ok(nodes),
                b'\t' | b'\r' | 0x0c | b'\n' | 0 => {}
                b' ' => {
                    while self.scanner.next() == Some(b' ') {}
                    self.scanner.back()?;
                    nodes.push(Node::char(b' '));
                }
                _ => nodes.push(Node::char(c)),
            }
        }

        Ok(nodes)
    }

    /// Parse what follows a backslash. Unknown symbols yield `None`.
    fn parse_backslash(&mut self) -> Result<Option<Node>> {
        let c = self
            .scanner
            .next()
            .ok_or_else(|| self.unexpected_end("unexpected end after backslash"))?;

        let node = match c {
            b'\\' => Node::char(b'\\'),
            b'*' => Node::ctrl_word("\\*", 0),
            // non-breaking space
            b'~' => Node::char(b' '),
            // non-breaking and optional hyphens
            b'_' | b'-' => Node::char(b'-'),
            b'\'' => {
                let h1 = self
                    .scanner
                    .next()
                    .ok_or_else(|| self.unexpected_end("unexpected end after \\'"))?;
                let h2 = self
                    .scanner
                    .next()
                    .ok_or_else(|| self.unexpected_end("unexpected end after \\'x"))?;
                Node::char(hex_value(h1, h2))
            }
            c if c.is_ascii_alphabetic() => self.parse_ctrl_word(c)?,
            _ => {
                trace!(
                    "ignoring control symbol {:?} at {}",
                    c as char,
                    self.scanner.pos()
                );
                return Ok(None);
            }
        };

        Ok(Some(node))
    }

    /// Parse a control word whose first letter has been read.
    fn parse_ctrl_word(&mut self, first: u8) -> Result<Node> {
        let mut name = String::from("\\");
        name.push(first as char);

        let mut c = self.scanner.next();
        while let Some(b) = c.filter(u8::is_ascii_alphabetic) {
            name.push(b as char);
            c = self.scanner.next();
        }

        if !self.scanner.has_next() || is_delimiter(c) {
            return Ok(Node::ctrl_word(name, 0));
        }

        let minus = c == Some(b'-');
        let first_digit = match c {
            Some(b'-') => self
                .scanner
                .next()
                .ok_or_else(|| self.unexpected_end("unexpected end after minus in parameter"))?,
            Some(d) if d.is_ascii_digit() => d,
            _ => {
                self.scanner.back()?;
                return Ok(Node::ctrl_word(name, 0));
            }
        };

        let mut digits = vec![first_digit];
        c = self.scanner.next();
        while let Some(b) = c.filter(u8::is_ascii_digit) {
            digits.push(b);
            c = self.scanner.next();
        }
        if !is_delimiter(c) {
            self.scanner.back()?;
        }

        let value = leading_number(&digits);
        let param = if minus { value.saturating_neg() } else { value };
        Ok(Node::ctrl_word(name, param))
    }

    fn unexpected_end(&self, message: &str) -> Error {
        Error::parse(message, self.scanner.pos())
    }
}
