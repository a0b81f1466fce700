//! Rewindable byte cursor used by the RTF parser.

use crate::error::{Error, Result};

/// A cursor over an immutable byte buffer.
///
/// Reading past the end still advances the cursor, so that a `next()` at the
/// end of input followed by `back()` and `next()` yields `None` again.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `source`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `source` is empty.
    pub fn new(source: &'a [u8]) -> Result<Self> {
        if source.is_empty() {
            return Err(Error::InvalidArgument("source buffer is empty".to_string()));
        }
        Ok(Self { source, pos: 0 })
    }

    /// Rewind to the start of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Whether a byte remains at the cursor.
    pub fn has_next(&self) -> bool {
        self.pos < self.source.len()
    }

    /// Read the byte at the cursor and advance.
    pub fn next(&mut self) -> Option<u8> {
        if !self.has_next() {
            self.pos += 1;
            return None;
        }
        let c = self.source[self.pos];
        self.pos += 1;
        Some(c)
    }

    /// Step the cursor back by one byte.
    pub fn back(&mut self) -> Result<()> {
        if self.pos == 0 {
            return Err(Error::InvalidState("pos is already 0".to_string()));
        }
        self.pos -= 1;
        Ok(())
    }

    /// Current cursor position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Always false: empty buffers are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
