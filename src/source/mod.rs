//! Byte sources the lexer pulls from, and the buffer of consumed source.

pub mod input;
#[cfg(feature = "cli")]
pub mod interactive;

pub use input::{ReadSource, StringSource};
#[cfg(feature = "cli")]
pub use interactive::{InteractiveSource, NameCompleter};

use std::borrow::Cow;

use crate::position::{LineIndex, Position};


/// Append-only record of every byte consumed from a named stream.
///
/// Token offsets index into this buffer, and errors are positioned against
/// it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    name: String,
    bytes: Vec<u8>,
    lines: LineIndex,
}

impl SourceBuffer {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            bytes: Default::default(),
            lines: Default::default(),
        }
    }

    pub fn push(&mut self, c: u8) {
        self.bytes.push(c);
        self.lines.push(c);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Text of `length` bytes starting at `offset`.
    pub fn text(&self, offset: usize, length: usize) -> Cow<str> {
        let end = (offset + length).min(self.bytes.len());
        String::from_utf8_lossy(&self.bytes[offset.min(end)..end])
    }

    pub fn locate(&self, offset: usize) -> Position {
        self.lines.locate(offset)
    }
}
