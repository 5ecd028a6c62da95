//! Mapping of byte offsets to 1-based (line, column) positions.
//!
//! CR, LF and CR+LF each count as a single line break.

use std::fmt;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Line starts of an append-only buffer, maintained a byte at a time.
#[derive(Clone, Debug)]
pub struct LineIndex {
    starts: Vec<usize>,
    // Whether the line's first byte is the '\n' of a CR+LF break.
    crlf: Vec<bool>,
    len: usize,
    prev_cr: bool,
}


/// Finds the position of `offset` by rescanning `source` from the start.
///
/// Offsets past the end of `source` are positioned right after its last byte.
pub fn locate(source: &[u8], offset: usize) -> Position {
    let mut line = 1;
    let mut column = 0;
    let mut prev = 0u8;
    for &c in source.iter().take(offset) {
        column += 1;
        if prev == b'\r' && c == b'\n' {
            // Break was already counted at the '\r'.
            column = 0;
        } else if c == b'\r' || c == b'\n' {
            line += 1;
            column = 0;
        }
        prev = c;
    }
    Position {
        line,
        column: column + 1,
    }
}


impl LineIndex {
    pub fn new() -> Self {
        Self {
            starts: vec![0],
            crlf: vec![false],
            len: 0,
            prev_cr: false,
        }
    }

    pub fn push(&mut self, c: u8) {
        self.len += 1;
        match c {
            b'\n' if self.prev_cr => {
                if let Some(last) = self.crlf.last_mut() {
                    *last = true;
                }
            }
            b'\r' | b'\n' => {
                self.starts.push(self.len);
                self.crlf.push(false);
            }
            _ => {}
        }
        self.prev_cr = c == b'\r';
    }

    pub fn locate(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let start = self.starts[line];
        let skipped = (self.crlf[line] && offset > start) as usize;
        Position {
            line: line + 1,
            column: offset - start - skipped + 1,
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}


#[cfg(test)]
#[path = "./position_test.rs"]
mod position_test;
