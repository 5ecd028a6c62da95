use derive_getters::Getters;
use std::borrow::Cow;
use std::fmt;

use crate::source::SourceBuffer;


/// A classified span of source bytes.
///
/// Tokens don't own their text; it is read back from the SourceBuffer that
/// the offset indexes into.
#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq)]
pub struct Token {
    offset: usize,
    length: usize,
    kind: TokenKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Number,
    Identifier,
    String,
    LeftParen,
    RightParen,
    Dot,
    Quote,
}

/// Displays a Token along with its text, e.g. `TokNumber<42>`.
pub struct TokenDisplay<'a> {
    token: &'a Token,
    source: &'a SourceBuffer,
}


impl Token {
    pub fn new(offset: usize, length: usize, kind: TokenKind) -> Self {
        Self {
            offset,
            length,
            kind,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn text<'a>(&self, source: &'a SourceBuffer) -> Cow<'a, str> {
        source.text(self.offset, self.length)
    }

    pub fn display<'a>(&'a self, source: &'a SourceBuffer) -> TokenDisplay<'a> {
        TokenDisplay {
            token: self,
            source,
        }
    }

    pub(super) fn extend(&mut self) {
        self.length += 1;
    }

    pub(super) fn retype(&mut self, kind: TokenKind) {
        self.kind = kind;
    }
}

impl TokenKind {
    /// Kind of the token a single byte forms on its own, if any.
    pub fn single(c: u8) -> Option<TokenKind> {
        match c {
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            b'.' => Some(TokenKind::Dot),
            b'\'' => Some(TokenKind::Quote),
            _ => None,
        }
    }
}


impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "TokNumber",
            TokenKind::Identifier => "TokIdentifier",
            TokenKind::String => "TokString",
            TokenKind::LeftParen => "TokLparen",
            TokenKind::RightParen => "TokRparen",
            TokenKind::Dot => "TokDot",
            TokenKind::Quote => "TokQuote",
        };
        write!(f, "{}", name)
    }
}

impl<'a> fmt::Display for TokenDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<{}>",
            self.token.kind,
            self.token.text(self.source)
        )
    }
}
