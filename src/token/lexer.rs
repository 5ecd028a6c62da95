//! Module for breaking pairlisp source into tokens, one byte at a time.

use log::trace;
use std::fmt;

use super::token::{Token, TokenKind};
use crate::error::{Error, ErrorKind};
use crate::primitive::LangString;
use crate::source::SourceBuffer;
use crate::value::Value;

use self::LexerState::*;


/// Essentially a Mealy machine that consumes bytes and outputs Tokens.
///
/// Every consumed byte is appended to the owned SourceBuffer, so Token
/// offsets always index into it.
pub struct Lexer {
    // Mealy machine state.
    state: LexerState,
    // Token being accumulated in the InNumber, InIdentifier, InString and
    // InStringEscape states.
    pending: Option<Token>,
    // Pending token had a bad byte; it is dropped rather than emitted.
    discarding: bool,

    source: SourceBuffer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LexerState {
    Idle,
    InNumber,
    InIdentifier,
    InComment,
    InString,
    InStringEscape,
}


#[derive(Clone, Debug)]
pub enum LexError {
    UnexpectedByte(u8),
    UnterminatedString,
}


impl Lexer {
    pub fn new<S: Into<String>>(stream: S) -> Self {
        Self {
            state: Idle,
            pending: None,
            discarding: false,
            source: SourceBuffer::new(stream),
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Consumes a single byte, returning the 0, 1, or 2 Tokens it completes.
    ///
    /// A bad byte poisons the token it falls in (starting one if Idle): the
    /// rest of that token is consumed but never emitted, and further bad bytes
    /// within it are not reported again. A bad byte inside a string leaves the
    /// Lexer in the string, so its closing quote still ends it.
    ///
    /// The byte is recorded in source either way.
    pub fn consume(&mut self, c: u8) -> Result<Vec<Token>, Error> {
        let offset = self.source.len();
        let result = self.transition(c);
        self.source.push(c);

        match result {
            Ok(tokens) => {
                for token in &tokens {
                    trace!("Lexed {}", token.display(&self.source));
                }
                Ok(tokens)
            }
            Err(err) => {
                let reported = !self.discarding;
                self.absorb(offset);
                if reported {
                    Err(err)
                } else {
                    Ok(vec![])
                }
            }
        }
    }

    /// Completes any token still in progress at end of input.
    pub fn finish(&mut self) -> Result<Option<Token>, Error> {
        match self.state {
            InNumber | InIdentifier => Ok(self.flush()),
            InString | InStringEscape if self.discarding => {
                self.reset();
                Ok(None)
            }
            InString | InStringEscape => {
                let offset = self.pending.map_or(self.source.len(), |t| *t.offset());
                self.reset();
                err!(&self.source, offset, LexError::UnterminatedString)
            }
            Idle | InComment => {
                self.state = Idle;
                Ok(None)
            }
        }
    }

    fn transition(&mut self, c: u8) -> Result<Vec<Token>, Error> {
        let offset = self.source.len();
        let mut tokens = Vec::with_capacity(2);

        match self.state {
            Idle | InNumber | InIdentifier => {
                if let Some(kind) = TokenKind::single(c) {
                    tokens.extend(self.flush());
                    tokens.push(Token::new(offset, 1, kind));
                    return Ok(tokens);
                }

                match c {
                    b' ' | b'\t' | b'\r' | b'\n' => {
                        tokens.extend(self.flush());
                    }
                    b';' => {
                        tokens.extend(self.flush());
                        self.state = InComment;
                    }
                    b'"' => {
                        tokens.extend(self.flush());
                        self.begin(offset, TokenKind::String, InString);
                    }
                    _ if c.is_ascii_digit() => match self.state {
                        Idle => self.begin(offset, TokenKind::Number, InNumber),
                        _ => self.extend(),
                    },
                    _ if is_identifier_byte(c) => match self.state {
                        Idle => self.begin(offset, TokenKind::Identifier, InIdentifier),
                        InNumber => {
                            if let Some(token) = &mut self.pending {
                                token.retype(TokenKind::Identifier);
                            }
                            self.state = InIdentifier;
                            self.extend();
                        }
                        _ => self.extend(),
                    },
                    _ => return self.unexpected(c),
                }
            }
            InComment => match c {
                b'\r' | b'\n' => self.state = Idle,
                _ if c == b'\t' || is_printable(c) => {}
                _ => return self.unexpected(c),
            },
            InString => match c {
                b'"' => {
                    self.extend();
                    tokens.extend(self.flush());
                }
                b'\\' => {
                    self.extend();
                    self.state = InStringEscape;
                }
                _ if is_string_byte(c) => self.extend(),
                _ => return self.unexpected(c),
            },
            InStringEscape => {
                if !is_string_byte(c) {
                    return self.unexpected(c);
                }
                self.extend();
                self.state = InString;
            }
        }

        Ok(tokens)
    }

    fn begin(&mut self, offset: usize, kind: TokenKind, state: LexerState) {
        self.pending = Some(Token::new(offset, 1, kind));
        self.state = state;
    }

    fn extend(&mut self) {
        if let Some(token) = &mut self.pending {
            token.extend();
        }
    }

    fn flush(&mut self) -> Option<Token> {
        self.state = Idle;
        let token = self.pending.take();
        if self.discarding {
            self.discarding = false;
            if let Some(token) = token {
                trace!("Discarded {}", token.display(&self.source));
            }
            return None;
        }
        token
    }

    fn reset(&mut self) {
        self.state = Idle;
        self.pending = None;
        self.discarding = false;
    }

    // Takes the bad byte at `offset` into the token it interrupted. Comments
    // simply carry on.
    fn absorb(&mut self, offset: usize) {
        match self.state {
            Idle => self.begin(offset, TokenKind::Identifier, InIdentifier),
            InStringEscape => {
                self.extend();
                self.state = InString;
            }
            InNumber | InIdentifier | InString => self.extend(),
            InComment => return,
        }
        self.discarding = true;
    }

    fn unexpected(&self, c: u8) -> Result<Vec<Token>, Error> {
        err!(&self.source, self.source.len(), LexError::UnexpectedByte(c))
    }
}


fn is_printable(c: u8) -> bool {
    (0x20..=0x7e).contains(&c)
}

fn is_identifier_byte(c: u8) -> bool {
    c.is_ascii_alphabetic() || b"-!$%*+?&.\\/~`:=<>^#".contains(&c)
}

fn is_string_byte(c: u8) -> bool {
    matches!(c, b'\t' | b'\n' | b'\r') || is_printable(c)
}


impl ErrorKind for LexError {
    fn reify(&self) -> Value {
        match self {
            LexError::UnexpectedByte(c) => list!(
                LangString::new("LexError"),
                LangString::new("Unexpected byte"),
                Value::Number(*c as i64),
            ),
            LexError::UnterminatedString => list!(
                LangString::new("LexError"),
                LangString::new("Unterminated string"),
            ),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedByte(c) if is_printable(*c) => {
                write!(f, "unexpected byte '{}'", *c as char)
            }
            LexError::UnexpectedByte(c) => write!(f, "unexpected byte {:#04x}", c),
            LexError::UnterminatedString => write!(f, "unterminated string"),
        }
    }
}


#[cfg(test)]
#[path = "./lexer_test.rs"]
mod lexer_test;
