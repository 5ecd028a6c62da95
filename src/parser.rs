//! Module for parsing pairlisp tokens into Value trees.
//!
//! Tokens are pulled from the Lexer on demand, which in turn pulls bytes from
//! the input only as needed, so a top-level expression is returned as soon as
//! its last token is complete.
//!
//! An error aborts only the top-level expression it occurs in: the rest of
//! that expression is skipped before the next one is parsed.

use log::debug;
use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, ErrorKind};
use crate::primitive::{LangString, Symbol};
use crate::source::SourceBuffer;
use crate::token::{Lexer, Token, TokenKind};
use crate::value::{ConsList, ListStep, Pair, Value};


pub struct Parser<I> {
    lexer: Lexer,
    input: I,
    // One byte can complete two Tokens.
    pending: VecDeque<Token>,
    exhausted: bool,
    // Parens opened and not yet closed among the Tokens taken so far.
    depth: usize,
    // An error left the current top-level expression unfinished.
    aborted: bool,
}

#[derive(Clone, Debug)]
pub enum ParseError {
    UnexpectedToken(String),
    /// A dotted tail followed by something other than `)`.
    MissingCloseParen(String),
    UnexpectedEof,
    InvalidNumber(String),
}


impl<I: Iterator<Item = Result<u8, Error>>> Parser<I> {
    pub fn new<S: Into<String>>(stream: S, input: I) -> Self {
        Self {
            lexer: Lexer::new(stream),
            input,
            pending: Default::default(),
            exhausted: false,
            depth: 0,
            aborted: false,
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        self.lexer.source()
    }

    /// Next Token, feeding bytes to the Lexer until one is complete.
    ///
    /// None once the input is exhausted and the final Token has been taken.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            if let Some(token) = self.take_pending() {
                return Ok(Some(token));
            }
            if self.exhausted {
                return Ok(None);
            }

            let c = self.read_byte()?;
            self.lex(c)?;
        }
    }

    /// Parses one expression, starting from `token` if one has already been
    /// read.
    ///
    /// A delegated `)` is never valid here: callers consume list terminators
    /// themselves.
    pub fn parse_expression(&mut self, token: Option<Token>) -> Result<Value, Error> {
        let token = match token {
            Some(token) => {
                if *token.kind() == TokenKind::RightParen {
                    debug_assert!(false, "RightParen delegated to parse_expression");
                    return Err(Error::internal(
                        "RightParen delegated to expression parsing",
                    ));
                }
                token
            }
            None => self.expect_token()?,
        };

        match token.kind() {
            TokenKind::Number => self.number(&token),
            TokenKind::Identifier => Ok(self.identifier(&token)),
            TokenKind::String => {
                let text = token.text(self.source());
                let body = &text[1..text.len() - 1];
                Ok(LangString::unescape(body).into())
            }
            TokenKind::LeftParen => self.parse_list(&token),
            TokenKind::Quote => {
                let quoted = self.parse_expression(None)?;
                let offset = *token.offset();
                let quote = Symbol::with_offset("quote", offset);
                Ok(Pair::located(quote.into(), list!(quoted,), Some(offset)).into())
            }
            TokenKind::RightParen | TokenKind::Dot => self.unexpected(&token),
        }
    }

    fn parse_list(&mut self, open: &Token) -> Result<Value, Error> {
        let first = self.expect_token()?;
        match first.kind() {
            TokenKind::RightParen => return Ok(Value::Null),
            TokenKind::Dot => return self.unexpected(&first),
            _ => {}
        }

        let mut next = Some(first);
        ConsList::build(Some(*open.offset()), || {
            let token = match next.take() {
                Some(token) => token,
                None => self.expect_token()?,
            };

            match token.kind() {
                TokenKind::RightParen => Ok(ListStep::End),
                TokenKind::Dot => {
                    let tail = self.parse_expression(None)?;
                    let close = self.expect_token()?;
                    if *close.kind() != TokenKind::RightParen {
                        return err!(
                            self.source(),
                            *close.offset(),
                            ParseError::MissingCloseParen(
                                close.display(self.source()).to_string()
                            )
                        );
                    }
                    Ok(ListStep::Tail(tail))
                }
                _ => Ok(ListStep::Element(self.parse_expression(Some(token))?)),
            }
        })
    }

    fn take_pending(&mut self) -> Option<Token> {
        let token = self.pending.pop_front()?;
        match token.kind() {
            TokenKind::LeftParen => self.depth += 1,
            TokenKind::RightParen => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        Some(token)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        self.input.next().transpose()
    }

    fn lex(&mut self, c: Option<u8>) -> Result<(), Error> {
        match c {
            Some(c) => {
                let tokens = self.lexer.consume(c)?;
                self.pending.extend(tokens);
            }
            None => {
                self.exhausted = true;
                let last = self.lexer.finish()?;
                self.pending.extend(last);
            }
        }
        Ok(())
    }

    /// Skips the rest of an aborted top-level expression, up to the `)`
    /// closing its outermost list.
    ///
    /// Lex errors in the skipped text belong to the aborted expression and
    /// are not reported; input errors are.
    fn skip_aborted(&mut self) -> Result<(), Error> {
        while self.depth > 0 {
            if let Some(token) = self.take_pending() {
                debug!("Skipped {}", token.display(self.source()));
                continue;
            }
            if self.exhausted {
                break;
            }

            let c = self.read_byte()?;
            if let Err(err) = self.lex(c) {
                debug!("Skipped {}", err);
            }
        }
        self.depth = 0;
        self.aborted = false;
        Ok(())
    }

    fn expect_token(&mut self) -> Result<Token, Error> {
        match self.next_token()? {
            Some(token) => Ok(token),
            None => err!(
                self.source(),
                self.source().len(),
                ParseError::UnexpectedEof
            ),
        }
    }

    fn number(&self, token: &Token) -> Result<Value, Error> {
        let text = token.text(self.source());
        match text.parse::<i64>() {
            Ok(num) => Ok(Value::Number(num)),
            Err(_) => err!(
                self.source(),
                *token.offset(),
                ParseError::InvalidNumber(text.into_owned())
            ),
        }
    }

    fn identifier(&self, token: &Token) -> Value {
        match token.text(self.source()).as_ref() {
            "#t" => Value::Boolean(true),
            "#f" => Value::Boolean(false),
            name => Symbol::with_offset(name, *token.offset()).into(),
        }
    }

    fn unexpected<T>(&self, token: &Token) -> Result<T, Error> {
        err!(
            self.source(),
            *token.offset(),
            ParseError::UnexpectedToken(token.display(self.source()).to_string())
        )
    }
}


impl<I: Iterator<Item = Result<u8, Error>>> Iterator for Parser<I> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.aborted {
            if let Err(err) = self.skip_aborted() {
                return Some(Err(err));
            }
        }

        let result = match self.next_token() {
            Ok(None) => return None,
            Ok(Some(token)) if *token.kind() == TokenKind::RightParen => {
                self.unexpected(&token)
            }
            Ok(Some(token)) => self.parse_expression(Some(token)),
            Err(err) => Err(err),
        };

        match &result {
            Ok(value) => debug!("Parsed {}", value),
            Err(_) => self.aborted = true,
        }
        Some(result)
    }
}


impl ErrorKind for ParseError {
    fn reify(&self) -> Value {
        match self {
            ParseError::UnexpectedToken(token) => list!(
                LangString::new("ParseError"),
                LangString::new("Unexpected token"),
                LangString::new(token),
            ),
            ParseError::MissingCloseParen(token) => list!(
                LangString::new("ParseError"),
                LangString::new("Missing close paren"),
                LangString::new(token),
            ),
            ParseError::UnexpectedEof => list!(
                LangString::new("ParseError"),
                LangString::new("Unexpected end of input"),
            ),
            ParseError::InvalidNumber(text) => list!(
                LangString::new("ParseError"),
                LangString::new("Invalid number"),
                LangString::new(text),
            ),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => write!(f, "unexpected token {}", token),
            ParseError::MissingCloseParen(token) => {
                write!(f, "unexpected token {}, expected TokRparen<)>", token)
            }
            ParseError::UnexpectedEof => write!(f, "unexpected end of input"),
            ParseError::InvalidNumber(text) => write!(f, "invalid number {}", text),
        }
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
