//! Errors raised while reading or evaluating pairlisp.
//!
//! General error mechanism that can use any ErrorKind. Every kind can be
//! reified into a Value list so that errors can be compared structurally, and
//! located errors print as `<stream>:<line>:<column>: <message>`.

use derive_getters::Getters;
use dyn_clone::DynClone;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;

use crate::position::Position;
use crate::primitive::LangString;
use crate::source::SourceBuffer;
use crate::value::Value;


/// Creates an Error wrapped in Err.
///
/// With a source buffer and offset, the error is located in that buffer.
#[macro_export]
macro_rules! err {
    ($source:expr, $offset:expr, $kind:expr) => {
        Err($crate::error::Error::at($source, $offset, Box::new($kind)))
    };
    ($kind:expr) => {
        Err($crate::error::Error::new(Box::new($kind)))
    };
}


#[derive(Clone, Debug)]
pub struct Error {
    location: Option<Location>,
    kind: Box<dyn ErrorKind>,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Location {
    stream: String,
    position: Position,
}

pub trait ErrorKind: fmt::Display + fmt::Debug + DynClone {
    fn reify(&self) -> Value;

    /// Whether this kind reports a broken invariant rather than bad input.
    fn is_internal(&self) -> bool {
        false
    }
}

/// Programmer-contract violation.
///
/// Never produced by well-formed or malformed input alone; hosts should stop
/// rather than continue with the next expression.
#[derive(Clone, Debug)]
pub struct InternalError(pub Cow<'static, str>);


impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self {
            location: None,
            kind,
        }
    }

    /// Prefer using err! for convenience.
    pub fn at(source: &SourceBuffer, offset: usize, kind: Box<dyn ErrorKind>) -> Self {
        Self {
            location: Some(Location::new(source.name(), source.locate(offset))),
            kind,
        }
    }

    pub fn internal<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self::new(Box::new(InternalError(message.into())))
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }

    /// Locates the error at `offset` unless it already has a location.
    pub fn or_at(mut self, source: &SourceBuffer, offset: usize) -> Self {
        if self.location.is_none() {
            self.location = Some(Location::new(source.name(), source.locate(offset)));
        }
        self
    }
}

impl Location {
    pub fn new<S: Into<String>>(stream: S, position: Position) -> Self {
        Self {
            stream: stream.into(),
            position,
        }
    }
}


impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{}: ", location)?;
        }
        write!(f, "{}", self.kind())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.stream, self.position)
    }
}

impl std::error::Error for Error {}

// Lets break_list! take `&Value` elements through the blanket TryFrom.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}


impl ErrorKind for InternalError {
    fn reify(&self) -> Value {
        list!(
            LangString::new("InternalError"),
            LangString::new(self.0.as_ref()),
        )
    }

    fn is_internal(&self) -> bool {
        true
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal error: {}", self.0)
    }
}

dyn_clone::clone_trait_object!(ErrorKind);
