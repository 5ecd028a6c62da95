use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, ErrorKind};
use crate::primitive::{LangString, Symbol};
use crate::value::Value;


#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    UnboundVariable(Symbol),
    WrongTypeToApply(Value),
    WrongArgumentType {
        expected: Cow<'static, str>,
        given: Value,
    },
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    MalformedList(Value),
    DivisionByZero,
    Overflow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl ErrorKind for EvalError {
    fn reify(&self) -> Value {
        let inner = match self {
            Self::UnboundVariable(symbol) => {
                list!(LangString::new("Unbound variable"), symbol.clone(),)
            }
            Self::WrongTypeToApply(value) => {
                list!(LangString::new("Wrong type to apply"), value.clone(),)
            }
            Self::WrongArgumentType { expected, given } => list!(
                LangString::new("Wrong argument type"),
                (LangString::new("given"), given.clone(),),
                (LangString::new("expected"), LangString::new(expected),),
            ),
            Self::WrongArgumentCount { given, expected } => list!(
                LangString::new("Wrong argument count"),
                (LangString::new("given"), *given as i64,),
                (
                    LangString::new("expected"),
                    LangString::new(expected.to_string()),
                ),
            ),
            Self::MalformedList(value) => {
                list!(LangString::new("Malformed list"), value.clone(),)
            }
            Self::DivisionByZero => list!(LangString::new("Division by zero"),),
            Self::Overflow => list!(LangString::new("Overflow"),),
        };
        Value::cons(LangString::new("EvalError"), inner)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable(symbol) => write!(f, "unbound variable {}", symbol),
            Self::WrongTypeToApply(value) => write!(f, "wrong type to apply: {}", value),
            Self::WrongArgumentType { expected, given } => write!(
                f,
                "wrong argument type: expected {}, given {} {}",
                expected,
                given.type_name(),
                given
            ),
            Self::WrongArgumentCount { given, expected } => write!(
                f,
                "wrong argument count: expected {}, given {}",
                expected, given
            ),
            Self::MalformedList(value) => write!(f, "malformed argument list: {}", value),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(exactly) => write!(f, "{}", exactly),
            Self::AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::new(Box::new(err))
    }
}
