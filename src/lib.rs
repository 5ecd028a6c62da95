//! Reader and evaluator for a small S-expression language.
//!
//! Bytes flow through a streaming Lexer into a recursive-descent Parser that
//! builds cons-pair Values, which an Evaluator walks against a flat
//! Environment of native procedures.
//!
//! Note that this crate does *not* setup logging; clients should take care of
//! that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod primitive;
#[macro_use]
pub mod value;
#[macro_use]
pub mod error;

pub mod builtins;
pub mod environment;
pub mod eval_error;
pub mod evaluator;
pub mod interpreter;
pub mod parser;
pub mod position;
pub mod printer;
pub mod source;
pub mod std_error;
pub mod token;

pub mod prelude {
    pub use crate::builtins::default_environment;
    pub use crate::environment::Environment;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::eval_error::{EvalError, ExpectedCount};
    pub use crate::evaluator::Evaluator;
    pub use crate::interpreter::Interpreter;
    pub use crate::parser::Parser;
    pub use crate::primitive::prelude::*;
    pub use crate::source::{ReadSource, SourceBuffer, StringSource};
    pub use crate::std_error::StdError;
    pub use crate::value::{ConsList, Pair, Value};
    // Macros.
    pub use crate::{break_list, err, list};
}
