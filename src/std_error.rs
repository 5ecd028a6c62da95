use std::fmt;
use std::rc::Rc;

use crate::error::{Error, ErrorKind};
use crate::primitive::LangString;
use crate::value::Value;


/// Encapsulation of Errors in rust's std module.
#[derive(Clone, Debug)]
pub enum StdError {
    // io::Error is not Clone.
    Io(Rc<std::io::Error>),
    #[cfg(feature = "cli")]
    Readline(String),
}

impl ErrorKind for StdError {
    fn reify(&self) -> Value {
        let inner = match self {
            Self::Io(err) => list!(LangString::new("IoError"), LangString::new(err.to_string()),),
            #[cfg(feature = "cli")]
            Self::Readline(err) => {
                list!(LangString::new("ReadlineError"), LangString::new(err),)
            }
        };
        Value::cons(LangString::new("StdError"), inner)
    }
}

impl fmt::Display for StdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {}", err),
            #[cfg(feature = "cli")]
            Self::Readline(err) => write!(f, "readline error: {}", err),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with pairlisp Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(Box::new(StdError::Io(Rc::new(err))))
    }
}
