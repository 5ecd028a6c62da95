//! Representation of native procedures.

use derivative::Derivative;
use std::fmt;

use crate::error::Error;
use crate::evaluator::Evaluator;
use crate::value::Value;


/// Signature of native procedures: (argument list, evaluator context).
pub type NativeFn = fn(&Value, &mut Evaluator<'_>) -> Result<Value, Error>;

/// How the evaluator prepares the argument list before a call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgumentMode {
    /// Arguments are evaluated left to right first.
    Evaluated,
    /// The argument list is passed exactly as written (special forms).
    Unevaluated,
}

#[derive(Clone, Copy, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Procedure {
    name: &'static str,
    mode: ArgumentMode,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    fun: NativeFn,
}

impl Procedure {
    pub fn new(name: &'static str, fun: NativeFn) -> Self {
        Self {
            name,
            mode: ArgumentMode::Evaluated,
            fun,
        }
    }

    pub fn special_form(name: &'static str, fun: NativeFn) -> Self {
        Self {
            name,
            mode: ArgumentMode::Unevaluated,
            fun,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> ArgumentMode {
        self.mode
    }

    pub fn call(&self, args: &Value, evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
        (self.fun)(args, evaluator)
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<procedure {}>", self.name)
    }
}

