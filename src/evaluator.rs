//! Module for evaluating Value trees against an Environment.

use log::trace;

use crate::environment::Environment;
use crate::error::Error;
use crate::eval_error::EvalError;
use crate::parser::ParseError;
use crate::primitive::{ArgumentMode, Symbol};
use crate::source::SourceBuffer;
use crate::value::{ConsList, ListStep, Pair, Value};


/// Evaluation context handed to every Procedure.
pub struct Evaluator<'a> {
    env: &'a Environment,
    // Only used to position errors.
    source: Option<&'a SourceBuffer>,
}


impl<'a> Evaluator<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self { env, source: None }
    }

    /// Errors will be located in `source`, which should be the buffer the
    /// evaluated forms were parsed from.
    pub fn with_source(env: &'a Environment, source: &'a SourceBuffer) -> Self {
        Self {
            env,
            source: Some(source),
        }
    }

    pub fn env(&self) -> &'a Environment {
        self.env
    }

    pub fn source(&self) -> Option<&'a SourceBuffer> {
        self.source
    }

    pub fn eval(&mut self, form: &Value) -> Result<Value, Error> {
        match form {
            Value::Symbol(symbol) => self.eval_symbol(symbol),
            Value::Pair(pair) => self.apply(pair),
            _ => Ok(form.clone()),
        }
    }

    /// Evaluates each element of `args` in order, building a list of the
    /// results; a non-Null tail is evaluated too and ends the result.
    pub fn eval_arguments(&mut self, args: &Value) -> Result<Value, Error> {
        let mut rest = args;
        ConsList::build(None, || match rest {
            Value::Pair(pair) => {
                rest = pair.cdr();
                Ok(ListStep::Element(self.eval(pair.car())?))
            }
            Value::Null => Ok(ListStep::End),
            tail => Ok(ListStep::Tail(self.eval(tail)?)),
        })
    }

    fn eval_symbol(&mut self, symbol: &Symbol) -> Result<Value, Error> {
        if let Some(value) = self.env.lookup(symbol.as_str()) {
            return Ok(value.clone());
        }
        // Signed literals like -4 lex as identifiers.
        let name = symbol.as_str();
        match name.parse::<i64>() {
            Ok(num) => return Ok(Value::Number(num)),
            Err(_) if is_signed_digits(name) => {
                let err = Error::new(Box::new(ParseError::InvalidNumber(name.into())));
                return Err(self.locate(err, symbol.offset()));
            }
            Err(_) => {}
        }
        Err(self.locate(
            EvalError::UnboundVariable(symbol.clone()).into(),
            symbol.offset(),
        ))
    }

    fn apply(&mut self, pair: &Pair) -> Result<Value, Error> {
        let procedure = match self.eval(pair.car())? {
            Value::Procedure(procedure) => procedure,
            other => {
                return Err(self.locate(EvalError::WrongTypeToApply(other).into(), pair.offset()));
            }
        };

        trace!("Applying {} to {}", procedure.name(), pair.cdr());
        let args = match procedure.mode() {
            ArgumentMode::Evaluated => self.eval_arguments(pair.cdr())?,
            ArgumentMode::Unevaluated => pair.cdr().clone(),
        };
        procedure
            .call(&args, self)
            .map_err(|err| self.locate(err, pair.offset()))
    }

    /// Positions `err` at `offset` (or the end of source) unless it already
    /// has a location.
    fn locate(&self, err: Error, offset: Option<usize>) -> Error {
        match self.source {
            Some(source) => {
                let offset = offset.unwrap_or_else(|| source.len());
                err.or_at(source, offset)
            }
            None => err,
        }
    }
}


fn is_signed_digits(name: &str) -> bool {
    match name.strip_prefix(|c| c == '-' || c == '+') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|c| c.is_ascii_digit()),
        None => false,
    }
}


#[cfg(test)]
#[path = "./evaluator_test.rs"]
mod evaluator_test;
