//! Driver chaining the Parser and Evaluator over a byte source.

use log::{error, warn};

use crate::environment::Environment;
use crate::error::Error;
use crate::evaluator::Evaluator;
use crate::parser::Parser;
use crate::source::SourceBuffer;
use crate::value::Value;


/// Iterator yielding the result of each top-level expression in turn.
///
/// Each expression is fully parsed, then evaluated, before the next byte of
/// the following one is read. A lex, parse, or eval error only ends the
/// current expression; hosts should stop on internal errors.
pub struct Interpreter<'a, I> {
    parser: Parser<I>,
    env: &'a Environment,
}

impl<'a, I: Iterator<Item = Result<u8, Error>>> Interpreter<'a, I> {
    pub fn new<S: Into<String>>(stream: S, input: I, env: &'a Environment) -> Self {
        Self {
            parser: Parser::new(stream, input),
            env,
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        self.parser.source()
    }

    pub fn env(&self) -> &'a Environment {
        self.env
    }

    fn eval(&self, form: &Value) -> Result<Value, Error> {
        Evaluator::with_source(self.env, self.parser.source()).eval(form)
    }
}

impl<'a, I: Iterator<Item = Result<u8, Error>>> Iterator for Interpreter<'a, I> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.parser.next()? {
            Ok(form) => self.eval(&form),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            if err.is_internal() {
                error!("{}", err);
            } else {
                warn!("{}", err);
            }
        }
        Some(result)
    }
}
