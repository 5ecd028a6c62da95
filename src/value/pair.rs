use derivative::Derivative;
use std::convert::TryFrom;
use std::rc::Rc;

use super::value::Value;
use crate::eval_error::EvalError;


/// The universal two-slot node: list cell and dotted pair alike.
///
/// Pairs are shared through Rc and never mutated once a list has been built.
#[derive(Clone, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Pair {
    pub(super) car: Value,
    pub(super) cdr: Value,
    // Offset of the token that opened this pair in source, if parsed.
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    offset: Option<usize>,
}

impl Pair {
    pub fn new(car: Value, cdr: Value) -> Pair {
        Pair {
            car,
            cdr,
            offset: None,
        }
    }

    pub fn located(car: Value, cdr: Value, offset: Option<usize>) -> Pair {
        Pair { car, cdr, offset }
    }

    pub fn car(&self) -> &Value {
        &self.car
    }

    pub fn cdr(&self) -> &Value {
        &self.cdr
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

// Unlinks the cdr chain iteratively so that dropping a long list doesn't
// recurse once per element.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.cdr);
        while let Value::Pair(pair) = next {
            match Rc::try_unwrap(pair) {
                Ok(mut pair) => next = std::mem::take(&mut pair.cdr),
                Err(_) => break,
            }
        }
    }
}


impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Value::Pair(Rc::new(pair))
    }
}

impl<'a> TryFrom<&'a Value> for &'a Pair {
    type Error = EvalError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Pair(pair) => Ok(pair.as_ref()),
            _ => Err(EvalError::WrongArgumentType {
                expected: "Pair".into(),
                given: value.clone(),
            }),
        }
    }
}
