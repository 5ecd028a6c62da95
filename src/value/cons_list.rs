//! Module for constructing lists as Values without building in reverse or
//! tolerating O(n) insertion => O(n^2) total construction.
//!
//! Elements are appended through a cursor into the last cdr, starting from a
//! pseudo-root, so a list is built left to right in a single pass. Each new
//! Pair is uniquely owned until the builder moves past it.

use std::rc::Rc;

use super::pair::Pair;
use super::value::Value;


/// Next step of a list under construction.
#[derive(Debug)]
pub enum ListStep {
    /// Append an element.
    Element(Value),
    /// Terminate the list with a (dotted) tail.
    Tail(Value),
    /// Terminate the list with Null.
    End,
}

pub struct ConsList;

impl ConsList {
    /// Builds a list from steps produced by `next` until it terminates.
    ///
    /// `offset` is recorded on the first Pair of the list.
    pub fn build<E, F>(offset: Option<usize>, mut next: F) -> Result<Value, E>
    where
        F: FnMut() -> Result<ListStep, E>,
    {
        let mut offset = offset;
        let mut root = Value::Null;
        let mut end = &mut root;
        loop {
            match next()? {
                ListStep::Element(car) => {
                    *end = Pair::located(car, Value::Null, offset.take()).into();
                    end = match { end } {
                        Value::Pair(pair) => &mut Rc::make_mut(pair).cdr,
                        other => other,
                    };
                }
                ListStep::Tail(tail) => {
                    *end = tail;
                    return Ok(root);
                }
                ListStep::End => return Ok(root),
            }
        }
    }

    /// Collects `elements` into a list terminated by `tail`.
    pub fn collect<I: IntoIterator<Item = Value>>(elements: I, tail: Value) -> Value {
        let mut elements = elements.into_iter();
        let mut tail = Some(tail);
        let result: Result<Value, ()> = Self::build(None, || {
            Ok(match elements.next() {
                Some(elem) => ListStep::Element(elem),
                None => match tail.take() {
                    Some(Value::Null) | None => ListStep::End,
                    Some(tail) => ListStep::Tail(tail),
                },
            })
        });
        result.unwrap_or_default()
    }
}


#[cfg(test)]
#[path = "./cons_list_test.rs"]
mod cons_list_test;
