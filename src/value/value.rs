//! Module for representing pairlisp values.
//!
//! A single tagged union serves both as parse tree and as evaluation result.

use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;
use std::rc::Rc;
use std::str::FromStr;

use super::cons_list::ConsList;
use super::pair::Pair;
use crate::error::Error;
use crate::parser::Parser;
use crate::primitive::{LangString, Procedure, Symbol};
use crate::source::StringSource;


#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Pair(Rc<Pair>),
    Symbol(Symbol),
    Number(i64),
    // Reserved; no builtin produces or consumes Characters yet.
    Character(char),
    String(LangString),
    Procedure(Procedure),
}

pub struct ValueIter<'a> {
    current: Option<&'a Value>,
}


impl Value {
    pub fn cons<A: Into<Value>, D: Into<Value>>(car: A, cdr: D) -> Value {
        Pair::new(car.into(), cdr.into()).into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Value::Pair(pair) => Some(pair.as_ref()),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Pair(_) => "Pair",
            Value::Symbol(_) => "Symbol",
            Value::Number(_) => "Number",
            Value::Character(_) => "Character",
            Value::String(_) => "String",
            Value::Procedure(_) => "Procedure",
        }
    }

    /// Offset in source of the token this Value was read from, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Value::Pair(pair) => pair.offset(),
            Value::Symbol(symbol) => symbol.offset(),
            _ => None,
        }
    }

    pub fn iter(&self) -> ValueIter {
        ValueIter {
            current: Some(self),
        }
    }

    /// Whether this is a Null-terminated Pair chain (or Null itself).
    pub fn is_proper_list(&self) -> bool {
        self.iter().all(|(_, proper)| proper)
    }

    /// If this is `(quote x)`, returns x.
    pub fn quoted(&self) -> Option<&Value> {
        let pair = self.as_pair()?;
        match pair.car() {
            Value::Symbol(symbol) if symbol.as_str() == "quote" => {}
            _ => return None,
        }
        let rest = pair.cdr().as_pair()?;
        if rest.cdr().is_null() {
            Some(rest.car())
        } else {
            None
        }
    }

    /// Writes the Value in S-expression syntax, delegating atoms and
    /// parentheses to the provided callbacks so callers can decorate them.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_atom: &mut F,
        write_paren: &mut P,
    ) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &Value, usize) -> io::Result<()>,
        P: FnMut(&mut W, &str, usize) -> io::Result<()>,
    {
        if !matches!(self, Value::Pair(_)) {
            return write_atom(w, self, depth);
        }
        if let Some(quoted) = self.quoted() {
            write!(w, "'")?;
            return quoted.write_list(w, depth, write_atom, write_paren);
        }

        write_paren(w, "(", depth)?;
        for (pos, (val, proper)) in self.iter().enumerate() {
            if pos > 0 {
                if proper {
                    write!(w, " ")?;
                } else {
                    write!(w, " . ")?;
                }
            }
            val.write_list(w, depth + 1, write_atom, write_paren)?;
        }
        write_paren(w, ")", depth)
    }

    /// Writes a non-Pair Value in S-expression syntax.
    pub fn write_atom<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Value::Null => write!(w, "()"),
            Value::Boolean(true) => write!(w, "#t"),
            Value::Boolean(false) => write!(w, "#f"),
            Value::Symbol(symbol) => write!(w, "{}", symbol),
            Value::Number(num) => write!(w, "{}", num),
            Value::Character(c) => write!(w, "#\\{}", c),
            Value::String(s) => write!(w, "{}", s),
            Value::Procedure(procedure) => write!(w, "{}", procedure),
            Value::Pair(_) => write!(w, "{}", self),
        }
    }
}


impl<'a> Iterator for ValueIter<'a> {
    // (Value, proper).
    //
    // If proper is false, the Value is the non-Null tail of a dotted chain (or
    // a top-level non-Pair) rather than the car of a Pair. It is necessarily
    // the last element.
    type Item = (&'a Value, bool);

    fn next(&mut self) -> Option<Self::Item> {
        match self.current? {
            Value::Pair(pair) => {
                self.current = Some(pair.cdr());
                Some((pair.car(), true))
            }
            Value::Null => {
                self.current = None;
                None
            }
            value => {
                self.current = None;
                Some((value, false))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    // (Value, proper). See impl Iterator above for more info.
    type Item = (&'a Value, bool);
    type IntoIter = ValueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ConsList::collect(iter, Value::Null)
    }
}


impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

/// S-expression syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        if self
            .write_list(
                &mut buf,
                0,
                &mut |writer, value, _depth| value.write_atom(writer),
                &mut |writer, paren, _depth| write!(writer, "{}", paren),
            )
            .is_err()
        {
            return Err(fmt::Error);
        }
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// Tagged debug syntax: `ValNumber<1>`, `ValPair<(car . cdr)>`, `<()>`.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "<()>"),
            Value::Boolean(b) => write!(f, "ValBoolean<{}>", if *b { "#t" } else { "#f" }),
            Value::Pair(_) => {
                // Walk the cdr spine rather than recursing into it.
                let mut cells = 0;
                let mut tail = &Value::Null;
                for (val, proper) in self {
                    if proper {
                        write!(f, "ValPair<({:?} . ", val)?;
                        cells += 1;
                    } else {
                        tail = val;
                    }
                }
                write!(f, "{:?}{}", tail, ")>".repeat(cells))
            }
            Value::Symbol(symbol) => write!(f, "ValSymbol<{}>", symbol),
            Value::Number(num) => write!(f, "ValNumber<{}>", num),
            Value::Character(c) => write!(f, "ValCharacter<{}>", c),
            Value::String(s) => write!(f, "ValString<{}>", s),
            Value::Procedure(procedure) => write!(f, "ValProcedure<{}>", procedure.name()),
        }
    }
}

/// Parses the first expression of `s`; empty input is Null.
impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new("<string>", StringSource::new(s));
        match parser.next() {
            Some(result) => result,
            None => Ok(Value::Null),
        }
    }
}


// From<T> impls.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(num: i64) -> Self {
        Value::Number(num)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Character(c)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<LangString> for Value {
    fn from(s: LangString) -> Self {
        Value::String(s)
    }
}

impl From<Procedure> for Value {
    fn from(procedure: Procedure) -> Self {
        Value::Procedure(procedure)
    }
}

impl From<Rc<Pair>> for Value {
    fn from(pair: Rc<Pair>) -> Self {
        Value::Pair(pair)
    }
}


impl_try_from!(Number -> i64, Boolean -> bool);


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
