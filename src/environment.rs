//! Module for the global table of named Values.
//!
//! There are no nested scopes: every binding is global and the table is
//! populated by the host before evaluation starts.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, ErrorKind};
use crate::primitive::{LangString, Procedure};
use crate::value::Value;


#[derive(Clone, Debug, Default)]
pub struct Environment {
    map: HashMap<String, Value>,
}

#[derive(Clone, Debug)]
pub enum EnvironmentError {
    /// The name could never be read back as an identifier.
    InvalidName(String),
}


/// Whether `name` lexes as a single identifier that doesn't read as a
/// Boolean.
pub fn is_valid_name(name: &str) -> bool {
    lazy_static! {
        static ref NAME: Regex =
            Regex::new(r"^[0-9]*[A-Za-z!$%&*+/:<=>?^`~\\#-][0-9A-Za-z!$%&*+/:<=>?^`~\\#-]*$")
                .unwrap();
    }
    NAME.is_match(name) && name != "#t" && name != "#f"
}


impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    /// Binds `name` to `value`, returning the previous binding if any.
    pub fn insert<S: Into<String>, V: Into<Value>>(
        &mut self,
        name: S,
        value: V,
    ) -> Result<Option<Value>, Error> {
        let name = name.into();
        if !is_valid_name(&name) {
            return err!(EnvironmentError::InvalidName(name));
        }
        Ok(self.map.insert(name, value.into()))
    }

    /// Binds a Procedure under its own name.
    pub fn define(&mut self, procedure: Procedure) -> Result<(), Error> {
        self.insert(procedure.name(), procedure)?;
        Ok(())
    }

    pub fn lookup<K>(&self, k: &K) -> Option<&Value>
    where
        String: Borrow<K>,
        K: Hash + Eq + ?Sized,
    {
        self.map.get(k)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}


impl ErrorKind for EnvironmentError {
    fn reify(&self) -> Value {
        match self {
            Self::InvalidName(name) => list!(
                LangString::new("EnvironmentError"),
                LangString::new("Invalid name"),
                LangString::new(name),
            ),
        }
    }
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "invalid name {:?}", name),
        }
    }
}


#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;
