use derivative::Derivative;
use std::borrow::Borrow;
use std::fmt;


/// Name used as an identifier and as the lookup key during evaluation.
///
/// Symbols read from source remember the offset of their token so evaluation
/// errors can point back at them. The offset is not part of the symbol's
/// identity.
#[derive(Clone, Derivative)]
#[derivative(Debug, Eq, Hash, PartialEq)]
pub struct Symbol {
    name: String,
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    offset: Option<usize>,
}

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}


impl Symbol {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            offset: None,
        }
    }

    pub fn with_offset<S: AsRef<str>>(name: S, offset: usize) -> Self {
        Self {
            name: name.as_ref().to_string(),
            offset: Some(offset),
        }
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> Symbol {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}


impl_try_from!(Symbol -> Symbol);
