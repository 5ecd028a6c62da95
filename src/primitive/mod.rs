//! Representation of primitives.

#[macro_use]
mod try_from_helper;

pub mod procedure;
pub mod string;
pub mod symbol;

pub use self::procedure::{ArgumentMode, NativeFn, Procedure};
pub use self::string::LangString;
pub use self::symbol::{Symbol, ToSymbol};


pub mod prelude {
    pub use super::{ArgumentMode, LangString, Procedure, Symbol, ToSymbol};
}
