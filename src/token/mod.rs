// Public exports.
pub use lexer::{LexError, Lexer, LexerState};
pub use token::{Token, TokenKind};

// Public mods.
pub mod lexer;
pub mod token;
