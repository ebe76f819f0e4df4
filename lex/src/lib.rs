#![deny(rust_2018_idioms)]

//! Lexical analysis for C source text.
//!
//! One [`Lexer`] is constructed per source string and pulled with
//! [`Lexer::next_token`] until the `EOF` sentinel comes back. Diagnostics
//! are ordinary [`Token`]s of kind `Illegal`, never errors, so a caller may
//! stop at the first one or keep scanning and collect them all.

#[macro_use]
extern crate lazy_static;

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{lookup_keyword, Token, TokenKind};
