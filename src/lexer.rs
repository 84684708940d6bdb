//! Lexer module for the bracket alphabet
//!
//! This module turns raw source text into a flat sequence of bracket tokens.
//! No balancing happens here: every token comes out with `Real` origin, and
//! the balancer refines origins in a later pass. The lexer recognizes
//! exactly `(`, `)`, `{` and `}`; anything else is rejected with
//! `UnrecognizedCharacter`.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::{balanced_source, detokenize};
pub use lexer_impl::{tokenize, LexError};
pub use tokens::{BracketKind, Origin, Token, TokenKind};
