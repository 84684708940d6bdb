//! Core tokenization for the bracket lexer
//!
//! The raw scan is handled entirely by logos. Every recognized character
//! produces exactly one token with `Real` origin; origin refinement happens
//! later in the balancer. A character outside the recognized alphabet fails
//! the whole scan with `UnrecognizedCharacter` rather than being skipped, so
//! source offsets and token indices stay aligned.

use std::fmt;

use logos::Logos;

use crate::lexer::tokens::{Origin, Token, TokenKind};

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    UnrecognizedCharacter { character: char, offset: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter { character, offset } => {
                write!(f, "Unrecognized character {:?} at offset {}", character, offset)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize source text into raw bracket tokens
///
/// Scans left to right; each of `(`, `)`, `{`, `}` yields one token carrying
/// its source text and `Real` origin. Any other character fails the scan
/// immediately. Output length is at most the input length.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                source: lexer.slice().to_string(),
                kind,
                origin: Origin::Real,
            }),
            Err(()) => {
                let offset = lexer.span().start;
                let character = source[offset..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnrecognizedCharacter { character, offset });
            }
        }
    }

    Ok(tokens)
}
