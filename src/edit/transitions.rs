//! Transition types and the transition applier
//!
//! A source transition is a single-character insertion into the source text.
//! A token transition is the matching minimal edit against the annotated
//! token sequence. Token transitions come in ordered batches with sequential
//! index semantics: each index refers to the sequence as it stands after the
//! previous transition in the batch has been applied.
use crate::lexer::tokens::{Origin, Token};

/// A single-character insertion into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceTransition {
    /// Byte offset in the source text where the character is inserted
    pub index: usize,
    pub character: char,
}

/// A minimal edit against a token sequence
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenTransition {
    /// Insert the token so it occupies the given position, shifting later
    /// tokens up by one
    Insert(usize, Token),
    /// Replace the origin of the token currently at the given position,
    /// leaving its source text and kind untouched
    ChangeOrigin(usize, Origin),
}

/// Replay an ordered batch of token transitions
///
/// Pure left fold: each transition is applied to the result of the previous
/// one. An index outside the current sequence is a defect in whoever
/// produced the batch, not a recoverable condition, and panics via the
/// underlying bounds checks.
pub fn apply_transitions(tokens: Vec<Token>, transitions: &[TokenTransition]) -> Vec<Token> {
    let mut tokens = tokens;
    for transition in transitions {
        match transition {
            TokenTransition::Insert(index, token) => tokens.insert(*index, token.clone()),
            TokenTransition::ChangeOrigin(index, origin) => {
                tokens[*index] = tokens[*index].with_origin(*origin);
            }
        }
    }
    tokens
}
