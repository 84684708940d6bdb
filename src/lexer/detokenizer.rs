//! Detokenizer for annotated bracket sequences
//!
//! This module converts a token sequence back into text. Two renderings
//! exist: the original source (synthetic tokens contribute nothing) and the
//! balanced source (ignored tokens are dropped and synthetic closers are
//! materialized).
use crate::lexer::tokens::{Origin, Token};

/// Reconstruct the original source text from an annotated sequence
///
/// Synthetic tokens carry no source text, so concatenating every token's
/// source field yields exactly the input the sequence was built from.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.source.as_str()).collect()
}

/// Render the balanced form of an annotated sequence
///
/// Real and synthetic tokens are printed by kind; ignored tokens are
/// dropped. The result is the source with every opener explicitly closed
/// and every stray closer removed.
pub fn balanced_source(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| t.origin != Origin::Ignored)
        .map(|t| t.kind.glyph())
        .collect()
}
