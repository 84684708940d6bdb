//! Balancer for raw bracket token streams
//!
//! This module transforms a raw token sequence into an annotated sequence
//! that is always well-formed: every opener is closed by a real or synthetic
//! closer, and closers with nothing to match are marked ignored instead of
//! being dropped. Ignored tokens keep their position so later edits can
//! revive them.

use crate::lexer::tokens::{BracketKind, Origin, Token};

/// Balance a raw token sequence
///
/// Single left-to-right pass over the tokens with an explicit stack of open
/// bracket families:
///
/// 1. While the incoming token is a closer of a different family than the
///    top of the stack, pop the stack and emit a synthetic closer for the
///    popped family. This auto-closes e.g. the `(` in `"(}"` with a
///    synthetic `)` before the `}` is considered.
/// 2. Classify the token: an opener pushes its family and stays `Real`; a
///    closer matching the top of the stack pops it and stays `Real`; a
///    closer with nothing left to match becomes `Ignored`.
/// 3. At end of input, emit a synthetic closer for every family still open,
///    innermost first.
///
/// Balancing never fails; any input has a defined output. Empty input yields
/// empty output. The pass is O(n) in token count and the stack depth is
/// bounded by the nesting depth.
pub fn balance(raw: Vec<Token>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut open: Vec<BracketKind> = Vec::new();

    for token in raw {
        // Unwind fully before classifying the incoming token
        while let Some(&top) = open.last() {
            if token.kind.is_closer() && token.kind != top.closer() {
                open.pop();
                tokens.push(Token::synthetic(top.closer()));
            } else {
                break;
            }
        }

        if token.kind.is_opener() {
            open.push(token.kind.bracket_kind());
            tokens.push(token.with_origin(Origin::Real));
        } else if open.last() == Some(&token.kind.bracket_kind()) {
            open.pop();
            tokens.push(token.with_origin(Origin::Real));
        } else {
            // Stray closer with an empty stack
            tokens.push(token.with_origin(Origin::Ignored));
        }
    }

    while let Some(top) = open.pop() {
        tokens.push(Token::synthetic(top.closer()));
    }

    tokens
}
