//! Edit-transition generator
//!
//! Given the current annotated state and a single-character source
//! insertion, this module computes the ordered token transitions equivalent
//! to re-lexing and re-balancing the whole new source. Only insertion of an
//! opening curly brace is modeled; every other character yields no token
//! changes.
//!
//! Inserting `{` needs exactly two token edits: the new opener itself, and
//! one closing edit. The closing edit is found by scanning forward from the
//! insertion point at the insertion's nesting depth: brackets opened and
//! closed further in are skipped, and the first closing opportunity at the
//! insertion depth decides the outcome. An ignored `}` there is revived in
//! place; any other closing event (a stray or synthetic closer of either
//! family) gets a synthetic `}` in front of it, because re-balancing would
//! close the new opener at exactly that point; a `}` that is already real
//! passes the closure along to whatever it used to match, so the scan
//! continues behind it. If the scan runs out of tokens, the closer is
//! appended at the end of the stream.

use crate::edit::state::EditState;
use crate::edit::transitions::{SourceTransition, TokenTransition};
use crate::lexer::tokens::{Origin, Token, TokenKind};

/// Where the closing edit for a newly inserted opener lands
enum ClosingSlot {
    /// Revive the ignored closer at this position
    Revive(usize),
    /// Insert a synthetic closer just before this position
    InsertBefore(usize),
    /// Append a synthetic closer after all current tokens
    AtEnd,
}

/// Compute the token transitions for a single-character source insertion
///
/// The returned batch lists the opener insertion first; indices follow the
/// sequential semantics of [`apply_transitions`]. Applying the batch to
/// `state.tokens()` yields the same sequence as re-lexing and re-balancing
/// the edited source, for edits in the supported class (see the module
/// docs). Inserting any character other than `{` returns an empty batch.
///
/// [`apply_transitions`]: crate::edit::transitions::apply_transitions
pub fn generate_transitions(state: &EditState, edit: &SourceTransition) -> Vec<TokenTransition> {
    if edit.character != '{' {
        return Vec::new();
    }

    let tokens = state.tokens();
    let at = token_index_for(tokens, edit.index);

    // Indices shift by one because the opener insertion is applied first
    let closer = match find_closing_slot(tokens, at) {
        ClosingSlot::Revive(position) => TokenTransition::ChangeOrigin(position + 1, Origin::Real),
        ClosingSlot::InsertBefore(position) => {
            TokenTransition::Insert(position + 1, Token::synthetic(TokenKind::RCurly))
        }
        ClosingSlot::AtEnd => {
            TokenTransition::Insert(tokens.len() + 1, Token::synthetic(TokenKind::RCurly))
        }
    };

    vec![
        TokenTransition::Insert(at, Token::real(TokenKind::LCurly)),
        closer,
    ]
}

/// Map a source byte offset to a position in the annotated token sequence
///
/// Every source character yields exactly one token, in source order, so the
/// mapping counts source-derived tokens. The returned position sits
/// immediately after the last counted token and before any synthetic tokens
/// that follow it: a new opener at that offset is processed before the
/// balancer would fabricate those closers.
fn token_index_for(tokens: &[Token], source_index: usize) -> usize {
    let mut remaining = source_index;
    for (position, token) in tokens.iter().enumerate() {
        if remaining == 0 {
            return position;
        }
        if !token.is_synthetic() {
            remaining -= 1;
        }
    }
    assert_eq!(remaining, 0, "source index {} is past the end", source_index);
    tokens.len()
}

/// Find the first closing opportunity at the insertion depth
///
/// Scans `tokens[at..]` with a relative depth counter: openers raise it,
/// closers matched further in lower it. The first closer arriving at depth
/// zero is the event that would close the new opener:
///
/// - an ignored `}` has no match and is free to be revived;
/// - an ignored `)`, or a synthetic closer of either family, marks a point
///   where re-balancing would force the new opener shut, so the synthetic
///   `}` belongs right in front of it;
/// - a real `}` at depth zero used to match an enclosing `{`; the new opener
///   takes that match over and hands the closure on, leaving every
///   annotation unchanged, so the scan keeps going.
fn find_closing_slot(tokens: &[Token], at: usize) -> ClosingSlot {
    let mut depth: usize = 0;

    for (position, token) in tokens.iter().enumerate().skip(at) {
        if token.kind.is_opener() {
            depth += 1;
            continue;
        }
        if depth > 0 {
            depth -= 1;
            continue;
        }
        match (token.origin, token.kind) {
            (Origin::Ignored, TokenKind::RCurly) => return ClosingSlot::Revive(position),
            (Origin::Real, TokenKind::RCurly) => continue,
            _ => return ClosingSlot::InsertBefore(position),
        }
    }

    ClosingSlot::AtEnd
}
