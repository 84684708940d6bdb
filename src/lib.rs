//! # brak
//!
//! An incremental bracket-balancing tokenizer.
//!
//! The lexer turns a source string over `(){}` into raw tokens; the balancer
//! annotates them so the sequence is always well-formed: matched brackets
//! stay real, missing closers are fabricated as synthetic tokens, and stray
//! closers are marked ignored but kept in place. The edit module replays a
//! single `{` insertion as a minimal token transition batch equivalent to
//! re-lexing and re-balancing the whole source.

pub mod balancer;
pub mod edit;
pub mod lexer;

pub use balancer::balance;
pub use edit::{
    apply_transitions, generate_transitions, EditState, SourceTransition, TokenTransition,
};
pub use lexer::{
    balanced_source, detokenize, tokenize, BracketKind, LexError, Origin, Token, TokenKind,
};

/// Lex and balance a source string in one step
///
/// This is the full-recompute path and the oracle the incremental edit path
/// is verified against.
pub fn annotate(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(balance(tokenize(source)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_open_paren() {
        let tokens = annotate("(").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::real(TokenKind::LParen),
                Token::synthetic(TokenKind::RParen),
            ]
        );
    }

    #[test]
    fn test_annotate_propagates_lex_errors() {
        assert!(annotate("( )").is_err());
    }
}
