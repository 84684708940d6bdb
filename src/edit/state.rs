//! Edit state: the pairing of source text and annotated tokens
//!
//! `EditState` is the only stateful entity in the crate. The source text and
//! its annotated token sequence are always produced together, either from a
//! full lex-and-balance pass or from a validated source transition, so the
//! two can never desynchronize.
use crate::balancer::balance;
use crate::edit::generator::generate_transitions;
use crate::edit::transitions::{apply_transitions, SourceTransition};
use crate::lexer::{tokenize, LexError, Token};

/// Current source text together with its annotated token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    source: String,
    tokens: Vec<Token>,
}

impl EditState {
    /// Build the state for a source string by lexing and balancing it
    pub fn from_source(source: &str) -> Result<EditState, LexError> {
        let tokens = balance(tokenize(source)?);
        Ok(EditState {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Apply a single-character insertion, producing the next state
    ///
    /// Inserts the character into the source text and replays the generated
    /// token transitions against the token sequence. For edits in the
    /// supported class the result is identical to rebuilding the state from
    /// the new source. Panics if the insertion index is past the end of the
    /// source (caller bug, same class as a bad transition index).
    pub fn edit(&self, transition: &SourceTransition) -> EditState {
        let transitions = generate_transitions(self, transition);
        let tokens = apply_transitions(self.tokens.clone(), &transitions);
        let mut source = self.source.clone();
        source.insert(transition.index, transition.character);
        EditState { source, tokens }
    }
}
