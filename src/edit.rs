//! Incremental editing of annotated token sequences
//!
//! This module implements the incremental path: instead of re-lexing and
//! re-balancing the whole source after a single-character insertion, a small
//! ordered batch of token transitions is generated and replayed against the
//! existing sequence. The full-recompute path stays available as the oracle
//! the incremental path is checked against.

pub mod generator;
pub mod state;
pub mod transitions;

pub use generator::generate_transitions;
pub use state::EditState;
pub use transitions::{apply_transitions, SourceTransition, TokenTransition};
