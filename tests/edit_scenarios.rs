//! Scenario tests for the incremental edit path
//!
//! Every case inserts `{` at a given offset and checks the resulting state
//! against a full rebuild from the edited source. The transition-level
//! expectations for the canonical cases are covered in the generator's unit
//! tests; here the concern is end-to-end equivalence and state consistency.

use rstest::rstest;

use brak::{
    annotate, EditState, Origin, SourceTransition, Token, TokenKind, TokenTransition,
};

fn insert_char(source: &str, index: usize) -> String {
    let mut edited = source.to_string();
    edited.insert(index, '{');
    edited
}

#[rstest]
#[case::into_empty("", 0)]
#[case::revive_stray_closer("}", 0)]
#[case::closer_behind_insertion("}", 1)]
#[case::before_matched_pair("{}", 0)]
#[case::between_pair("{}", 1)]
#[case::after_pair("{}", 2)]
#[case::cascade_to_stray("{}}", 0)]
#[case::deep_strays("}}}", 1)]
#[case::inside_open_paren("(", 1)]
#[case::before_open_paren("(", 0)]
#[case::after_stray_paren(")", 1)]
#[case::open_paren_after_stray("}(", 0)]
#[case::end_of_mixed("}(", 2)]
#[case::before_trailing_closers("({", 2)]
#[case::capture_stray_curly("(}", 0)]
#[case::end_of_nested("(())", 4)]
#[case::curly_run("{{}}{", 3)]
fn test_edit_matches_full_rebuild(#[case] source: &str, #[case] index: usize) {
    let state = EditState::from_source(source).unwrap();
    let next = state.edit(&SourceTransition {
        index,
        character: '{',
    });

    let edited = insert_char(source, index);
    assert_eq!(next, EditState::from_source(&edited).unwrap());
}

#[test]
fn test_revival_transitions_for_stray_closer() {
    // The existing stray } is revived rather than duplicated
    let state = EditState::from_source("}").unwrap();
    let transitions = brak::generate_transitions(
        &state,
        &SourceTransition {
            index: 0,
            character: '{',
        },
    );
    assert_eq!(
        transitions,
        vec![
            TokenTransition::Insert(0, Token::real(TokenKind::LCurly)),
            TokenTransition::ChangeOrigin(1, Origin::Real),
        ]
    );
}

#[test]
fn test_append_transitions_for_empty_source() {
    let state = EditState::from_source("").unwrap();
    let transitions = brak::generate_transitions(
        &state,
        &SourceTransition {
            index: 0,
            character: '{',
        },
    );
    assert_eq!(
        transitions,
        vec![
            TokenTransition::Insert(0, Token::real(TokenKind::LCurly)),
            TokenTransition::Insert(1, Token::synthetic(TokenKind::RCurly)),
        ]
    );
}

#[test]
fn test_edits_chain() {
    // Two consecutive insertions stay equivalent to a full rebuild
    let state = EditState::from_source("}}").unwrap();
    let once = state.edit(&SourceTransition {
        index: 0,
        character: '{',
    });
    let twice = once.edit(&SourceTransition {
        index: 1,
        character: '{',
    });
    assert_eq!(twice.source(), "{{}}");
    assert_eq!(twice, EditState::from_source("{{}}").unwrap());
}

#[test]
fn test_edited_state_stays_consistent() {
    // After an edit, tokens and source still satisfy the pairing invariant
    let state = EditState::from_source("({").unwrap();
    let next = state.edit(&SourceTransition {
        index: 2,
        character: '{',
    });
    assert_eq!(brak::detokenize(next.tokens()), next.source());
    assert_eq!(next.tokens(), annotate(next.source()).unwrap().as_slice());
}
