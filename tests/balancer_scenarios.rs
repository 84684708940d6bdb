//! Scenario tests for the balancer
//!
//! Each case pairs a source string with the expected annotated sequence,
//! written compactly as space-separated `KIND:ORIGIN` entries in source
//! order.

use rstest::rstest;

use brak::{annotate, Token};

/// Render a sequence as space-separated `KIND:ORIGIN` entries
fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}:{}", t.kind, t.origin))
        .collect::<Vec<_>>()
        .join(" ")
}

#[rstest]
#[case::empty("", "")]
#[case::matched_pair("()", "LPAREN:REAL RPAREN:REAL")]
#[case::open_paren("(", "LPAREN:REAL RPAREN:SYNTHETIC")]
#[case::stray_closer(")", "RPAREN:IGNORED")]
#[case::open_curly("{", "LCURLY:REAL RCURLY:SYNTHETIC")]
#[case::stray_curly("}", "RCURLY:IGNORED")]
#[case::nested("({})", "LPAREN:REAL LCURLY:REAL RCURLY:REAL RPAREN:REAL")]
#[case::unwind("(}", "LPAREN:REAL RPAREN:SYNTHETIC RCURLY:IGNORED")]
#[case::unwind_then_match("({)", "LPAREN:REAL LCURLY:REAL RCURLY:SYNTHETIC RPAREN:REAL")]
#[case::trailing_closers_innermost_first(
    "({",
    "LPAREN:REAL LCURLY:REAL RCURLY:SYNTHETIC RPAREN:SYNTHETIC"
)]
#[case::double_open("((", "LPAREN:REAL LPAREN:REAL RPAREN:SYNTHETIC RPAREN:SYNTHETIC")]
#[case::closer_then_opener(")(", "RPAREN:IGNORED LPAREN:REAL RPAREN:SYNTHETIC")]
#[case::consecutive_mismatches(
    "{{(}",
    "LCURLY:REAL LCURLY:REAL LPAREN:REAL RPAREN:SYNTHETIC RCURLY:REAL RCURLY:SYNTHETIC"
)]
#[case::mixed_strays(")}", "RPAREN:IGNORED RCURLY:IGNORED")]
fn test_balancing_scenarios(#[case] source: &str, #[case] expected: &str) {
    let tokens = annotate(source).unwrap();
    assert_eq!(render(&tokens), expected);
}

#[rstest]
#[case("(()(", "(()())")]
#[case("({)", "({})")]
#[case("{{", "{{}}")]
#[case(")()", "()")]
fn test_mismatched_source_balances_like_its_fixed_form(
    #[case] broken: &str,
    #[case] fixed: &str,
) {
    // Stripping ignored tokens and comparing kinds, a broken source
    // balances to the same structure as its repaired form
    let strip = |source: &str| -> Vec<brak::TokenKind> {
        annotate(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.origin != brak::Origin::Ignored)
            .map(|t| t.kind)
            .collect()
    };
    assert_eq!(strip(broken), strip(fixed));
}

#[test]
fn test_annotated_sequence_snapshot() {
    let tokens = annotate("(}").unwrap();
    insta::assert_debug_snapshot!(tokens, @r###"
    [
        Token {
            source: "(",
            kind: LParen,
            origin: Real,
        },
        Token {
            source: "",
            kind: RParen,
            origin: Synthetic,
        },
        Token {
            source: "}",
            kind: RCurly,
            origin: Ignored,
        },
    ]
    "###);
}
