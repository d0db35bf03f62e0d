//! Snapshot tests for rendered lexer output
//!
//! Run with `UPDATE_SNAPSHOTS=1` to rewrite the files under `tests/snapshots`.

use objlex::lexer::SkipUnmatched;
use objlex::testing::SnapshotTester;
use objlex::{Lexer, LexerBuilder};

fn tester() -> SnapshotTester {
    SnapshotTester::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/snapshots"))
}

fn number_lexer() -> Lexer<()> {
    LexerBuilder::new()
        .infallible_token("whitespace", "[ \t\n]+", |_| ())
        .infallible_token("uint", "[0-9]+", |_| ())
        .infallible_token("int", "-?[0-9]+", |_| ())
        .build()
}

#[test]
fn test_numbers_tokens_snapshot() {
    let mut lexer = number_lexer();
    lexer.lex("12 -24 65 -2 44 -67").unwrap();
    tester().assert_tokens_snapshot("numbers_tokens", &lexer);
}

#[test]
fn test_candidates_with_gaps_snapshot() {
    let lexer = number_lexer();
    tester().assert_candidates_snapshot("candidates_with_gaps", &lexer, "7 x -8\ty");
}

#[test]
fn test_unmatched_error_snapshot() {
    let mut lexer: Lexer<()> = LexerBuilder::new()
        .infallible_token("uint", "[0-9]+", |_| ())
        .infallible_token("int", "-?[0-9]+", |_| ())
        .build();
    let err = lexer.lex("12 -24").unwrap_err();
    tester().assert_error_snapshot("unmatched_error", &err);
}

#[test]
fn test_skipped_gaps_snapshot() {
    let mut lexer: Lexer<()> = LexerBuilder::new()
        .infallible_token("uint", "[0-9]+", |_| ())
        .policy(SkipUnmatched)
        .build();
    lexer.lex("1, 2, 3").unwrap();
    tester().assert_tokens_snapshot("skipped_gaps", &lexer);
}
