#![no_main]
use libfuzzer_sys::fuzz_target;
use objlex::lexer::{EmitUnmatched, LexerBuilder};
use objlex::{Lexer, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum FuzzToken {
    Whitespace,
    Number,
    Word,
    Op,
    Unknown,
}

fn lexer() -> Lexer<FuzzToken> {
    LexerBuilder::new()
        .infallible_token("whitespace", r"\s+", |_| FuzzToken::Whitespace)
        .infallible_token("number", "-?[0-9]+(\\.[0-9]+)?", |_| FuzzToken::Number)
        .infallible_token("word", r"\w+", |_| FuzzToken::Word)
        .infallible_token("op", "[-+*/=<>!]=?", |_| FuzzToken::Op)
        .infallible_token("empty", "x*", |_| FuzzToken::Word)
        .policy(EmitUnmatched::new(|_: &str| FuzzToken::Unknown))
        .build()
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut lexer = lexer();
    let summary = lexer.lex(text).unwrap();
    assert!(summary.skipped.is_empty());

    // Emitted gaps plus survivors tile the text exactly.
    let mut cursor = TextSize::zero();
    for token in lexer.tokens() {
        assert_eq!(token.range.start(), cursor);
        assert!(!token.range.is_empty());
        cursor = token.range.end();
    }
    assert_eq!(cursor.to_usize(), text.len());

    let rebuilt: String = lexer.tokens().iter().filter_map(|t| lexer.lexeme(t)).collect();
    assert_eq!(rebuilt, text);
});
