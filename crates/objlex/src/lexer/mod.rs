//! # Lexer Module
//!
//! Regex-driven tokenization with client-defined token types.
//!
//! ## Overview
//!
//! A [`Lexer`] holds a list of [`TokenType`]s, each a name, a regular
//! expression and a conversion function. Lexing a text runs in three steps:
//!
//! 1. **Find**: every pattern is run over the whole text, producing
//!    [`Candidate`]s
//! 2. **Resolve**: candidates are sorted by start and swept once; of two
//!    overlapping candidates the longer survives, and on equal length the
//!    one registered first
//! 3. **Convert**: each survivor's conversion function turns its match into
//!    a token value
//!
//! Text covered by no survivor is unmatched input. What happens to it is up
//! to the lexer's [`UnmatchedPolicy`]; by default the call fails.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use objlex::lexer::{Lexer, TokenType};
//!
//! #[derive(Debug, PartialEq)]
//! enum Num {
//!     Whitespace,
//!     Uint(u64),
//!     Int(i64),
//! }
//!
//! let mut lexer = Lexer::new();
//! lexer.register_token_type(Arc::new(TokenType::infallible("whitespace", "[ \t\n]+", |_| {
//!     Num::Whitespace
//! })));
//! lexer.register_token_type(Arc::new(TokenType::new("uint", "[0-9]+", |m| {
//!     Ok(Num::Uint(m.as_str().parse()?))
//! })));
//! lexer.register_token_type(Arc::new(TokenType::new("int", "-?[0-9]+", |m| {
//!     Ok(Num::Int(m.as_str().parse()?))
//! })));
//!
//! lexer.lex("12 -24 65")?;
//! let values: Vec<&Num> = lexer.tokens().iter().map(|t| &t.value).collect();
//! assert_eq!(
//!     values,
//!     [&Num::Uint(12), &Num::Whitespace, &Num::Int(-24), &Num::Whitespace, &Num::Uint(65)]
//! );
//! # Ok::<(), objlex::LexError>(())
//! ```
//!
//! ## Error Handling
//!
//! `lex` returns [`LexError`](crate::LexError) for:
//!
//! - Unmatched input the policy refuses
//! - A failing conversion function
//! - A pattern that does not compile
//!
//! A failed call leaves the lexer exactly as it was.

pub mod builder;
pub mod candidate;
pub mod config;
pub mod engine;
pub mod policy;
mod pretty;
pub mod resolve;
pub mod source;
pub mod stream;
pub mod token;
pub mod token_type;

pub use builder::LexerBuilder;
pub use candidate::Candidate;
pub use config::LexerConfig;
pub use engine::{LexSummary, Lexer, UNMATCHED_NAME};
pub use policy::{
    AbortOnUnmatched, EmitUnmatched, SkipUnmatched, Unmatched, UnmatchedAction, UnmatchedPolicy,
};
pub use resolve::Segment;
pub use source::{SourceId, SourceStore};
pub use stream::TokenQueue;
pub use token::Token;
pub use token_type::{ConvertFn, Match, TokenType, TokenTypeId};
