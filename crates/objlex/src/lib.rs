//! # Objlex
//!
//! A regex-driven lexer whose tokens carry client-defined values.
//!
//! ## Overview
//!
//! Clients describe each kind of token with a [`TokenType`]: a name, a
//! regular expression, and a function converting a match into a value of the
//! client's token type `T`. A [`Lexer`] runs every pattern over the input and
//! resolves overlapping matches:
//!
//! - **Longest match wins**: of two overlapping candidates the longer survives
//! - **Registration order breaks ties**: on equal length, the first
//!   registered token type wins
//! - **Unmatched input is explicit**: text no token covers fails the call,
//!   unless an [`UnmatchedPolicy`](lexer::UnmatchedPolicy) says otherwise
//!
//! Tokens accumulate across calls and are consumed in order through a
//! [`TokenQueue`](lexer::TokenQueue).
//!
//! ## Quick Start
//!
//! ```rust
//! use objlex::LexerBuilder;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Tok {
//!     Space,
//!     Uint(u64),
//!     Int(i64),
//! }
//!
//! let mut lexer = LexerBuilder::new()
//!     .infallible_token("whitespace", "[ \t\n]+", |_| Tok::Space)
//!     .token("uint", "[0-9]+", |m| Ok(Tok::Uint(m.as_str().parse()?)))
//!     .token("int", "-?[0-9]+", |m| Ok(Tok::Int(m.as_str().parse()?)))
//!     .build();
//!
//! lexer.lex("12 -24")?;
//! assert_eq!(lexer.tokens_string(), "uint token: \"12\"\nwhitespace token: \" \"\nint token: \"-24\"\n");
//!
//! let mut queue = lexer.queue();
//! assert_eq!(queue.peek_head().map(|t| t.value.clone()), Some(Tok::Uint(12)));
//! queue.consume_head();
//! assert_eq!(queue.consume_head().map(|t| t.value.clone()), Some(Tok::Int(-24)));
//! # Ok::<(), objlex::LexError>(())
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] - Token types, candidate resolution and the lexer itself
//! - [`text`] - Byte offsets and ranges
//! - [`error`] - Error types and diagnostics
//! - [`testing`] - Snapshot helpers for tests

pub mod error;
pub mod lexer;
pub mod testing;
pub mod text;

// Re-export commonly used types
pub use error::{ConvertError, LexError};
pub use lexer::{
    Candidate, LexSummary, Lexer, LexerBuilder, LexerConfig, Match, SourceId, Token, TokenQueue,
    TokenType, TokenTypeId,
};
pub use text::{TextRange, TextSize};
