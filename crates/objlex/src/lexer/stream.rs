//! # Token Queue
//!
//! FIFO consumption of the tokens a [`Lexer`] produced.
//!
//! ## Overview
//!
//! The lexer appends tokens on every successful `lex` call. A downstream
//! parser reads them through a [`TokenQueue`], which only ever exposes the
//! head: peek at it, or drop it and look at the next one.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use objlex::lexer::{Lexer, TokenType};
//!
//! let mut lexer = Lexer::new();
//! lexer.register_token_type(Arc::new(TokenType::infallible("word", "[a-z]+", |_| ())));
//! lexer.register_token_type(Arc::new(TokenType::infallible("space", " +", |_| ())));
//! lexer.lex("let x")?;
//!
//! let mut queue = lexer.queue();
//! let head = queue.peek_head().unwrap();
//! assert_eq!(queue.lexeme(head), Some("let"));
//!
//! queue.consume_head();
//! let next = queue.peek_head().unwrap();
//! assert_eq!(queue.lexeme(next), Some(" "));
//! # Ok::<(), objlex::LexError>(())
//! ```

use crate::lexer::{Lexer, Token};

/// A FIFO view over a lexer's produced tokens.
///
/// The queue borrows the lexer mutably, so no `lex` call can run while it is
/// alive. Consumed tokens are gone for good; their source texts stay.
pub struct TokenQueue<'a, T> {
    lexer: &'a mut Lexer<T>,
}

impl<'a, T> TokenQueue<'a, T> {
    pub(crate) const fn new(lexer: &'a mut Lexer<T>) -> Self {
        Self { lexer }
    }

    /// The oldest unconsumed token.
    #[must_use]
    pub fn peek_head(&self) -> Option<&Token<T>> {
        self.lexer.tokens.front()
    }

    /// Drop the head and return the new head.
    ///
    /// Returns `None` once the queue is empty; consuming from an empty queue
    /// does nothing.
    pub fn consume_head(&mut self) -> Option<&Token<T>> {
        self.lexer.tokens.pop_front();
        self.lexer.tokens.front()
    }

    /// The text of a token from this queue.
    #[must_use]
    pub fn lexeme(&self, token: &Token<T>) -> Option<&str> {
        self.lexer.lexeme(token)
    }

    /// Name of the token type that produced `token`.
    #[must_use]
    pub fn token_type_name(&self, token: &Token<T>) -> &str {
        self.lexer.token_type_name(token)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenType};
    use std::sync::Arc;

    fn digit_lexer() -> Lexer<char> {
        let mut lexer = Lexer::new();
        lexer.register_token_type(Arc::new(TokenType::infallible("digit", "[0-9]", |m| {
            m.as_str().chars().next().unwrap_or('?')
        })));
        lexer
    }

    #[test]
    fn test_consume_in_order() {
        let mut lexer = digit_lexer();
        lexer.lex("123").unwrap();

        let mut queue = lexer.queue();
        assert_eq!(queue.peek_head().map(|t| t.value), Some('1'));
        assert_eq!(queue.consume_head().map(|t| t.value), Some('2'));
        assert_eq!(queue.consume_head().map(|t| t.value), Some('3'));
        assert_eq!(queue.consume_head().map(|t| t.value), None);
        assert!(queue.peek_head().is_none());
    }

    #[test]
    fn test_consume_empty_is_noop() {
        let mut lexer = digit_lexer();
        let mut queue = lexer.queue();
        assert!(queue.consume_head().is_none());
        assert!(queue.consume_head().is_none());
    }

    #[test]
    fn test_tokens_from_later_calls_queue_behind() {
        let mut lexer = digit_lexer();
        lexer.lex("1").unwrap();
        lexer.queue().consume_head();
        lexer.lex("2").unwrap();
        lexer.lex("3").unwrap();

        let mut queue = lexer.queue();
        let head = queue.peek_head().unwrap();
        assert_eq!(queue.lexeme(head), Some("2"));
        queue.consume_head();
        let next = queue.peek_head().unwrap();
        assert_eq!(queue.lexeme(next), Some("3"));
        assert_eq!(queue.token_type_name(next), "digit");
    }
}
