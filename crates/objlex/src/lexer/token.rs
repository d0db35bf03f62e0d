use crate::lexer::{SourceId, TokenTypeId};
use crate::text::TextRange;

/// A token produced by the lexer.
///
/// The value is whatever the token type's conversion function returned, so a
/// lexer for a closed set of token kinds usually uses an enum for `T`, and one
/// fed by plugins a boxed trait object. The token does not hold its text;
/// it points at the lexer's source store.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use objlex::lexer::{Lexer, TokenType};
///
/// let mut lexer = Lexer::new();
/// let uint = lexer.register_token_type(Arc::new(TokenType::new("uint", "[0-9]+", |m| {
///     Ok(m.as_str().parse::<u64>()?)
/// })));
///
/// lexer.lex("42")?;
/// let token = &lexer.tokens()[0];
/// assert_eq!(token.token_type, Some(uint));
/// assert_eq!(token.value, 42);
/// assert_eq!(lexer.lexeme(token), Some("42"));
/// # Ok::<(), objlex::LexError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token<T> {
    /// The registration that produced this token, or `None` for a token an
    /// unmatched-input policy emitted for a gap
    pub token_type: Option<TokenTypeId>,
    /// The text this token was lexed from
    pub source: SourceId,
    /// The byte range within that text
    pub range: TextRange,
    /// The converted value
    pub value: T,
}

impl<T> Token<T> {
    #[must_use]
    pub const fn new(
        token_type: Option<TokenTypeId>,
        source: SourceId,
        range: TextRange,
        value: T,
    ) -> Self {
        Self {
            token_type,
            source,
            range,
            value,
        }
    }

    /// Whether this token covers text no registered pattern matched.
    #[must_use]
    pub const fn is_unmatched(&self) -> bool {
        self.token_type.is_none()
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}
