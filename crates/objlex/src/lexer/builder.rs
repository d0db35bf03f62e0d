use crate::error::ConvertError;
use crate::lexer::{AbortOnUnmatched, Lexer, LexerConfig, Match, TokenType, UnmatchedPolicy};
use smallvec::SmallVec;
use std::sync::Arc;

/// Fluent construction of a [`Lexer`].
///
/// Token types are registered in the order they are added, which decides
/// equal-length ties.
///
/// ```rust
/// use objlex::lexer::{LexerBuilder, SkipUnmatched};
///
/// #[derive(Debug, PartialEq)]
/// enum Tok {
///     Ident,
///     Number(u64),
/// }
///
/// let mut lexer = LexerBuilder::new()
///     .infallible_token("ident", "[a-z]+", |_| Tok::Ident)
///     .token("number", "[0-9]+", |m| Ok(Tok::Number(m.as_str().parse()?)))
///     .policy(SkipUnmatched)
///     .build();
///
/// let summary = lexer.lex("x 42")?;
/// assert_eq!(summary.skipped.len(), 1);
/// assert_eq!(lexer.tokens()[1].value, Tok::Number(42));
/// # Ok::<(), objlex::LexError>(())
/// ```
pub struct LexerBuilder<T> {
    token_types: SmallVec<[Arc<TokenType<T>>; 16]>,
    config: LexerConfig,
    policy: Box<dyn UnmatchedPolicy<T>>,
}

impl<T> Default for LexerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LexerBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            token_types: SmallVec::new(),
            config: LexerConfig::default(),
            policy: Box::new(AbortOnUnmatched),
        }
    }

    #[must_use]
    pub fn token_type(mut self, token_type: Arc<TokenType<T>>) -> Self {
        self.token_types.push(token_type);
        self
    }

    #[must_use]
    pub fn token(
        self,
        name: &str,
        pattern: &str,
        convert: impl Fn(&Match<'_>) -> Result<T, ConvertError> + Send + Sync + 'static,
    ) -> Self {
        self.token_type(Arc::new(TokenType::new(name, pattern, convert)))
    }

    #[must_use]
    pub fn infallible_token(
        self,
        name: &str,
        pattern: &str,
        convert: impl Fn(&Match<'_>) -> T + Send + Sync + 'static,
    ) -> Self {
        self.token_type(Arc::new(TokenType::infallible(name, pattern, convert)))
    }

    #[must_use]
    pub fn config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: impl UnmatchedPolicy<T> + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Build the lexer. Patterns are compiled on the first scan.
    #[must_use]
    pub fn build(self) -> Lexer<T> {
        let mut lexer = Lexer::with_config(self.config);
        lexer.set_boxed_policy(self.policy);
        for token_type in self.token_types {
            lexer.register_token_type(token_type);
        }
        lexer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenTypeId;

    #[test]
    fn test_registration_order_preserved() {
        let lexer = LexerBuilder::<()>::new()
            .infallible_token("a", "a", |_| ())
            .infallible_token("b", "b", |_| ())
            .build();

        let names: Vec<(TokenTypeId, &str)> =
            lexer.token_types().map(|(id, t)| (id, t.name())).collect();
        assert_eq!(names, vec![(TokenTypeId(0), "a"), (TokenTypeId(1), "b")]);
    }

    #[test]
    fn test_config_and_policy_carried_over() {
        let config = LexerConfig {
            case_insensitive: true,
            ..LexerConfig::default()
        };
        let mut lexer = LexerBuilder::new()
            .infallible_token("kw", "select", |m| m.as_str().to_owned())
            .config(config.clone())
            .policy(crate::lexer::SkipUnmatched)
            .build();

        assert_eq!(lexer.config(), &config);
        assert_eq!(lexer.policy_name(), "skip");
        lexer.lex("SELECT !").unwrap();
        assert_eq!(lexer.tokens()[0].value, "SELECT");
    }
}
