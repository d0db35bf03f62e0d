use crate::error::ConvertError;
use crate::text::TextRange;
use compact_str::CompactString;
use std::fmt;
use std::sync::Arc;

/// Conversion function turning a matched slice into a token value.
pub type ConvertFn<T> = Arc<dyn Fn(&Match<'_>) -> Result<T, ConvertError> + Send + Sync>;

/// Identifies one registration in a [`Lexer`](crate::Lexer).
///
/// Ids are handed out in registration order, so comparing two ids compares
/// their registration order. Registering the same descriptor twice yields two
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenTypeId(pub u32);

impl TokenTypeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A type of token: a name, a pattern, and a conversion function.
///
/// Token types are immutable once built and are shared with the lexer as
/// `Arc<TokenType<T>>`. Two token types with identical fields are still two
/// different registrations.
///
/// # Example
///
/// ```rust
/// use objlex::lexer::TokenType;
///
/// let uint = TokenType::new("uint", "[0-9]+", |m| Ok(m.as_str().parse::<u64>()?));
/// assert_eq!(uint.name(), "uint");
/// assert_eq!(uint.pattern(), "[0-9]+");
/// ```
pub struct TokenType<T> {
    name: CompactString,
    pattern: CompactString,
    convert: ConvertFn<T>,
}

impl<T> TokenType<T> {
    /// Create a token type.
    ///
    /// The pattern is not validated here: an invalid pattern is reported as
    /// [`LexError::MalformedPattern`](crate::LexError::MalformedPattern) the
    /// first time a lexer scans with it.
    #[must_use]
    pub fn new(
        name: impl Into<CompactString>,
        pattern: impl Into<CompactString>,
        convert: impl Fn(&Match<'_>) -> Result<T, ConvertError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            convert: Arc::new(convert),
        }
    }

    /// Create a token type whose conversion cannot fail.
    #[must_use]
    pub fn infallible(
        name: impl Into<CompactString>,
        pattern: impl Into<CompactString>,
        convert: impl Fn(&Match<'_>) -> T + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, pattern, move |m| Ok(convert(m)))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Run the conversion function on a match.
    ///
    /// # Errors
    ///
    /// Returns whatever error the conversion function returns.
    pub fn convert(&self, m: &Match<'_>) -> Result<T, ConvertError> {
        (self.convert)(m)
    }
}

impl<T> fmt::Debug for TokenType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenType")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// The text a token type matched, as seen by its conversion function.
#[derive(Debug, Clone, Copy)]
pub struct Match<'t> {
    token_type: &'t str,
    text: &'t str,
    range: TextRange,
}

impl<'t> Match<'t> {
    pub(crate) fn new(token_type: &'t str, source: &'t str, range: TextRange) -> Self {
        Self {
            token_type,
            text: &source[range],
            range,
        }
    }

    /// The matched slice.
    #[must_use]
    pub const fn as_str(&self) -> &'t str {
        self.text
    }

    /// Where the slice sits in the lexed text.
    #[must_use]
    pub const fn range(&self) -> TextRange {
        self.range
    }

    /// Name of the token type that matched.
    #[must_use]
    pub const fn token_type(&self) -> &'t str {
        self.token_type
    }
}
