use regex::{Regex, RegexBuilder};

/// Configuration options for a [`Lexer`](crate::Lexer).
///
/// The flags are applied when each registered pattern is compiled, which
/// happens the first time the pattern is used.
///
/// # Example
///
/// ```rust
/// use objlex::lexer::LexerConfig;
///
/// let config = LexerConfig {
///     case_insensitive: true,
///     ..LexerConfig::default()
/// };
/// assert!(!config.multi_line);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct LexerConfig {
    /// Match letters regardless of case
    pub case_insensitive: bool,

    /// Make `^` and `$` match at line boundaries
    pub multi_line: bool,

    /// Let `.` match `\n`
    pub dot_matches_new_line: bool,

    /// Size limit for a compiled pattern, in bytes (`None` keeps the engine default)
    pub size_limit: Option<usize>,
}

impl LexerConfig {
    pub(crate) fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder.build()
    }
}
