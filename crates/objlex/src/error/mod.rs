//! # Error Types
//!
//! Errors produced while lexing.
//!
//! ## Overview
//!
//! [`LexError`] is returned by [`Lexer::lex`](crate::Lexer::lex) and by the
//! diagnostic helpers. A failed call commits nothing: tokens and source texts
//! from earlier successful calls are left as they were.
//!
//! - [`LexError::UnmatchedInput`]: part of the text is covered by no token
//! - [`LexError::Conversion`]: a token type's conversion function failed
//! - [`LexError::MalformedPattern`]: a registered pattern does not compile
//! - [`LexError::SourceTooLarge`]: the text does not fit 32-bit offsets
//!
//! ## Diagnostics Support
//!
//! When the `diagnostics` feature is enabled, errors integrate with [`miette`]
//! and label the offending span.

use crate::text::TextRange;
use compact_str::CompactString;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Error returned by a token type's conversion function.
///
/// Any error type can be boxed into it; the lexer hands it back to the caller
/// untouched as the source of [`LexError::Conversion`].
pub type ConvertError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum LexError {
    #[error("unmatched input \"{text}\" at position {}", .range.start())]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::unmatched_input)))]
    UnmatchedInput {
        #[cfg_attr(feature = "diagnostics", label("no token type matches this text"))]
        range: TextRange,
        text: CompactString,
    },

    #[error("failed to convert {token_type} token at {range}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::conversion)))]
    Conversion {
        token_type: CompactString,
        #[cfg_attr(feature = "diagnostics", label("conversion failed here"))]
        range: TextRange,
        #[source]
        source: ConvertError,
    },

    #[error("invalid pattern for token type {token_type}: {pattern}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::malformed_pattern)))]
    MalformedPattern {
        token_type: CompactString,
        pattern: CompactString,
        #[source]
        source: regex::Error,
    },

    #[error("source text of {len} bytes exceeds the 4 GiB offset limit")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::source_too_large)))]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Create an unmatched input error for `range` of `text`.
    #[must_use]
    pub fn unmatched(text: &str, range: TextRange) -> Self {
        Self::UnmatchedInput {
            range,
            text: CompactString::from(&text[range]),
        }
    }

    /// Get the span (location) of this error, if it has one
    #[must_use]
    pub const fn span(&self) -> Option<TextRange> {
        match self {
            Self::UnmatchedInput { range, .. } | Self::Conversion { range, .. } => Some(*range),
            Self::MalformedPattern { .. } | Self::SourceTooLarge { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_unmatched_input(&self) -> bool {
        matches!(self, Self::UnmatchedInput { .. })
    }
}
