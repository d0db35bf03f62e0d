//! # Unmatched Input Policies
//!
//! Pluggable strategies deciding what happens to text no token type covers.
//!
//! ## Overview
//!
//! After conflict resolution the lexer hands every gap, left to right, to its
//! [`UnmatchedPolicy`]. The default, [`AbortOnUnmatched`], fails the whole
//! `lex` call. Other strategies skip the gap or turn it into a token.
//!
//! ## Strategies
//!
//! - **Abort**: fail with [`LexError::UnmatchedInput`](crate::LexError::UnmatchedInput)
//! - **Skip**: drop the text and report it in the [`LexSummary`](crate::lexer::LexSummary)
//! - **Emit**: build a token value for the text with a client function
//!
//! Closures of type `Fn(&Unmatched<'_>) -> UnmatchedAction<T>` are policies too.

use crate::text::TextRange;

/// A gap handed to an [`UnmatchedPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unmatched<'t> {
    /// Where the gap is in the lexed text
    pub range: TextRange,
    /// The uncovered text
    pub text: &'t str,
}

impl<'t> Unmatched<'t> {
    pub(crate) fn new(source: &'t str, range: TextRange) -> Self {
        Self {
            range,
            text: &source[range],
        }
    }
}

/// What to do with a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmatchedAction<T> {
    /// Fail the `lex` call
    Abort,
    /// Drop the text and carry on
    Skip,
    /// Emit a token with this value covering the text
    Emit(T),
}

/// Trait for unmatched input strategies
pub trait UnmatchedPolicy<T>: Send + Sync {
    /// Decide what to do with one gap
    fn handle(&self, unmatched: &Unmatched<'_>) -> UnmatchedAction<T>;

    /// Name of this policy (for logging)
    fn name(&self) -> &'static str;
}

/// Fail on the first gap. This is the default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnUnmatched;

impl<T> UnmatchedPolicy<T> for AbortOnUnmatched {
    fn handle(&self, _unmatched: &Unmatched<'_>) -> UnmatchedAction<T> {
        UnmatchedAction::Abort
    }

    fn name(&self) -> &'static str {
        "abort"
    }
}

/// Skip every gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipUnmatched;

impl<T> UnmatchedPolicy<T> for SkipUnmatched {
    fn handle(&self, _unmatched: &Unmatched<'_>) -> UnmatchedAction<T> {
        UnmatchedAction::Skip
    }

    fn name(&self) -> &'static str {
        "skip"
    }
}

/// Turn every gap into a token whose value `make` builds from the gap text.
pub struct EmitUnmatched<F> {
    make: F,
}

impl<F> EmitUnmatched<F> {
    #[must_use]
    pub const fn new(make: F) -> Self {
        Self { make }
    }
}

impl<T, F> UnmatchedPolicy<T> for EmitUnmatched<F>
where
    F: Fn(&str) -> T + Send + Sync,
{
    fn handle(&self, unmatched: &Unmatched<'_>) -> UnmatchedAction<T> {
        UnmatchedAction::Emit((self.make)(unmatched.text))
    }

    fn name(&self) -> &'static str {
        "emit"
    }
}

impl<T, F> UnmatchedPolicy<T> for F
where
    F: Fn(&Unmatched<'_>) -> UnmatchedAction<T> + Send + Sync,
{
    fn handle(&self, unmatched: &Unmatched<'_>) -> UnmatchedAction<T> {
        self(unmatched)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}
