use super::policy::{AbortOnUnmatched, Unmatched, UnmatchedAction, UnmatchedPolicy};
use super::resolve::{self, Segment};
use super::stream::TokenQueue;
use crate::error::LexError;
use crate::lexer::{
    Candidate, LexerConfig, Match, SourceId, SourceStore, Token, TokenType, TokenTypeId,
};
use crate::text::{TextRange, TextSize};
use compact_str::CompactString;
use regex::Regex;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// One registered token type and its lazily compiled pattern.
struct Registration<T> {
    id: TokenTypeId,
    token_type: Arc<TokenType<T>>,
    regex: OnceLock<Regex>,
}

impl<T> Registration<T> {
    fn regex(&self, config: &LexerConfig) -> Result<&Regex, LexError> {
        if let Some(regex) = self.regex.get() {
            return Ok(regex);
        }
        let compiled =
            config
                .compile(self.token_type.pattern())
                .map_err(|source| LexError::MalformedPattern {
                    token_type: CompactString::from(self.token_type.name()),
                    pattern: CompactString::from(self.token_type.pattern()),
                    source,
                })?;
        Ok(self.regex.get_or_init(|| compiled))
    }
}

/// What one successful [`Lexer::lex`] call added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexSummary {
    /// Id of the stored text
    pub source: SourceId,
    /// Number of tokens appended
    pub tokens: usize,
    /// Gaps the unmatched policy skipped
    pub skipped: SmallVec<[TextRange; 4]>,
}

/// A lexer over a set of registered token types.
///
/// `lex` finds every match of every registered pattern, keeps the longest of
/// any overlapping matches (the first registered on equal length), and
/// converts the survivors into tokens in source order. Text no survivor
/// covers is handed to the lexer's [`UnmatchedPolicy`], which by default
/// fails the call.
///
/// The lexer owns every text it has produced tokens for, so tokens only carry
/// a [`SourceId`] and a range. It is single-threaded: share it across threads
/// only behind external synchronization.
pub struct Lexer<T> {
    registrations: Vec<Registration<T>>,
    pub(crate) sources: SourceStore,
    pub(crate) tokens: VecDeque<Token<T>>,
    config: LexerConfig,
    policy: Box<dyn UnmatchedPolicy<T>>,
}

impl<T> Default for Lexer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lexer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            registrations: Vec::new(),
            sources: SourceStore::new(),
            tokens: VecDeque::new(),
            config,
            policy: Box::new(AbortOnUnmatched),
        }
    }

    /// Replace the unmatched input policy.
    pub fn set_policy(&mut self, policy: impl UnmatchedPolicy<T> + 'static) {
        self.set_boxed_policy(Box::new(policy));
    }

    pub(crate) fn set_boxed_policy(&mut self, policy: Box<dyn UnmatchedPolicy<T>>) {
        self.policy = policy;
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl UnmatchedPolicy<T> + 'static) -> Self {
        self.set_policy(policy);
        self
    }

    /// Register a token type.
    ///
    /// Registration order matters: when two token types match the same text
    /// with the same length, the one registered first wins. The pattern is
    /// not compiled until the first scan. Registering the same token type
    /// twice is allowed and scans it twice.
    pub fn register_token_type(&mut self, token_type: Arc<TokenType<T>>) -> TokenTypeId {
        // Registration counts are extremely unlikely to exceed u32::MAX
        let id = TokenTypeId(u32::try_from(self.registrations.len()).unwrap_or(u32::MAX));
        tracing::trace!(?id, name = token_type.name(), "registered token type");
        self.registrations.push(Registration {
            id,
            token_type,
            regex: OnceLock::new(),
        });
        id
    }

    /// Find every match of every registered pattern in `text`.
    ///
    /// Candidates come grouped by token type in registration order, and left
    /// to right within one token type. Empty matches are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::MalformedPattern`] if a pattern does not compile and
    /// [`LexError::SourceTooLarge`] if `text` does not fit 32-bit offsets.
    pub fn find_candidates(&self, text: &str) -> Result<Vec<Candidate>, LexError> {
        text_len(text)?;
        let mut candidates = Vec::new();
        for registration in &self.registrations {
            let regex = registration.regex(&self.config)?;
            for m in regex.find_iter(text) {
                if m.is_empty() {
                    tracing::trace!(
                        name = registration.token_type.name(),
                        offset = m.start(),
                        "dropping empty match"
                    );
                    continue;
                }
                candidates.push(Candidate::new(registration.id, byte_range(m.start(), m.end())));
            }
        }
        Ok(candidates)
    }

    /// Find, sort and resolve the candidates of `text` without converting
    /// anything or consulting the unmatched policy.
    ///
    /// # Errors
    ///
    /// Same as [`Lexer::find_candidates`].
    pub fn resolve(&self, text: &str) -> Result<Vec<Segment>, LexError> {
        let len = text_len(text)?;
        let mut candidates = self.find_candidates(text)?;
        resolve::sort_candidates(&mut candidates);
        Ok(resolve::filter_candidates(candidates, len))
    }

    /// Lex `text` and append the tokens to this lexer's token sequence.
    ///
    /// The lexer keeps its own copy of `text` for as long as it lives.
    /// Nothing is committed unless the whole call succeeds: on error, the
    /// tokens and stored texts are exactly what they were before.
    ///
    /// # Errors
    ///
    /// - [`LexError::UnmatchedInput`] if the policy aborts on a gap
    /// - [`LexError::Conversion`] if a conversion function fails
    /// - [`LexError::MalformedPattern`] if a pattern does not compile
    /// - [`LexError::SourceTooLarge`] if `text` does not fit 32-bit offsets
    pub fn lex(&mut self, text: impl Into<String>) -> Result<LexSummary, LexError> {
        let text: String = text.into();
        let len = text_len(&text)?;
        let mut candidates = self.find_candidates(&text)?;
        let found = candidates.len();
        resolve::sort_candidates(&mut candidates);
        let segments = resolve::filter_candidates(candidates, len);
        let survived = segments.iter().filter(|s| !s.is_gap()).count();
        let source = self.sources.next_id();

        // Gaps are settled before any conversion runs.
        let mut skipped = SmallVec::new();
        let mut emitted = Vec::new();
        for segment in &segments {
            let Segment::Gap(range) = *segment else {
                continue;
            };
            match self.policy.handle(&Unmatched::new(&text, range)) {
                UnmatchedAction::Abort => return Err(LexError::unmatched(&text, range)),
                UnmatchedAction::Skip => {
                    tracing::warn!(%range, policy = self.policy.name(), "skipping unmatched input");
                    skipped.push(range);
                    emitted.push(None);
                }
                UnmatchedAction::Emit(value) => {
                    tracing::warn!(%range, policy = self.policy.name(), "emitting unmatched input");
                    emitted.push(Some(value));
                }
            }
        }

        let mut emitted = emitted.into_iter();
        let mut tokens = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Candidate(candidate) => {
                    tokens.push(self.convert(&text, source, candidate)?);
                }
                Segment::Gap(range) => {
                    if let Some(Some(value)) = emitted.next() {
                        tokens.push(Token::new(None, source, range, value));
                    }
                }
            }
        }

        tracing::debug!(
            ?source,
            len = text.len(),
            candidates = found,
            survivors = survived,
            tokens = tokens.len(),
            skipped = skipped.len(),
            "lexed text"
        );

        let summary = LexSummary {
            source,
            tokens: tokens.len(),
            skipped,
        };
        self.sources.push(text);
        self.tokens.extend(tokens);
        Ok(summary)
    }

    fn convert(
        &self,
        text: &str,
        source: SourceId,
        candidate: Candidate,
    ) -> Result<Token<T>, LexError> {
        let token_type = &self.registrations[candidate.token_type.index()].token_type;
        let m = Match::new(token_type.name(), text, candidate.range);
        let value = token_type
            .convert(&m)
            .map_err(|source| LexError::Conversion {
                token_type: CompactString::from(token_type.name()),
                range: candidate.range,
                source,
            })?;
        Ok(Token::new(Some(candidate.token_type), source, candidate.range, value))
    }

    /// Tokens produced so far and not yet consumed through a [`TokenQueue`].
    #[must_use]
    pub const fn tokens(&self) -> &VecDeque<Token<T>> {
        &self.tokens
    }

    /// A FIFO view for consuming the produced tokens.
    pub fn queue(&mut self) -> TokenQueue<'_, T> {
        TokenQueue::new(self)
    }

    /// The text `token` was lexed from.
    #[must_use]
    pub fn lexeme(&self, token: &Token<T>) -> Option<&str> {
        self.sources.slice(token.source, token.range)
    }

    #[must_use]
    pub fn source(&self, id: SourceId) -> Option<&str> {
        self.sources.get(id)
    }

    #[must_use]
    pub const fn sources(&self) -> &SourceStore {
        &self.sources
    }

    #[must_use]
    pub fn token_type(&self, id: TokenTypeId) -> Option<&Arc<TokenType<T>>> {
        self.registrations.get(id.index()).map(|r| &r.token_type)
    }

    /// Registered token types in registration order.
    pub fn token_types(&self) -> impl Iterator<Item = (TokenTypeId, &Arc<TokenType<T>>)> {
        self.registrations.iter().map(|r| (r.id, &r.token_type))
    }

    /// Name of the token type that produced `token`.
    #[must_use]
    pub fn token_type_name(&self, token: &Token<T>) -> &str {
        token
            .token_type
            .and_then(|id| self.token_type(id))
            .map_or(UNMATCHED_NAME, |token_type| token_type.name())
    }

    #[must_use]
    pub const fn config(&self) -> &LexerConfig {
        &self.config
    }

    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}

/// Name reported for tokens an unmatched-input policy emitted.
pub const UNMATCHED_NAME: &str = "<unmatched>";

impl<T> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field(
                "token_types",
                &self
                    .registrations
                    .iter()
                    .map(|r| r.token_type.name())
                    .collect::<Vec<_>>(),
            )
            .field("sources", &self.sources.len())
            .field("tokens", &self.tokens.len())
            .field("config", &self.config)
            .field("policy", &self.policy.name())
            .finish()
    }
}

fn text_len(text: &str) -> Result<TextSize, LexError> {
    TextSize::try_from_usize(text.len()).ok_or(LexError::SourceTooLarge { len: text.len() })
}

// Offsets are bounded by `text_len`, checked before scanning.
#[allow(clippy::cast_possible_truncation)]
fn byte_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}
