use crate::text::TextRange;

/// Identifies one text stored in a [`SourceStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceId(pub u32);

impl SourceId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only store of every text a lexer has committed tokens for.
///
/// Tokens refer to their text by [`SourceId`] and range, so a stored text is
/// never removed or modified while the store lives.
#[derive(Debug, Default, Clone)]
pub struct SourceStore {
    texts: Vec<Box<str>>,
}

impl SourceStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { texts: Vec::new() }
    }

    /// The id the next pushed text will get.
    #[must_use]
    pub fn next_id(&self) -> SourceId {
        SourceId(u32::try_from(self.texts.len()).unwrap_or(u32::MAX))
    }

    /// Take ownership of `text` and return its id.
    pub fn push(&mut self, text: impl Into<Box<str>>) -> SourceId {
        let id = self.next_id();
        self.texts.push(text.into());
        id
    }

    #[must_use]
    pub fn get(&self, id: SourceId) -> Option<&str> {
        self.texts.get(id.index()).map(AsRef::as_ref)
    }

    /// The slice of source `id` covered by `range`.
    #[must_use]
    pub fn slice(&self, id: SourceId, range: TextRange) -> Option<&str> {
        self.get(id)?.get(range.as_usize_range())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
