//! Byte offsets and ranges into lexed source text.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte offset (UTF-8) into a source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TextSize(u32);

/// Half-open byte range `start..end` into a source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl TextSize {
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The offset as a `usize`, suitable for slicing.
    #[must_use]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Converts a `usize` offset, failing when it does not fit in 32 bits.
    #[must_use]
    pub fn try_from_usize(offset: usize) -> Option<Self> {
        u32::try_from(offset).ok().map(Self)
    }
}

impl From<u32> for TextSize {
    fn from(offset: u32) -> Self {
        Self(offset)
    }
}

impl From<TextSize> for u32 {
    fn from(size: TextSize) -> Self {
        size.0
    }
}

impl std::ops::Add<Self> for TextSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub<Self> for TextSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TextRange {
    /// # Panics
    ///
    /// Panics in debug builds if `end < start`.
    #[must_use]
    pub fn new(start: TextSize, end: TextSize) -> Self {
        debug_assert!(start <= end, "inverted range {start}..{end}");
        Self { start, end }
    }

    #[must_use]
    pub const fn at(start: TextSize, len: TextSize) -> Self {
        Self {
            start,
            end: TextSize(start.0 + len.0),
        }
    }

    #[must_use]
    pub const fn start(self) -> TextSize {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> TextSize {
        self.end
    }

    #[must_use]
    pub const fn len(self) -> TextSize {
        TextSize(self.end.0 - self.start.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether the two ranges share at least one byte.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.start.0 < other.end.0 && other.start.0 < self.end.0
    }

    /// The range as a `usize` range, suitable for slicing a `str`.
    #[must_use]
    pub const fn as_usize_range(self) -> std::ops::Range<usize> {
        self.start.to_usize()..self.end.to_usize()
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

impl std::ops::Index<TextRange> for str {
    type Output = str;

    fn index(&self, range: TextRange) -> &str {
        &self[range.as_usize_range()]
    }
}

#[cfg(feature = "diagnostics")]
impl From<TextRange> for miette::SourceSpan {
    fn from(range: TextRange) -> Self {
        use miette::SourceOffset;
        Self::new(
            SourceOffset::from(range.start().to_usize()),
            range.len().to_usize(),
        )
    }
}
