//! Ordering and conflict resolution for candidates.
//!
//! The resolver turns the raw candidate list of one text into an ordered list
//! of [`Segment`]s: surviving candidates, plus the gaps no survivor covers.
//! It makes no policy decisions about gaps; the lexer does that.
//!
//! ## Rules
//!
//! - Candidates are stably sorted by start offset, so candidates starting at
//!   the same offset stay in discovery order (registration order first, then
//!   left to right).
//! - Of two overlapping candidates, the strictly longer one survives.
//! - Of two overlapping candidates of equal length, the earlier one in sort
//!   order survives. For candidates starting at the same offset this is the
//!   one whose token type was registered first.
//! - Only neighbours in the sweep are compared. A survivor can overlap a
//!   longer candidate that an earlier survivor already knocked out.

use crate::lexer::Candidate;
use crate::text::{TextRange, TextSize};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// One piece of a resolved text, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A candidate that survived conflict resolution.
    Candidate(Candidate),
    /// Text no surviving candidate covers.
    Gap(TextRange),
}

impl Segment {
    #[must_use]
    pub const fn range(&self) -> TextRange {
        match self {
            Self::Candidate(candidate) => candidate.range,
            Self::Gap(range) => *range,
        }
    }

    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Gap(_))
    }
}

/// Stable sort by start offset.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    // `sort_by_key` is a stable sort; the tie-break below depends on it.
    candidates.sort_by_key(Candidate::start);
}

/// Remove overlapping candidates and locate uncovered text.
///
/// `candidates` must already be sorted with [`sort_candidates`]. `text_len`
/// is the length of the text they were found in; uncovered text before the
/// first survivor and after the last one is reported as a gap too.
///
/// The sweep looks at adjacent pairs `(c1, c2)`. When they overlap, the loser
/// is dropped and the winner is compared with the next candidate before
/// moving on, so chains of overlapping candidates collapse to one.
#[must_use]
pub fn filter_candidates(candidates: Vec<Candidate>, text_len: TextSize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(candidates.len());
    let mut covered = TextSize::zero();
    let mut dropped = 0usize;

    let mut iter = candidates.into_iter();
    let Some(mut current) = iter.next() else {
        push_gap(&mut segments, covered, text_len);
        return segments;
    };

    for next in iter {
        match current.end().cmp(&next.start()) {
            Ordering::Equal | Ordering::Less => {
                commit(&mut segments, &mut covered, current);
                current = next;
            }
            Ordering::Greater => {
                dropped += 1;
                if next.is_longer_than(&current) {
                    tracing::trace!(loser = ?current, winner = ?next, "dropping shorter candidate");
                    current = next;
                } else {
                    tracing::trace!(loser = ?next, winner = ?current, "dropping candidate");
                }
            }
        }
    }
    commit(&mut segments, &mut covered, current);
    push_gap(&mut segments, covered, text_len);

    tracing::trace!(dropped, segments = segments.len(), "resolved candidates");
    segments
}

/// Resolve `candidates` and return only the survivors.
///
/// Gaps are discarded; use [`filter_candidates`] to see them.
#[must_use]
pub fn survivors(candidates: Vec<Candidate>, text_len: TextSize) -> Vec<Candidate> {
    filter_candidates(candidates, text_len)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Candidate(candidate) => Some(candidate),
            Segment::Gap(_) => None,
        })
        .collect()
}

/// Ranges of every gap in `segments`.
#[must_use]
pub fn gaps(segments: &[Segment]) -> SmallVec<[TextRange; 4]> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Gap(range) => Some(*range),
            Segment::Candidate(_) => None,
        })
        .collect()
}

fn commit(segments: &mut Vec<Segment>, covered: &mut TextSize, candidate: Candidate) {
    push_gap(segments, *covered, candidate.start());
    *covered = candidate.end();
    segments.push(Segment::Candidate(candidate));
}

fn push_gap(segments: &mut Vec<Segment>, from: TextSize, to: TextSize) {
    if from < to {
        segments.push(Segment::Gap(TextRange::new(from, to)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenTypeId;

    fn candidate(id: u32, start: u32, len: u32) -> Candidate {
        Candidate::new(
            TokenTypeId(id),
            TextRange::at(TextSize::new(start), TextSize::new(len)),
        )
    }

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    fn resolve(mut candidates: Vec<Candidate>, text_len: u32) -> Vec<Segment> {
        sort_candidates(&mut candidates);
        filter_candidates(candidates, TextSize::new(text_len))
    }

    #[test]
    fn test_sort_is_stable() {
        let mut candidates = vec![
            candidate(0, 3, 1),
            candidate(1, 0, 2),
            candidate(2, 3, 1),
            candidate(3, 0, 2),
        ];
        sort_candidates(&mut candidates);

        let ids: Vec<u32> = candidates.iter().map(|c| c.token_type.0).collect();
        assert_eq!(ids, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(resolve(Vec::new(), 0).is_empty());
    }

    #[test]
    fn test_no_candidates_is_one_gap() {
        assert_eq!(resolve(Vec::new(), 4), vec![Segment::Gap(range(0, 4))]);
    }

    #[test]
    fn test_single_candidate() {
        let only = candidate(0, 0, 3);
        assert_eq!(resolve(vec![only], 3), vec![Segment::Candidate(only)]);
    }

    #[test]
    fn test_adjacent_candidates_survive() {
        let a = candidate(0, 0, 2);
        let b = candidate(1, 2, 1);
        let c = candidate(0, 3, 2);
        assert_eq!(
            resolve(vec![c, a, b], 5),
            vec![
                Segment::Candidate(a),
                Segment::Candidate(b),
                Segment::Candidate(c)
            ]
        );
    }

    #[test]
    fn test_equal_length_prefers_first_registered() {
        let first = candidate(0, 0, 2);
        let second = candidate(1, 0, 2);

        assert_eq!(
            resolve(vec![first, second], 2),
            vec![Segment::Candidate(first)]
        );
        // Discovery order decides, not the id value.
        assert_eq!(
            resolve(vec![second, first], 2),
            vec![Segment::Candidate(second)]
        );
    }

    #[test]
    fn test_longer_candidate_wins_either_order() {
        let short = candidate(0, 1, 2);
        let long = candidate(1, 0, 3);

        assert_eq!(resolve(vec![short, long], 3), vec![Segment::Candidate(long)]);
        assert_eq!(resolve(vec![long, short], 3), vec![Segment::Candidate(long)]);
    }

    #[test]
    fn test_later_longer_candidate_displaces_earlier() {
        let early = candidate(0, 0, 2);
        let late = candidate(1, 1, 4);

        // The first byte is exposed once the earlier candidate is dropped.
        assert_eq!(
            resolve(vec![early, late], 5),
            vec![Segment::Gap(range(0, 1)), Segment::Candidate(late)]
        );
    }

    #[test]
    fn test_overlap_chain_collapses() {
        let a = candidate(0, 0, 3);
        let b = candidate(1, 1, 2);
        let c = candidate(2, 2, 1);
        let d = candidate(0, 3, 1);

        assert_eq!(
            resolve(vec![a, b, c, d], 4),
            vec![Segment::Candidate(a), Segment::Candidate(d)]
        );
    }

    #[test]
    fn test_knocked_out_candidate_does_not_shadow_next() {
        let a = candidate(0, 0, 5);
        let b = candidate(1, 4, 3);
        let c = candidate(2, 6, 2);

        // `b` loses to `a` and is never compared with `c`.
        assert_eq!(
            resolve(vec![a, b, c], 8),
            vec![
                Segment::Candidate(a),
                Segment::Gap(range(5, 6)),
                Segment::Candidate(c)
            ]
        );
    }

    #[test]
    fn test_tie_only_decided_between_neighbours() {
        let a = candidate(0, 0, 4);
        let b = candidate(1, 3, 3);
        let c = candidate(2, 5, 3);

        assert_eq!(
            resolve(vec![a, b, c], 8),
            vec![
                Segment::Candidate(a),
                Segment::Gap(range(4, 5)),
                Segment::Candidate(c)
            ]
        );
    }

    #[test]
    fn test_gaps_are_reported_in_order() {
        let a = candidate(0, 1, 1);
        let b = candidate(0, 4, 2);

        let segments = resolve(vec![b, a], 8);
        assert_eq!(
            segments,
            vec![
                Segment::Gap(range(0, 1)),
                Segment::Candidate(a),
                Segment::Gap(range(2, 4)),
                Segment::Candidate(b),
                Segment::Gap(range(6, 8)),
            ]
        );
        assert_eq!(gaps(&segments).as_slice(), &[range(0, 1), range(2, 4), range(6, 8)]);
    }

    #[test]
    fn test_survivors_drops_gaps() {
        let a = candidate(0, 0, 2);
        let b = candidate(1, 3, 1);
        let mut candidates = vec![a, b];
        sort_candidates(&mut candidates);
        assert_eq!(survivors(candidates, TextSize::new(4)), vec![a, b]);
    }

    #[test]
    fn test_signed_and_unsigned_numbers() {
        // "12 -24" with whitespace, uint and int registered in that order.
        let ws = candidate(0, 2, 1);
        let uint_12 = candidate(1, 0, 2);
        let uint_24 = candidate(1, 4, 2);
        let int_12 = candidate(2, 0, 2);
        let int_24 = candidate(2, 3, 3);

        let segments = resolve(vec![ws, uint_12, uint_24, int_12, int_24], 6);
        assert_eq!(
            segments,
            vec![
                Segment::Candidate(uint_12),
                Segment::Candidate(ws),
                Segment::Candidate(int_24),
            ]
        );
    }
}
