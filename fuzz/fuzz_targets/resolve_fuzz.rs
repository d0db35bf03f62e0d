#![no_main]
use libfuzzer_sys::fuzz_target;
use objlex::lexer::resolve::{self, Segment};
use objlex::{Candidate, TextRange, TextSize, TokenTypeId};

const TEXT_LEN: u32 = 256;

fuzz_target!(|data: &[u8]| {
    // Three bytes per candidate: token type, start, length.
    let mut candidates: Vec<Candidate> = data
        .chunks_exact(3)
        .filter_map(|chunk| {
            let start = u32::from(chunk[1]);
            let len = u32::from(chunk[2]).min(TEXT_LEN - start);
            (len > 0).then(|| {
                Candidate::new(
                    TokenTypeId(u32::from(chunk[0] % 8)),
                    TextRange::at(TextSize::new(start), TextSize::new(len)),
                )
            })
        })
        .collect();
    candidates.sort_by_key(|c| c.token_type);

    resolve::sort_candidates(&mut candidates);
    let expected = pairwise_sweep(&candidates);
    let segments = resolve::filter_candidates(candidates, TextSize::new(TEXT_LEN));

    let mut cursor = TextSize::zero();
    let mut survivors = Vec::new();
    for segment in &segments {
        assert_eq!(segment.range().start(), cursor);
        cursor = segment.range().end();
        if let Segment::Candidate(survivor) = segment {
            survivors.push(*survivor);
        }
    }
    assert_eq!(cursor, TextSize::new(TEXT_LEN));
    assert_eq!(survivors, expected);
});

/// Neighbour-by-neighbour sweep over a working list; the loser of an
/// overlapping pair is removed and the winner meets the next candidate.
fn pairwise_sweep(sorted: &[Candidate]) -> Vec<Candidate> {
    let mut work = sorted.to_vec();
    let mut i = 0;
    while i + 1 < work.len() {
        let (c1, c2) = (work[i], work[i + 1]);
        if c1.end() <= c2.start() {
            i += 1;
        } else if c2.len() > c1.len() {
            work.remove(i);
        } else {
            work.remove(i + 1);
        }
    }
    work
}
