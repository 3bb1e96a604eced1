//! Fuzzy value matching for the scorer.
//!
//! Values are folded with [`lower_alnum`] before comparison, so punctuation,
//! spacing and case never count against a match.

use shroud_engine::normalize::lower_alnum;

/// Score awarded when the shorter key is a substring of the longer one.
pub const CONTAINMENT_SCORE: f64 = 0.95;

/// Similarity of an expected and a found value, in `[0, 1]`.
///
/// Exact key match scores 1.0; containment of the shorter key (at least
/// `containment_min_chars` long) scores [`CONTAINMENT_SCORE`]; anything else
/// falls back to [`sequence_ratio`]. An empty key on either side scores 0.0.
pub fn match_score(expected: &str, found: &str, containment_min_chars: usize) -> f64 {
    let e = lower_alnum(expected);
    let f = lower_alnum(found);
    if e.is_empty() || f.is_empty() {
        return 0.0;
    }
    if e == f {
        return 1.0;
    }
    let (shorter, longer) = if e.len() <= f.len() { (&e, &f) } else { (&f, &e) };
    if shorter.len() >= containment_min_chars && longer.contains(shorter.as_str()) {
        return CONTAINMENT_SCORE;
    }
    sequence_ratio(&e, &f)
}

/// Ratcliff/Obershelp similarity `2·M / T`, where `M` is the number of
/// characters in matching blocks and `T` the combined length.
///
/// Blocks are found by taking the longest common run (earliest in `a`, then
/// earliest in `b`) and recursing on both sides of it. Two empty strings
/// score 1.0.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]` as
/// `(start_a, start_b, len)`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    // run[j] = length of the common run ending at a[i-1], b[blo + j - 1]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[col - 1] + 1;
                cur[col] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                cur[col] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}
