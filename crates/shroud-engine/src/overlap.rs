//! Greedy priority-ordered overlap resolution.

use std::cmp::Ordering;

use shroud_core::types::Span;

/// Ranking used to pick among overlapping spans: priority, then width,
/// then score (all descending), then earlier start.
fn rank(a: &Span, b: &Span) -> Ordering {
    b.label
        .priority()
        .cmp(&a.label.priority())
        .then_with(|| b.width().cmp(&a.width()))
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.start.cmp(&b.start))
}

/// Select a non-overlapping subset, highest ranked first, returned in start
/// order. The sort is stable so exact ties keep input order.
pub fn resolve_overlaps(spans: Vec<Span>) -> Vec<Span> {
    let mut ranked = spans;
    ranked.sort_by(rank);

    let mut accepted: Vec<Span> = Vec::with_capacity(ranked.len());
    for span in ranked {
        if accepted.iter().all(|kept| !kept.overlaps(&span)) {
            accepted.push(span);
        }
    }
    accepted.sort_by_key(|s| s.start);
    accepted
}
