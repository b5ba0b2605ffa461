//! Ordering and truncation of scored candidates.

use std::cmp::Ordering;

use super::scorer::ScoredCandidate;
use super::RelatedFacility;

/// Drop zero-score candidates, sort best-first and keep at most `limit`.
///
/// Candidates are ordered by score descending. Within a score, candidates
/// without a distance keep their input position, and the ones with a
/// distance are reordered nearest-first among the positions they occupy.
pub(crate) fn rank(mut candidates: Vec<ScoredCandidate<'_>>, limit: usize) -> Vec<RelatedFacility> {
    candidates.retain(|c| c.score > 0);
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    for tied in candidates.chunk_by_mut(|a, b| a.score == b.score) {
        order_measured_in_place(tied);
    }
    candidates.truncate(limit);
    candidates
        .into_iter()
        .map(|c| RelatedFacility {
            facility: c.facility.clone(),
            distance: c.distance,
            match_reason: c.match_reason,
        })
        .collect()
}

fn order_measured_in_place(tied: &mut [ScoredCandidate<'_>]) {
    let slots: Vec<usize> = tied
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.distance.map(|_| i))
        .collect();
    if slots.len() < 2 {
        return;
    }

    let mut measured: Vec<ScoredCandidate<'_>> = slots.iter().map(|&i| tied[i].clone()).collect();
    measured.sort_by(|a, b| {
        a.distance
            .zip(b.distance)
            .map_or(Ordering::Equal, |(x, y)| x.total_cmp(&y))
    });
    for (slot, candidate) in slots.into_iter().zip(measured) {
        tied[slot] = candidate;
    }
}
