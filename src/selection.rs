//! Pick the best hours to go fishing.

use crate::index::ScoredHour;
use itertools::Itertools;

/// Select the `k` hours with the highest fishing index.
///
/// Hours are ranked by descending index, equal indexes go to the earliest hour. The selected
/// hours are returned in chronological order, not in rank order. Fewer than `k` hours are
/// returned if `hours` is shorter than `k`, and none at all if `k` is 0.
///
/// # Examples
///
/// ```rust
/// use fishing_index::select_best;
///
/// assert!(select_best(&[], 5).is_empty());
/// ```
pub fn select_best(hours: &[ScoredHour], k: usize) -> Vec<ScoredHour> {
    let mut best: Vec<ScoredHour> = hours
        .iter()
        .copied()
        .sorted_by(|a, b| {
            b.index
                .cmp(&a.index)
                .then_with(|| a.sample.time.cmp(&b.sample.time))
        })
        .take(k)
        .collect();

    best.sort_by(|a, b| a.sample.time.cmp(&b.sample.time));
    best
}
