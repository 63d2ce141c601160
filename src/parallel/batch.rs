//! Batch distribution for parallel candidate scans.
//!
//! The ranked scan uses one pool member per parallel task; this module
//! provides batch boundaries for progress reporting and a worker-count-aware
//! entry point.

use crate::analysis::counter::{rank_counters, CandidateScore};
use crate::analysis::team::PreparedSlot;
use crate::data::registry::DataRegistry;
use crate::parallel::pool::WorkerPool;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + usize::from(i < remainder);
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run the ranked counter scan inside [WorkerPool::install] when a custom
/// worker count is set. The merge order is deterministic either way.
pub fn run_ranked_scan(
    registry: &DataRegistry,
    team: &[PreparedSlot],
    pool_names: &[String],
    use_enhanced: bool,
    pool: &WorkerPool,
) -> Vec<CandidateScore> {
    pool.install(|| rank_counters(registry, team, pool_names, use_enhanced))
}

#[cfg(test)]
mod tests {
    use super::batch_ranges;

    #[test]
    fn batch_ranges_even_split() {
        let r = batch_ranges(100, 4);
        assert_eq!(r, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn batch_ranges_with_remainder() {
        let r = batch_ranges(10, 3);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let r = batch_ranges(3, 10);
        assert_eq!(r, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }
}
