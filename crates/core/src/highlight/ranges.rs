//! Occupied-range bookkeeping for the highlighter passes

/// A sorted set of disjoint half-open byte ranges.
///
/// Earlier passes claim ranges; later candidates overlapping any claimed
/// range are discarded. Queries and inserts are O(log n) via binary search
/// on the sorted range list.
#[derive(Debug, Default)]
pub(crate) struct OccupiedRanges {
    // Sorted by start; pairwise disjoint
    ranges: Vec<(usize, usize)>,
}

impl OccupiedRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `[start, end)` intersects no claimed range
    pub fn is_free(&self, start: usize, end: usize) -> bool {
        debug_assert!(start < end);
        // Index of the first range ending after `start`; only that range can
        // overlap the candidate from the left
        let idx = self.ranges.partition_point(|&(_, e)| e <= start);
        match self.ranges.get(idx) {
            Some(&(s, _)) => s >= end,
            None => true,
        }
    }

    /// Claims `[start, end)` if free; returns whether the claim succeeded
    pub fn claim(&mut self, start: usize, end: usize) -> bool {
        if !self.is_free(start, end) {
            return false;
        }
        let idx = self.ranges.partition_point(|&(s, _)| s < start);
        self.ranges.insert(idx, (start, end));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_all_free() {
        let ranges = OccupiedRanges::new();
        assert!(ranges.is_free(0, 1));
        assert!(ranges.is_free(100, 200));
    }

    #[test]
    fn test_claim_blocks_overlaps() {
        let mut ranges = OccupiedRanges::new();
        assert!(ranges.claim(10, 20));
        assert!(!ranges.is_free(10, 20));
        assert!(!ranges.is_free(15, 16));
        assert!(!ranges.is_free(5, 11));
        assert!(!ranges.is_free(19, 25));
        assert!(!ranges.is_free(0, 100));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        let mut ranges = OccupiedRanges::new();
        assert!(ranges.claim(10, 20));
        assert!(ranges.is_free(0, 10));
        assert!(ranges.is_free(20, 30));
        assert!(ranges.claim(20, 30));
        assert!(ranges.claim(0, 10));
        assert!(!ranges.is_free(9, 21));
    }

    #[test]
    fn test_claim_out_of_order_keeps_sorted_invariant() {
        let mut ranges = OccupiedRanges::new();
        assert!(ranges.claim(50, 60));
        assert!(ranges.claim(0, 5));
        assert!(ranges.claim(20, 30));
        assert!(!ranges.claim(25, 55));
        assert!(ranges.claim(5, 20));
        assert!(!ranges.is_free(0, 60));
        assert!(ranges.is_free(30, 50));
    }
}
