use std::collections::btree_set::Range;
use std::collections::BTreeSet;

use strata_inmem::index::Index;

/// Prefix scans over a set of keys.
pub(crate) trait RangeN {
    /// All keys starting with `k1`.
    fn range1(&self, k1: Index) -> Range<'_, [Index; 3]>;
    /// All keys starting with `k1`, `k2`.
    fn range2(&self, k1: Index, k2: Index) -> Range<'_, [Index; 3]>;
}

impl RangeN for BTreeSet<[Index; 3]> {
    fn range1(&self, k1: Index) -> Range<'_, [Index; 3]> {
        self.range([k1, Index::MIN, Index::MIN]..=[k1, Index::MAX, Index::MAX])
    }

    fn range2(&self, k1: Index, k2: Index) -> Range<'_, [Index; 3]> {
        self.range([k1, k2, Index::MIN]..=[k1, k2, Index::MAX])
    }
}
