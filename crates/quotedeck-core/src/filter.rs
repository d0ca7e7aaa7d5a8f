//! Range filter over the normalized store.

use crate::domain::{DateRange, StockRecord};
use crate::normalizer::NormalizedStore;

/// Select the contiguous subsequence of records whose calendar date lies
/// within `range`, both bounds inclusive. Time-of-day is ignored.
///
/// The store's ascending-timestamp invariant makes the matching records a
/// contiguous run, so this is a zero-copy binary search over date
/// boundaries rather than a scan. Inverted ranges select nothing; filter
/// output never errors and never mutates the store.
pub fn filter_by_range(store: &NormalizedStore, range: DateRange) -> &[StockRecord] {
    if range.is_inverted() {
        return &[];
    }

    let records = store.records();
    let lower = records.partition_point(|record| record.timestamp.date() < range.start());
    let upper = records.partition_point(|record| record.timestamp.date() <= range.end());
    &records[lower..upper]
}
