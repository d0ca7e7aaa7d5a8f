//! End-to-end pipeline entry points for presentation consumers.
//!
//! Presentation adapters never hold mutable global state; they call
//! [`load_store`] once per source and [`select_frame`] on every range
//! change against the same immutable store.

use std::path::Path;

use serde::Serialize;

use crate::domain::DateRange;
use crate::domain::StockRecord;
use crate::error::StoreError;
use crate::filter::filter_by_range;
use crate::loader::load_rows;
use crate::normalizer::NormalizedStore;

/// Filtered view handed across the presentation boundary: the selected
/// records, the range that produced them, and the store's dropped-row
/// count for data-quality reporting. Nothing flows back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub records: Vec<StockRecord>,
    pub range: DateRange,
    pub dropped_rows: usize,
}

/// Loader then normalizer: read the flat source and build the immutable,
/// chronologically ordered store.
pub fn load_store(path: &Path) -> Result<NormalizedStore, StoreError> {
    let rows = load_rows(path)?;
    Ok(NormalizedStore::from_rows(&rows))
}

/// Filter the store by `range` into an owned frame. An empty frame is a
/// valid result, not an error.
pub fn select_frame(store: &NormalizedStore, range: DateRange) -> DashboardFrame {
    DashboardFrame {
        records: filter_by_range(store, range).to_vec(),
        range,
        dropped_rows: store.dropped_rows(),
    }
}
