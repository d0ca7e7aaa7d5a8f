use serde::{Deserialize, Serialize};

use super::Timestamp;

/// One OHLCV observation from the flat record source.
///
/// Prices and volume are required to parse as numbers; non-negativity is
/// a data convention, not an enforced invariant, so construction carries
/// no validation beyond the field types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub timestamp: Timestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Column names of the flat record source, header order included.
pub mod columns {
    pub const TIMESTAMP: &str = "Timestamp";
    pub const OPEN: &str = "Open";
    pub const HIGH: &str = "High";
    pub const LOW: &str = "Low";
    pub const CLOSE: &str = "Close";
    pub const VOLUME: &str = "Volume";

    pub const ALL: [&str; 6] = [TIMESTAMP, OPEN, HIGH, LOW, CLOSE, VOLUME];
}
