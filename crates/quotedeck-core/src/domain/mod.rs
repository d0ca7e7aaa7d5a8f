//! Canonical domain types for quotedeck record data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockRecord`] | One OHLCV observation |
//! | [`Timestamp`] | Naive date-time with flexible parsing |
//! | [`DateRange`] | Inclusive calendar-date window |
//! | [`columns`] | Flat record source column names |

mod range;
mod record;
mod timestamp;

pub use range::{parse_date, DateRange};
pub use record::{columns, StockRecord};
pub use timestamp::Timestamp;
