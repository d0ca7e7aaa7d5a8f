//! Record normalizer: raw rows -> typed, chronologically ordered store.

use serde::Serialize;
use time::Date;

use crate::domain::{columns, DateRange, StockRecord, Timestamp};
use crate::error::ValidationError;
use crate::loader::RawRow;

/// The normalized store: type-validated records, stably sorted ascending
/// by timestamp, immutable after construction.
///
/// Row-level parse failures are policy, not errors: the offending row is
/// dropped and counted in [`NormalizedStore::dropped_rows`] so consumers
/// can report data quality without the pipeline run failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStore {
    records: Vec<StockRecord>,
    dropped_rows: usize,
}

impl NormalizedStore {
    /// Build the store from raw rows. Pure and infallible: bad rows are
    /// absorbed, never surfaced individually.
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let mut records = Vec::with_capacity(rows.len());
        let mut dropped_rows = 0usize;

        for row in rows {
            match normalize_row(row) {
                Ok(record) => records.push(record),
                Err(_) => dropped_rows += 1,
            }
        }

        // Vec::sort_by is stable, so equal timestamps keep source order.
        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        Self {
            records,
            dropped_rows,
        }
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub const fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum calendar dates of the store, if non-empty.
    pub fn date_bounds(&self) -> Option<(Date, Date)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.timestamp.date(), last.timestamp.date()))
    }

    /// Default range for a presentation consumer: the full store span.
    pub fn default_range(&self) -> Option<DateRange> {
        self.date_bounds()
            .map(|(start, end)| DateRange::new(start, end))
    }
}

fn normalize_row(row: &RawRow) -> Result<StockRecord, ValidationError> {
    Ok(StockRecord {
        timestamp: Timestamp::parse(field(row, columns::TIMESTAMP)?)?,
        open: numeric_field(row, columns::OPEN)?,
        high: numeric_field(row, columns::HIGH)?,
        low: numeric_field(row, columns::LOW)?,
        close: numeric_field(row, columns::CLOSE)?,
        volume: numeric_field(row, columns::VOLUME)?,
    })
}

fn field<'a>(row: &'a RawRow, column: &'static str) -> Result<&'a str, ValidationError> {
    row.get(column)
        .map(String::as_str)
        .ok_or(ValidationError::MissingColumn { column })
}

fn numeric_field(row: &RawRow, column: &'static str) -> Result<f64, ValidationError> {
    let value = field(row, column)?;
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NonNumericField {
            column,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: [(&str, &str); 6]) -> RawRow {
        fields
            .into_iter()
            .map(|(column, value)| (column.to_owned(), value.to_owned()))
            .collect()
    }

    fn observation(timestamp: &str, close: &str) -> RawRow {
        row([
            (columns::TIMESTAMP, timestamp),
            (columns::OPEN, "100"),
            (columns::HIGH, "101"),
            (columns::LOW, "99"),
            (columns::CLOSE, close),
            (columns::VOLUME, "1000"),
        ])
    }

    #[test]
    fn sorts_records_ascending_by_timestamp() {
        let rows = vec![
            observation("2024-01-03T09:00", "3"),
            observation("2024-01-01T09:00", "1"),
            observation("2024-01-02T09:00", "2"),
        ];

        let store = NormalizedStore::from_rows(&rows);
        let closes: Vec<f64> = store.records().iter().map(|r| r.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
        assert_eq!(store.dropped_rows(), 0);
    }

    #[test]
    fn drops_and_counts_unparseable_rows() {
        let rows = vec![
            observation("2024-01-01T09:00", "100.5"),
            observation("bad", "100.5"),
            observation("2024-01-02T09:00", "not-a-number"),
        ];

        let store = NormalizedStore::from_rows(&rows);
        assert_eq!(store.len(), 1);
        assert_eq!(store.dropped_rows(), 2);
    }

    #[test]
    fn missing_column_drops_the_row() {
        let mut incomplete = observation("2024-01-01T09:00", "100.5");
        incomplete.remove(columns::VOLUME);

        let store = NormalizedStore::from_rows(&[incomplete]);
        assert!(store.is_empty());
        assert_eq!(store.dropped_rows(), 1);
    }

    #[test]
    fn equal_timestamps_keep_source_order() {
        let rows = vec![
            observation("2024-01-01T09:00", "1"),
            observation("2024-01-01T09:00", "2"),
            observation("2024-01-01T09:00", "3"),
        ];

        let store = NormalizedStore::from_rows(&rows);
        let closes: Vec<f64> = store.records().iter().map(|r| r.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn date_bounds_span_the_store() {
        let rows = vec![
            observation("2024-01-05T09:00", "1"),
            observation("2024-01-02T09:00", "2"),
        ];

        let store = NormalizedStore::from_rows(&rows);
        let (min, max) = store.date_bounds().expect("non-empty store");
        assert_eq!(min.to_string(), "2024-01-02");
        assert_eq!(max.to_string(), "2024-01-05");
    }

    #[test]
    fn empty_store_has_no_bounds() {
        let store = NormalizedStore::from_rows(&[]);
        assert!(store.date_bounds().is_none());
        assert!(store.default_range().is_none());
    }
}
