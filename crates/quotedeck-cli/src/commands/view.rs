use std::path::Path;

use quotedeck_core::{load_store, parse_date, select_frame, DateRange, NormalizedStore};

use crate::cli::{OutputFormat, ViewArgs};
use crate::error::CliError;
use crate::output;

pub fn run(args: &ViewArgs) -> Result<(), CliError> {
    let store = load_store(Path::new(&args.source))?;

    let range = match resolve_range(args, &store)? {
        Some(range) => range,
        None => {
            // Empty store with no explicit bounds: nothing to select.
            if store.dropped_rows() > 0 {
                eprintln!(
                    "⚠ dropped {} malformed row(s) during normalization",
                    store.dropped_rows()
                );
            }
            println!("no data");
            return Ok(());
        }
    };

    let frame = select_frame(&store, range);
    match args.format {
        OutputFormat::Table => output::render_table(&frame),
        OutputFormat::Json => output::render_json(&frame, args.pretty)?,
    }
    Ok(())
}

/// Each missing bound defaults to the corresponding store bound, matching
/// a date-range picker initialized to `[min(timestamp), max(timestamp)]`.
fn resolve_range(args: &ViewArgs, store: &NormalizedStore) -> Result<Option<DateRange>, CliError> {
    let bounds = store.date_bounds();

    let start = match &args.start {
        Some(raw) => Some(parse_date(raw)?),
        None => bounds.map(|(min, _)| min),
    };
    let end = match &args.end {
        Some(raw) => Some(parse_date(raw)?),
        None => bounds.map(|(_, max)| max),
    };

    Ok(match (start, end) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use quotedeck_core::RawRow;

    use super::*;

    fn args(start: Option<&str>, end: Option<&str>) -> ViewArgs {
        ViewArgs {
            source: String::from("stock_data.csv"),
            start: start.map(str::to_owned),
            end: end.map(str::to_owned),
            format: OutputFormat::Table,
            pretty: false,
        }
    }

    fn store_for(timestamps: &[&str]) -> NormalizedStore {
        let rows: Vec<RawRow> = timestamps
            .iter()
            .map(|ts| {
                [
                    ("Timestamp", *ts),
                    ("Open", "100"),
                    ("High", "101"),
                    ("Low", "99"),
                    ("Close", "100.5"),
                    ("Volume", "1000"),
                ]
                .into_iter()
                .map(|(column, value)| (column.to_owned(), value.to_owned()))
                .collect()
            })
            .collect();
        NormalizedStore::from_rows(&rows)
    }

    #[test]
    fn missing_bounds_default_to_the_store_span() {
        let store = store_for(&["2024-01-02T09:00", "2024-01-05T09:00"]);

        let range = resolve_range(&args(None, None), &store)
            .expect("must resolve")
            .expect("non-empty store has a default range");
        assert_eq!(range.start(), parse_date("2024-01-02").expect("date"));
        assert_eq!(range.end(), parse_date("2024-01-05").expect("date"));
    }

    #[test]
    fn an_explicit_bound_overrides_only_its_side() {
        let store = store_for(&["2024-01-02T09:00", "2024-01-05T09:00"]);

        let range = resolve_range(&args(Some("2024-01-03"), None), &store)
            .expect("must resolve")
            .expect("must produce a range");
        assert_eq!(range.start(), parse_date("2024-01-03").expect("date"));
        assert_eq!(range.end(), parse_date("2024-01-05").expect("date"));
    }

    #[test]
    fn empty_store_without_explicit_bounds_has_no_range() {
        let store = store_for(&[]);

        let resolved = resolve_range(&args(None, None), &store).expect("must resolve");
        assert!(resolved.is_none());
    }

    #[test]
    fn empty_store_with_both_bounds_still_resolves() {
        let store = store_for(&[]);

        let range = resolve_range(&args(Some("2024-01-01"), Some("2024-01-02")), &store)
            .expect("must resolve")
            .expect("explicit bounds need no store");
        assert_eq!(range.start(), parse_date("2024-01-01").expect("date"));
    }

    #[test]
    fn malformed_date_argument_is_a_validation_error() {
        let store = store_for(&["2024-01-02T09:00"]);

        let error =
            resolve_range(&args(Some("01/02/2024"), None), &store).expect_err("must fail");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn empty_source_renders_no_data_instead_of_failing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("stock_data.csv");
        std::fs::write(&path, "Timestamp,Open,High,Low,Close,Volume\n").expect("seed source");

        let mut view_args = args(None, None);
        view_args.source = path.to_string_lossy().into_owned();
        run(&view_args).expect("empty store is not an error");
    }
}
