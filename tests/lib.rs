// Test library for quotedeck behavior tests
pub use quotedeck_core::{
    domain::{columns, parse_date, DateRange, StockRecord, Timestamp},
    error::{FetchError, StoreError},
    fetcher::{AlphaVantageFetcher, FetchState},
    filter::filter_by_range,
    http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient},
    loader::load_rows,
    normalizer::NormalizedStore,
    pipeline::{load_store, select_frame, DashboardFrame},
};
pub use std::sync::Arc;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a CSV fixture into `dir` and return its path.
pub fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}
