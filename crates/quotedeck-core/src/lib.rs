//! Core pipeline for quotedeck.
//!
//! This crate contains:
//! - Canonical record types and timestamp/date-range handling
//! - The flat CSV record store loader and row normalizer
//! - The inclusive calendar-date range filter
//! - The Alpha Vantage intraday fetcher and its HTTP transport abstraction
//!
//! Data flows one way: fetcher (optional) -> flat source -> loader ->
//! normalizer -> filter -> presentation frame. The normalized store is
//! immutable once built; filtering only ever derives views from it.

pub mod domain;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod http_client;
pub mod loader;
pub mod normalizer;
pub mod pipeline;

pub use domain::{columns, parse_date, DateRange, StockRecord, Timestamp};
pub use error::{FetchError, StoreError, ValidationError};
pub use fetcher::{AlphaVantageFetcher, FetchState, API_KEY_ENV};
pub use filter::filter_by_range;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use loader::{load_rows, RawRow};
pub use normalizer::NormalizedStore;
pub use pipeline::{load_store, select_frame, DashboardFrame};
