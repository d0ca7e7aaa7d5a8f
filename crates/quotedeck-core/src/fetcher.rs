//! Remote fetcher: Alpha Vantage intraday series -> flat CSV record source.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::domain::columns;
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest};

const QUERY_ENDPOINT: &str = "https://www.alphavantage.co/query";
const SERIES_KEY_PREFIX: &str = "Time Series";
const INTRADAY_INTERVAL: &str = "5min";

/// Environment variable consulted for the default API credential.
pub const API_KEY_ENV: &str = "QUOTEDECK_ALPHAVANTAGE_API_KEY";

/// Fetch lifecycle: terminal after one attempt, no built-in retry. A
/// caller wanting another attempt re-invokes the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    NotRequested,
    Requesting,
    Succeeded,
    Failed,
}

/// One-shot fetcher for the `TIME_SERIES_INTRADAY` quote endpoint.
///
/// The only side effect is writing the flat record source, and only after
/// the payload has fully decoded: any failure leaves a pre-existing source
/// untouched, so the caller can fall back to prior data.
pub struct AlphaVantageFetcher {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    state: Mutex<FetchState>,
}

impl AlphaVantageFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            state: Mutex::new(FetchState::NotRequested),
        }
    }

    /// Credential from [`API_KEY_ENV`], falling back to the provider's
    /// shared `demo` key.
    pub fn from_env(http_client: Arc<dyn HttpClient>) -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_else(|_| String::from("demo"));
        Self::new(http_client, api_key)
    }

    pub fn state(&self) -> FetchState {
        *self.state.lock().expect("fetch state lock poisoned")
    }

    fn set_state(&self, state: FetchState) {
        *self.state.lock().expect("fetch state lock poisoned") = state;
    }

    /// Request the intraday series for `symbol` and persist it as the flat
    /// record source at `path`, overwriting prior content. Returns the
    /// number of observations written.
    pub async fn fetch_to_csv(&self, symbol: &str, path: &Path) -> Result<usize, FetchError> {
        self.set_state(FetchState::Requesting);
        match self.fetch_inner(symbol, path).await {
            Ok(count) => {
                self.set_state(FetchState::Succeeded);
                Ok(count)
            }
            Err(error) => {
                self.set_state(FetchState::Failed);
                Err(error)
            }
        }
    }

    async fn fetch_inner(&self, symbol: &str, path: &Path) -> Result<usize, FetchError> {
        let url = format!(
            "{QUERY_ENDPOINT}?function=TIME_SERIES_INTRADAY&symbol={}&interval={INTRADAY_INTERVAL}&apikey={}",
            urlencoding::encode(symbol),
            self.api_key
        );

        let response = self
            .http_client
            .execute(HttpRequest::get(url))
            .await
            .map_err(|error| FetchError::Transport(error.message().to_owned()))?;

        if !response.is_success() {
            return Err(FetchError::UpstreamStatus(response.status));
        }

        let payload: IntradayResponse = serde_json::from_str(&response.body)
            .map_err(|error| FetchError::MalformedPayload(error.to_string()))?;
        let series = payload.series().ok_or(FetchError::MissingSeries)?;

        // Series values are copied through verbatim; the normalizer stays
        // the single parsing authority for prices and volumes.
        let mut contents = columns::ALL.join(",");
        contents.push('\n');
        for (timestamp, entry) in &series {
            contents.push_str(&format!(
                "{timestamp},{},{},{},{},{}\n",
                entry.open, entry.high, entry.low, entry.close, entry.volume
            ));
        }

        // Stage next to the destination and rename into place, so a
        // mid-write failure (disk full) cannot tear a pre-existing source.
        let staged = path.with_extension("tmp");
        if let Err(error) = std::fs::write(&staged, contents) {
            let _ = std::fs::remove_file(&staged);
            return Err(FetchError::Persist(error));
        }
        if let Err(error) = std::fs::rename(&staged, path) {
            let _ = std::fs::remove_file(&staged);
            return Err(FetchError::Persist(error));
        }
        Ok(series.len())
    }
}

/// Top-level payload keyed by free-form section names ("Meta Data",
/// "Time Series (5min)", ...). The series object is found by prefix since
/// the provider embeds the interval in the key.
#[derive(Debug, Deserialize)]
struct IntradayResponse {
    #[serde(flatten)]
    sections: HashMap<String, serde_json::Value>,
}

impl IntradayResponse {
    /// BTreeMap keys the observations by timestamp string; the provider's
    /// `YYYY-MM-DD HH:MM:SS` form sorts lexicographically in
    /// chronological order, which is the order the flat source wants.
    fn series(&self) -> Option<BTreeMap<String, SeriesEntry>> {
        self.sections
            .iter()
            .find(|(key, _)| key.starts_with(SERIES_KEY_PREFIX))
            .and_then(|(_, value)| serde_json::from_value(value.clone()).ok())
    }
}

#[derive(Debug, Deserialize)]
struct SeriesEntry {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}
