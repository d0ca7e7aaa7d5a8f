use std::path::Path;
use std::sync::Arc;

use quotedeck_core::{AlphaVantageFetcher, ReqwestHttpClient};

use crate::cli::FetchArgs;
use crate::error::CliError;

pub async fn run(args: &FetchArgs) -> Result<(), CliError> {
    let path = Path::new(&args.output);

    // Presence check is inherently racy, but acceptable for single-user,
    // single-process usage.
    if args.if_missing && path.exists() {
        eprintln!("✓ {} already exists; skipping fetch", args.output);
        return Ok(());
    }

    let http_client = Arc::new(ReqwestHttpClient::new());
    let fetcher = match &args.api_key {
        Some(key) => AlphaVantageFetcher::new(http_client, key.clone()),
        None => AlphaVantageFetcher::from_env(http_client),
    };

    let written = fetcher.fetch_to_csv(&args.symbol, path).await?;
    eprintln!("✓ wrote {written} records to {}", args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn if_missing_skips_the_request_when_the_source_exists() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("stock_data.csv");
        std::fs::write(&path, "prior contents").expect("seed source");

        let args = FetchArgs {
            symbol: String::from("AAPL"),
            api_key: Some(String::from("test-key")),
            output: path.to_string_lossy().into_owned(),
            if_missing: true,
        };

        // No transport is reached; the guard returns before the fetcher runs.
        run(&args).await.expect("guarded fetch should be a no-op");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read source"),
            "prior contents"
        );
    }
}
