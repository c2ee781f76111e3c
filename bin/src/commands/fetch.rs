//! Fetch command implementation.
//!
//! Runs a single `get_ohlc` request and writes the bars in the chosen format.

use anyhow::{Context, Result};
use std::path::Path;

use super::service_from_env;
use crate::display::{Format, write_bars};

/// Fetch bars for a symbol and write them to a file or stdout.
pub(crate) async fn fetch(
    symbol: &str,
    interval: &str,
    limit: i64,
    format: Format,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let service = service_from_env()?;

    let result = service
        .get_ohlc(symbol, interval, limit)
        .await
        .with_context(|| format!("Failed to fetch {symbol} at {interval}"))?;

    write_bars(&result.data, output, format)?;

    if !quiet {
        if let Some(path) = output {
            eprintln!(
                "Wrote {} {} bars for {} to {}",
                result.len(),
                result.interval,
                result.symbol,
                path.display()
            );
        }
    }

    Ok(())
}
