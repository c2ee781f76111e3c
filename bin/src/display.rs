//! Output formatting for the twelvebar CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use twelvebar_lib::prelude::*;

/// Output format for fetched bars.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

/// Write bars to `output`, or stdout when no path is given.
pub(crate) fn write_bars(bars: &[Bar], output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_to(bars, BufWriter::new(file), format)
        }
        None => write_to(bars, BufWriter::new(std::io::stdout()), format),
    }
}

fn write_to<W: Write + Send>(bars: &[Bar], mut writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_bars(bars, &mut writer)?,
        Format::Json => JsonFormatter::new().write_bars(bars, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_bars(bars, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}
