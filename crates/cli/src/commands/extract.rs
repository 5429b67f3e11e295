//! Extract command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use repotools_extract::{ExtractOptions, ScanMode, extract_fields};
use tracing::{info, warn};

use crate::error::PartialScanError;
use crate::formatters::OutputFormat;

pub async fn run(
    file: PathBuf,
    keys: Vec<String>,
    marker: Option<String>,
    window: Option<usize>,
    delimiter: Option<char>,
    output_format: OutputFormat,
) -> Result<()> {
    let options = build_options(marker, window, delimiter)?;
    info!(file = %file.display(), keys = keys.len(), "Extracting fields");

    let report =
        tokio::task::spawn_blocking(move || extract_fields(&file, keys.as_slice(), &options))
            .await
            .context("Extraction task failed")??;

    super::print_output(output_format, |formatter| {
        formatter.format_fields(&report.fields)
    })?;

    match report.read_error {
        Some(source) => {
            warn!(units_read = report.units_read, error = %source, "Scan ended early");
            Err(PartialScanError {
                units_read: report.units_read,
                source,
            }
            .into())
        }
        None => Ok(()),
    }
}

fn build_options(
    marker: Option<String>,
    window: Option<usize>,
    delimiter: Option<char>,
) -> Result<ExtractOptions> {
    let mut options = ExtractOptions::default();
    if let Some(marker) = marker {
        options = options.with_marker(marker);
    }
    if let Some(window) = window {
        options = options.with_window(window);
    }
    if let Some(delimiter) = delimiter {
        let byte = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Delimiter must be a single ASCII character, got {:?}", delimiter))?;
        options = options.with_mode(ScanMode::Records(byte));
    }
    Ok(options)
}
