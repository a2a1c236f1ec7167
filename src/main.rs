//! FLAIM nutrition normalizer
//!
//! Reads scraped products as JSON lines on stdin and writes one normalized
//! record per product to stdout.
//!
//! Input line: `{"source": "walmart", "product_code": "...", "nutrition": {...}}`

use std::io::{self, BufRead, Write};

use flaim_nutrition::config::NormalizerConfig;
use flaim_nutrition::loaders::{normalize_product, IngestError, RawProduct};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct RunSummary {
    normalized: usize,
    skipped: usize,
    failed: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries records only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("flaim_nutrition=info".parse()?))
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = NormalizerConfig::from_env()?;
    tracing::info!("Validating against {} nutrient columns", config.columns.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut summary = RunSummary::default();

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let product: RawProduct = match serde_json::from_str(&line) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Skipping line {}: {}", line_no + 1, e);
                summary.skipped += 1;
                continue;
            }
        };

        match normalize_product(&product, &config.columns) {
            Ok(normalized) => {
                serde_json::to_writer(&mut out, &normalized)?;
                out.write_all(b"\n")?;
                summary.normalized += 1;
            }
            Err(IngestError::Payload { retailer, error }) => {
                tracing::warn!(
                    "Skipping {} ({:?}): unexpected payload shape: {}",
                    product.product_code,
                    retailer,
                    error
                );
                summary.skipped += 1;
            }
            Err(e) => {
                tracing::error!("Failed to normalize {}: {}", product.product_code, e);
                summary.failed += 1;
            }
        }
    }
    out.flush()?;

    tracing::info!(
        "Done: {} normalized, {} skipped, {} failed",
        summary.normalized,
        summary.skipped,
        summary.failed
    );

    if summary.failed > 0 {
        return Err(format!("{} products failed normalization", summary.failed).into());
    }
    Ok(())
}
