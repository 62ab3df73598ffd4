//! CLI handler for redacting a CSV file.

use pii_redactor::redactor::{RedactConfig, RedactStats, Redactor, DEFAULT_OUTPUT};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Run the redaction on `input`, writing to the fixed output file
pub fn run(input: PathBuf) -> anyhow::Result<()> {
    let config = RedactConfig::builder()
        .input(input)
        .output(PathBuf::from(DEFAULT_OUTPUT))
        .progress(std::io::stderr().is_terminal())
        .build()?;
    config.validate()?;

    let output = config.output.clone();
    let mut redactor = Redactor::new(config);
    let stats = redactor.run()?;

    output_stats(&stats);
    output_warnings(&stats);
    println!("Redacted output written to {}", output.display());

    Ok(())
}

fn output_stats(stats: &RedactStats) {
    eprintln!("Redaction complete:");
    eprintln!("  Rows processed: {}", stats.rows_processed);
    eprintln!("  Rows with PII: {}", stats.rows_with_pii);
    eprintln!("  Malformed rows: {}", stats.malformed_rows);

    if !stats.fields_masked.is_empty() {
        eprintln!("  Fields masked:");
        for (field, count) in &stats.fields_masked {
            eprintln!("    {}: {}", field, count);
        }
    }
}

fn output_warnings(stats: &RedactStats) {
    if stats.warnings.is_empty() {
        return;
    }

    eprintln!(
        "Warnings ({} of {} rows had a malformed payload):",
        stats.malformed_rows, stats.rows_processed
    );
    for warning in &stats.warnings {
        eprintln!("  - {}", warning);
    }
    let unlisted = stats.malformed_rows - stats.warnings.len() as u64;
    if unlisted > 0 {
        eprintln!("  ... and {} more", unlisted);
    }
}
