//! Redactor module for masking PII inside CSV datasets with JSON payloads.
//!
//! This module provides:
//! - A closed set of recognized PII fields (standalone and combinatorial)
//! - Masking strategies, one per value shape
//! - Per-record classification and transformation
//! - Streaming redaction of `record_id,data_json` CSV files

mod classifier;
mod config;
mod field;
mod record;
pub mod strategy;
mod transform;

pub use classifier::{classify, Classification, COMBINATION_THRESHOLD};
pub use config::{RedactConfig, RedactConfigBuilder, DEFAULT_OUTPUT};
pub use field::PiiField;
pub use record::Record;
pub use transform::{transform, Redaction};

use crate::progress::ProgressReader;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};

/// Input column holding the opaque record identifier
pub const RECORD_ID_COLUMN: &str = "record_id";
/// Input column holding the JSON payload
pub const DATA_JSON_COLUMN: &str = "data_json";
/// Header of the output CSV
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];
/// Payload written for rows whose `data_json` cannot be parsed
pub const EMPTY_PAYLOAD: &str = "{}";
/// Malformed-row messages kept in [`RedactStats::warnings`]
pub const MAX_WARNINGS: usize = 10;

/// Statistics from redaction operation
#[derive(Debug, Default)]
pub struct RedactStats {
    /// Number of data rows read
    pub rows_processed: u64,
    /// Number of rows flagged as PII
    pub rows_with_pii: u64,
    /// Number of rows whose payload could not be parsed
    pub malformed_rows: u64,
    /// Masked value count per field
    pub fields_masked: BTreeMap<PiiField, u64>,
    /// Messages for the first [`MAX_WARNINGS`] malformed rows
    pub warnings: Vec<String>,
}

/// Main redactor struct
pub struct Redactor {
    config: RedactConfig,
    stats: RedactStats,
}

impl Redactor {
    /// Create a new Redactor with the given configuration
    pub fn new(config: RedactConfig) -> Self {
        Self {
            config,
            stats: RedactStats::default(),
        }
    }

    /// Run the redaction from the input file to the output file
    pub fn run(&mut self) -> anyhow::Result<RedactStats> {
        let input = File::open(&self.config.input)
            .with_context(|| format!("Failed to open input file {:?}", self.config.input))?;
        let file_size = input.metadata()?.len();

        let output = File::create(&self.config.output)
            .with_context(|| format!("Failed to create output file {:?}", self.config.output))?;

        let progress_bar = if self.config.progress {
            let pb = ProgressBar::new(file_size);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {msg}",
                )?
                .progress_chars("█▓▒░  ")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb.set_message("Redacting rows...");
            Some(pb)
        } else {
            None
        };

        let stats = match progress_bar {
            Some(ref pb) => {
                let pb_clone = pb.clone();
                let reader = ProgressReader::new(input, move |bytes| pb_clone.set_position(bytes));
                self.process(reader, output)?
            }
            None => self.process(input, output)?,
        };

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        Ok(stats)
    }

    /// Redact CSV rows from `input`, writing the result CSV to `output`.
    ///
    /// Output is written row by row. Rows with a malformed payload are
    /// emitted as `{}` / `False` and processing continues.
    pub fn process<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> anyhow::Result<RedactStats> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input);
        let headers = reader
            .headers()
            .context("Failed to read CSV header")?
            .clone();
        let id_idx = column_index(&headers, RECORD_ID_COLUMN)?;
        let data_idx = column_index(&headers, DATA_JSON_COLUMN)?;

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(output);
        writer.write_record(OUTPUT_HEADER)?;

        for (idx, row) in reader.records().enumerate() {
            let row = row.with_context(|| format!("Failed to read CSV row {}", idx + 1))?;
            let line = row.position().map_or(idx as u64 + 2, |p| p.line());
            let record_id = row.get(id_idx).unwrap_or_default();

            let (payload, is_pii) = self.redact_row(line, record_id, row.get(data_idx))?;
            writer.write_record([record_id, payload.as_str(), pii_flag(is_pii)])?;
        }

        writer.flush()?;
        Ok(std::mem::take(&mut self.stats))
    }

    /// Redact one row's payload, returning the serialized record and PII flag
    fn redact_row(
        &mut self,
        line: u64,
        record_id: &str,
        payload: Option<&str>,
    ) -> anyhow::Result<(String, bool)> {
        self.stats.rows_processed += 1;

        let parsed = match payload {
            Some(payload) => Record::parse(payload),
            None => Err(anyhow::anyhow!("missing {} column", DATA_JSON_COLUMN)),
        };
        let record = match parsed {
            Ok(record) => record,
            Err(e) => {
                self.stats.malformed_rows += 1;
                if self.stats.warnings.len() < MAX_WARNINGS {
                    self.stats.warnings.push(format!(
                        "Line {} (record_id '{}'): malformed {}, written as {}: {}",
                        line, record_id, DATA_JSON_COLUMN, EMPTY_PAYLOAD, e
                    ));
                }
                return Ok((EMPTY_PAYLOAD.to_string(), false));
            }
        };

        let redaction = transform(&record);
        if redaction.pii_found {
            self.stats.rows_with_pii += 1;
        }
        for field in &redaction.masked {
            *self.stats.fields_masked.entry(*field).or_insert(0) += 1;
        }

        Ok((redaction.record.to_compact_json()?, redaction.pii_found))
    }
}

/// Find a required column in the CSV header
fn column_index(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow::anyhow!("Input is missing required column '{}'", name))
}

fn pii_flag(is_pii: bool) -> &'static str {
    if is_pii {
        "True"
    } else {
        "False"
    }
}
