mod redact;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pii-redactor")]
#[command(version)]
#[command(
    about = "Mask PII fields inside the JSON payloads of a record_id,data_json CSV file",
    long_about = None
)]
#[command(after_help = "Output is written to redacted_output_candidate_full_name.csv \
in the current directory.")]
pub struct Cli {
    /// Input CSV file with record_id and data_json columns
    pub input: PathBuf,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    redact::run(cli.input)
}
