//! Configuration types for the redactor.

use std::path::PathBuf;

/// Output file written by the CLI, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "redacted_output_candidate_full_name.csv";

/// Runtime configuration for redaction
#[derive(Debug)]
pub struct RedactConfig {
    /// Input CSV file
    pub input: PathBuf,
    /// Output CSV file
    pub output: PathBuf,
    /// Show progress
    pub progress: bool,
}

impl RedactConfig {
    /// Create a new builder
    pub fn builder() -> RedactConfigBuilder {
        RedactConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.input.exists() {
            anyhow::bail!("Input file not found: {:?}", self.input);
        }
        if !self.input.is_file() {
            anyhow::bail!("Input path is not a file: {:?}", self.input);
        }
        Ok(())
    }
}

/// Builder for RedactConfig
#[derive(Default)]
pub struct RedactConfigBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    progress: bool,
}

impl RedactConfigBuilder {
    pub fn input(mut self, path: PathBuf) -> Self {
        self.input = Some(path);
        self
    }

    pub fn output(mut self, path: PathBuf) -> Self {
        self.output = Some(path);
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Build the RedactConfig
    pub fn build(self) -> anyhow::Result<RedactConfig> {
        let input = self
            .input
            .ok_or_else(|| anyhow::anyhow!("Input file is required"))?;
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(RedactConfig {
            input,
            output,
            progress: self.progress,
        })
    }
}
