#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::MavenSettings;
use crate::app::pipelines::dependency_pipeline::ReportOptions;
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, ScriptError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_positive_number, Validate};
use std::path::PathBuf;

/// Fully resolved settings for `analyze-deps` (TOML file + command line).
#[derive(Debug, Clone, Default)]
pub struct DepsConfig {
    pub maven: MavenSettings,
    pub report: ReportOptions,
    /// Read a saved tree instead of running Maven.
    pub input: Option<PathBuf>,
    pub verbose: bool,
    pub json_logs: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    pub format: OutputFormat,
    pub verbose: bool,
}

pub fn parse_format(field: &str, value: &str) -> Result<OutputFormat> {
    match value.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(ScriptError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Valid formats: text, json, csv".to_string(),
        }),
    }
}

impl Validate for DepsConfig {
    fn validate(&self) -> Result<()> {
        if let Some(command) = &self.maven.command {
            validate_non_empty_string("maven.command", command)?;
        }
        if let Some(dir) = &self.maven.working_dir {
            validate_path("maven.working_dir", &dir.to_string_lossy())?;
            if !dir.is_dir() {
                return Err(ScriptError::InvalidConfigValueError {
                    field: "maven.working_dir".to_string(),
                    value: dir.display().to_string(),
                    reason: "Not a directory".to_string(),
                });
            }
        }
        if let Some(timeout) = self.maven.timeout {
            validate_positive_number("maven.timeout_seconds", timeout.as_secs(), 1)?;
        }
        if let Some(input) = &self.input {
            validate_path("input", &input.to_string_lossy())?;
        }
        Ok(())
    }
}
