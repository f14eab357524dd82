use super::toml_config::TomlConfig;
use super::{parse_format, DepsConfig, SeedConfig};
use crate::adapters::MavenSettings;
use crate::app::pipelines::dependency_pipeline::ReportOptions;
use crate::core::parser::ParseOptions;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "analyze-deps")]
#[command(about = "Analyze a Maven dependency tree and report dependency counts by scope")]
pub struct AnalyzeDepsArgs {
    /// Skip the per-scope grouping
    #[arg(long)]
    pub security_only: bool,

    /// Output format (overrides report.format in the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read a saved dependency:tree output instead of running Maven ("-" for stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Strip leading "[INFO] " log tags before parsing
    #[arg(long)]
    pub strip_log_prefix: bool,

    /// Maven executable (default: ./mvnw if present, else mvn)
    #[arg(long)]
    pub maven_cmd: Option<String>,

    /// Directory to run Maven in
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Give up on Maven after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl AnalyzeDepsArgs {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn into_config(self) -> Result<DepsConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        let maven = file.maven();
        let report = file.report();

        let format = match (self.format, report.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => parse_format("report.format", name)?,
            (None, None) => OutputFormat::default(),
        };

        Ok(DepsConfig {
            maven: MavenSettings {
                command: self.maven_cmd.or(maven.command),
                args: maven.args,
                working_dir: self.working_dir.or(maven.working_dir.map(PathBuf::from)),
                timeout: self
                    .timeout_secs
                    .or(maven.timeout_seconds)
                    .map(Duration::from_secs),
            },
            report: ReportOptions {
                format,
                security_only: self.security_only || report.security_only.unwrap_or(false),
                parse: ParseOptions {
                    strip_log_prefix: self.strip_log_prefix
                        || report.strip_log_prefix.unwrap_or(false),
                },
            },
            input: self.input,
            verbose: self.verbose,
            json_logs: file.json_logging(),
        })
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "seed-data")]
#[command(about = "Print the sample seed data (dry run, no database connection)")]
pub struct SeedDataArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<SeedDataArgs> for SeedConfig {
    fn from(args: SeedDataArgs) -> Self {
        Self {
            format: args.format,
            verbose: args.verbose,
        }
    }
}
