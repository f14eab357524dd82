use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scope Maven reports when a tree line carries none.
pub const DEFAULT_SCOPE: &str = "compile";

/// One resolved artifact from a dependency tree line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    #[serde(rename = "type")]
    pub packaging: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub version: String,
    pub scope: String,
}

/// Dependency counts keyed by scope, ordered by scope name. The total is
/// always derived from the per-scope counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeSummary {
    pub scopes: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub entity: String,
    pub count: u32,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Parsed tree plus the options that shape its report.
#[derive(Debug, Clone)]
pub struct DependencyReport {
    pub dependencies: Vec<Dependency>,
    pub summary: ScopeSummary,
    pub include_scopes: bool,
}
