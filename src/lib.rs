pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{AnalyzeDepsArgs, SeedDataArgs};
pub use crate::config::{DepsConfig, SeedConfig};

pub use crate::adapters::{FileSource, MavenRunner, MavenSettings, MemorySink, StaticSource, StdoutSink};
pub use crate::app::pipelines::{DependencyPipeline, SeedPipeline};
pub use crate::core::engine::ScriptEngine;
pub use crate::utils::error::{Result, ScriptError};
