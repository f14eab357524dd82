pub mod engine;
pub mod parser;
pub mod report;
pub mod seed;
pub mod summary;

pub use crate::domain::model::{Dependency, DependencyReport, OutputFormat, ScopeSummary, SeedEntry};
pub use crate::domain::ports::{Pipeline, ReportSink, TreeSource};
pub use crate::utils::error::Result;
