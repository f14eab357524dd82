use crate::core::seed::{render_seed, seed_entries};
use crate::core::{OutputFormat, Pipeline, ReportSink, SeedEntry};
use crate::utils::error::Result;

/// Dry-run seeding: reports what would be inserted, touches no database.
pub struct SeedPipeline<S: ReportSink> {
    sink: S,
    format: OutputFormat,
}

impl<S: ReportSink> SeedPipeline<S> {
    pub fn new(sink: S, format: OutputFormat) -> Self {
        Self { sink, format }
    }
}

#[async_trait::async_trait]
impl<S: ReportSink> Pipeline for SeedPipeline<S> {
    type Extracted = Vec<SeedEntry>;
    type Transformed = Vec<String>;

    async fn extract(&self) -> Result<Vec<SeedEntry>> {
        Ok(seed_entries())
    }

    async fn transform(&self, data: Vec<SeedEntry>) -> Result<Vec<String>> {
        for entry in &data {
            tracing::debug!("Would insert {} {} records", entry.count, entry.entity);
        }
        render_seed(&data, self.format)
    }

    async fn load(&self, result: Vec<String>) -> Result<usize> {
        for line in &result {
            self.sink.write_line(line)?;
        }
        Ok(result.len())
    }
}
