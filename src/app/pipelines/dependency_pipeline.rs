use crate::core::parser::{parse_tree, ParseOptions};
use crate::core::{DependencyReport, OutputFormat, Pipeline, ReportSink, TreeSource};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Skip the per-scope grouping (`--security-only`).
    pub security_only: bool,
    pub parse: ParseOptions,
}

pub struct DependencyPipeline<T: TreeSource, S: ReportSink> {
    source: T,
    sink: S,
    options: ReportOptions,
}

impl<T: TreeSource, S: ReportSink> DependencyPipeline<T, S> {
    pub fn new(source: T, sink: S, options: ReportOptions) -> Self {
        Self {
            source,
            sink,
            options,
        }
    }
}

#[async_trait::async_trait]
impl<T: TreeSource, S: ReportSink> Pipeline for DependencyPipeline<T, S> {
    type Extracted = String;
    type Transformed = DependencyReport;

    async fn extract(&self) -> Result<String> {
        tracing::debug!("Reading dependency tree from {}", self.source.describe());
        self.source.fetch_tree().await
    }

    async fn transform(&self, data: String) -> Result<DependencyReport> {
        let dependencies = parse_tree(&data, self.options.parse);
        let report = DependencyReport::new(dependencies, !self.options.security_only);

        for (scope, count) in &report.summary.scopes {
            tracing::debug!("scope {}: {}", scope, count);
        }
        Ok(report)
    }

    async fn load(&self, result: DependencyReport) -> Result<usize> {
        let lines = result.render(self.options.format)?;
        for line in &lines {
            self.sink.write_line(line)?;
        }
        Ok(lines.len())
    }
}
