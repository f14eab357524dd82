use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ScriptEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScriptEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract / transform / load，回傳輸出的行數
    pub async fn run(&self) -> Result<usize> {
        let start = Instant::now();

        tracing::debug!("Extracting...");
        let raw = self.pipeline.extract().await?;

        tracing::debug!("Transforming...");
        let transformed = self.pipeline.transform(raw).await?;

        tracing::debug!("Loading...");
        let lines = self.pipeline.load(transformed).await?;

        tracing::info!("Wrote {} lines in {:?}", lines, start.elapsed());
        Ok(lines)
    }
}
