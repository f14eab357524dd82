use crate::utils::error::Result;
use async_trait::async_trait;

/// Where dependency tree text comes from (Maven, a saved file, memory).
#[async_trait]
pub trait TreeSource: Send + Sync {
    async fn fetch_tree(&self) -> Result<String>;

    fn describe(&self) -> String;
}

/// Where rendered report lines go.
pub trait ReportSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Extracted: Send;
    type Transformed: Send;

    async fn extract(&self) -> Result<Self::Extracted>;
    async fn transform(&self, data: Self::Extracted) -> Result<Self::Transformed>;
    /// 寫出報表，回傳輸出的行數
    async fn load(&self, result: Self::Transformed) -> Result<usize>;
}
