use crate::domain::ports::TreeSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Reads a previously saved `dependency:tree` output; `-` means stdin.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

#[async_trait]
impl TreeSource for FileSource {
    async fn fetch_tree(&self) -> Result<String> {
        if self.is_stdin() {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            return Ok(text);
        }
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TreeSource for StaticSource {
    async fn fetch_tree(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "in-memory tree".to_string()
    }
}
