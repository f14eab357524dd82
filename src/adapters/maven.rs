use crate::domain::ports::TreeSource;
use crate::utils::error::{Result, ScriptError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

pub const WRAPPER: &str = "mvnw";
pub const DEFAULT_COMMAND: &str = "mvn";
pub const TREE_ARGS: [&str; 2] = ["dependency:tree", "-DoutputType=text"];

#[derive(Debug, Clone, Default)]
pub struct MavenSettings {
    /// Explicit executable; `None` picks `./mvnw` when present, else `mvn`.
    pub command: Option<String>,
    /// Replaces the default `dependency:tree -DoutputType=text` arguments.
    pub args: Option<Vec<String>>,
    pub working_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct MavenRunner {
    settings: MavenSettings,
}

impl MavenRunner {
    pub fn new(settings: MavenSettings) -> Self {
        Self { settings }
    }

    fn working_dir(&self) -> &Path {
        self.settings
            .working_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
    }

    /// `./mvnw` if the wrapper exists in the working directory, otherwise `mvn`
    pub fn resolve_command(&self) -> String {
        if let Some(command) = &self.settings.command {
            return command.clone();
        }
        if self.working_dir().join(WRAPPER).exists() {
            format!("./{}", WRAPPER)
        } else {
            DEFAULT_COMMAND.to_string()
        }
    }

    pub fn resolve_args(&self) -> Vec<String> {
        match &self.settings.args {
            Some(args) => args.clone(),
            None => TREE_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[async_trait]
impl TreeSource for MavenRunner {
    async fn fetch_tree(&self) -> Result<String> {
        let program = self.resolve_command();
        let args = self.resolve_args();
        tracing::info!("Running {} {}", program, args.join(" "));

        let mut cmd = Command::new(&program);
        cmd.args(&args)
            .current_dir(self.working_dir())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.settings.timeout {
            Some(timeout) => tokio::time::timeout(timeout, cmd.output())
                .await
                .map_err(|_| ScriptError::Timeout {
                    seconds: timeout.as_secs(),
                })?,
            None => cmd.output().await,
        }
        .map_err(|source| ScriptError::MavenNotStarted {
            command: program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::debug!("Maven stdout: {}", String::from_utf8_lossy(&output.stdout));
            return Err(ScriptError::MavenFailed {
                code: output.status.code(),
                stderr,
            });
        }

        tracing::debug!("Maven produced {} bytes of output", output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.resolve_command(), self.resolve_args().join(" "))
    }
}
