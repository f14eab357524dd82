use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Maven exited with status {code:?}: {stderr}")]
    MavenFailed { code: Option<i32>, stderr: String },

    #[error("Failed to run {command}: {source}")]
    MavenNotStarted {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Maven did not finish within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Subprocess,
    Configuration,
    Io,
    Output,
}

impl ScriptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScriptError::MavenFailed { .. }
            | ScriptError::MavenNotStarted { .. }
            | ScriptError::Timeout { .. } => ErrorCategory::Subprocess,
            ScriptError::ConfigError { .. }
            | ScriptError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScriptError::IoError(_) => ErrorCategory::Io,
            ScriptError::SerializationError(_) | ScriptError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Subprocess => {
                "Make sure mvn (or ./mvnw) is installed, then run `mvn dependency:tree` manually"
            }
            ErrorCategory::Configuration => "Check the command-line flags and the TOML config file",
            ErrorCategory::Io => "Check that the input file exists and is readable",
            ErrorCategory::Output => "Try again with --format text",
        }
    }

    /// 給使用者看的訊息，Maven 失敗時保留原始 stderr
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScriptError::MavenFailed { stderr, .. } => format!("Error running Maven: {}", stderr),
            ScriptError::Timeout { seconds } => {
                format!("Error running Maven: timed out after {}s", seconds)
            }
            ScriptError::MavenNotStarted { .. } => format!("Error running Maven: {}", self),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
