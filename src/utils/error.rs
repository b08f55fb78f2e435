use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid color: {input:?}")]
    InvalidColor { input: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unsupported palette type: {value}")]
    UnsupportedHarmony { value: String },

    #[error("Unsupported simulation type: {value}")]
    UnsupportedSimulation { value: String },

    #[error("Unsupported export format: {value}")]
    UnsupportedFormat { value: String },

    #[error("PNG encoding failed: {0}")]
    EncodingError(#[from] png::EncodingError),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 請求內容有誤，回傳 4xx
    Client,
    /// 色彩函式庫或編碼器失敗，回傳 5xx
    Server,
    Configuration,
}

impl ChartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChartError::InvalidColor { .. }
            | ChartError::MissingField { .. }
            | ChartError::InvalidInput { .. }
            | ChartError::UnsupportedHarmony { .. }
            | ChartError::UnsupportedSimulation { .. }
            | ChartError::UnsupportedFormat { .. } => ErrorCategory::Client,
            ChartError::EncodingError(_) | ChartError::TaskError(_) | ChartError::IoError(_) => {
                ErrorCategory::Server
            }
            ChartError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Client
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChartError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is not valid: {}", field, reason)
            }
            ChartError::IoError(e) => format!("Could not start the server: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
