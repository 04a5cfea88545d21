use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Upstream request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::HttpError(_) | ReportError::UpstreamStatusError { .. } => {
                ErrorCategory::Network
            }
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ReportError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 上游暫時失敗，下次請求可能就恢復
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// True for failures of the upstream sheet fetch (transport or status).
    pub fn is_fetch_failure(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::HttpError(e) if e.is_timeout() => {
                "The report spreadsheet did not answer in time".to_string()
            }
            ReportError::HttpError(_) => "Could not reach the report spreadsheet".to_string(),
            ReportError::UpstreamStatusError { status, .. } => {
                format!("The report spreadsheet answered with status {}", status)
            }
            ReportError::IoError(e) => format!("File system error: {}", e),
            ReportError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ReportError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::HttpError(_) => {
                "Check network connectivity and that the spreadsheet is published for export"
            }
            ReportError::UpstreamStatusError { .. } => {
                "Verify the sheet id and gid, and that the sheet is shared publicly"
            }
            ReportError::IoError(_) => "Check file paths and permissions",
            ReportError::ConfigValidationError { .. } => {
                "Review the configuration file syntax"
            }
            ReportError::InvalidConfigValueError { .. } => {
                "Fix the value of the reported setting"
            }
            ReportError::MissingConfigError { .. } => {
                "Provide the setting via flag, environment variable or config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
