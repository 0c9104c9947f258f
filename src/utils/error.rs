use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Random generation failed: {message}")]
    GenerationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Generation,
    Io,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TallyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TallyError::GenerationError { .. } => ErrorCategory::Generation,
            TallyError::IoError(_) => ErrorCategory::Io,
            TallyError::SerializationError(_) | TallyError::CsvError(_) => {
                ErrorCategory::Serialization
            }
            TallyError::ConfigError { .. }
            | TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Generation => ErrorSeverity::Critical,
            ErrorCategory::Io | ErrorCategory::Serialization | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TallyError::GenerationError { .. } => {
                "Check that the operating system entropy source is available"
            }
            TallyError::IoError(_) => "Check file paths and permissions",
            TallyError::SerializationError(_) | TallyError::CsvError(_) => {
                "Try the default text output format"
            }
            TallyError::ConfigError { .. } | TallyError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            TallyError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file or command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TallyError::GenerationError { .. } => {
                "Could not generate a random identifier".to_string()
            }
            TallyError::IoError(e) => format!("File or output error: {}", e),
            TallyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
