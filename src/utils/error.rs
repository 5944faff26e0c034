use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrainerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrainerError::IoError(_) | TrainerError::SerializationError(_) => ErrorCategory::Io,
            TrainerError::ConfigError { .. }
            | TrainerError::InvalidConfigValueError { .. }
            | TrainerError::MissingConfigError { .. } => ErrorCategory::Config,
            TrainerError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainerError::IoError(_) | TrainerError::SerializationError(_) => ErrorSeverity::High,
            TrainerError::ConfigError { .. }
            | TrainerError::InvalidConfigValueError { .. }
            | TrainerError::MissingConfigError { .. }
            | TrainerError::ValidationError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TrainerError::IoError(_) => "Check that file paths exist and are writable".to_string(),
            TrainerError::SerializationError(_) => {
                "Check the report path and available disk space".to_string()
            }
            TrainerError::ConfigError { .. }
            | TrainerError::InvalidConfigValueError { .. }
            | TrainerError::MissingConfigError { .. } => {
                "Run with --help or --list-presets to see accepted values".to_string()
            }
            TrainerError::ValidationError { .. } => {
                "Adjust the digit counts or the operation; see --help".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrainerError::IoError(e) => format!("File operation failed: {}", e),
            TrainerError::SerializationError(e) => {
                format!("Could not write the session report: {}", e)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrainerError>;
