use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Word source request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Word list from {source_url} is empty")]
    EmptyWordList { source_url: String },

    #[error("Malformed data module: {message}")]
    ModuleFormat { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Filesystem,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::ApiError(_) => ErrorCategory::Network,
            GenError::IoError(_) => ErrorCategory::Filesystem,
            GenError::SerializationError(_)
            | GenError::EmptyWordList { .. }
            | GenError::ModuleFormat { .. } => ErrorCategory::Data,
            GenError::ConfigError { .. }
            | GenError::ConfigValidationError { .. }
            | GenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GenError::ApiError(e) if e.is_status() => {
                "The word source answered with an error status; check the URL with --source-url"
                    .to_string()
            }
            GenError::ApiError(_) => {
                "Check network connectivity and that the word source host is reachable".to_string()
            }
            GenError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            GenError::EmptyWordList { .. } => {
                "Point --source-url at a plaintext file with one word per line".to_string()
            }
            GenError::SerializationError(_) | GenError::ModuleFormat { .. } => {
                "Regenerate the data module instead of editing it by hand".to_string()
            }
            GenError::ConfigError { .. }
            | GenError::ConfigValidationError { .. }
            | GenError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again (see --help)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download the word list: {}", self),
            ErrorCategory::Filesystem => format!("Could not write the output file: {}", self),
            ErrorCategory::Data => format!("Could not build the table data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
