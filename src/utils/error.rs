use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Input must be a positive five-digit integer (10000-99999)";

#[derive(Error, Debug)]
pub enum MachineError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Verification failed: {failed} of {total} cases did not pass")]
    VerificationFailed { failed: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Verification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MachineError {
    pub fn validation() -> Self {
        MachineError::ValidationError {
            message: VALIDATION_MESSAGE.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MachineError::ValidationError { .. } => ErrorCategory::Input,
            MachineError::ConfigError { .. } | MachineError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            MachineError::IoError(_)
            | MachineError::SerializationError(_)
            | MachineError::CsvError(_) => ErrorCategory::System,
            MachineError::VerificationFailed { .. } => ErrorCategory::Verification,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Verification => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MachineError::ValidationError { .. } => {
                "Enter a whole number between 10000 and 99999 without decimals or quotes"
            }
            MachineError::ConfigError { .. } => "Check that the configuration file is valid TOML",
            MachineError::InvalidConfigValueError { .. } => {
                "Fix the named configuration field and run again"
            }
            MachineError::IoError(_) => "Check that the file exists and is readable",
            MachineError::SerializationError(_) | MachineError::CsvError(_) => {
                "Try a different output format"
            }
            MachineError::VerificationFailed { .. } => {
                "Inspect the failing cases above; the expected values may be wrong"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MachineError::ValidationError { message } => message.clone(),
            MachineError::ConfigError { message } => format!("Invalid configuration: {}", message),
            MachineError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            MachineError::IoError(e) => format!("Could not read file: {}", e),
            MachineError::SerializationError(_) | MachineError::CsvError(_) => {
                "Could not render the results".to_string()
            }
            MachineError::VerificationFailed { failed, total } => {
                format!("{} of {} verification cases failed", failed, total)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MachineError>;
