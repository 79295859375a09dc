use crate::core::delivery::Rejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Delivery date rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    HttpStatusError { status: u16 },

    #[error("Malformed shipment response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Data,
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

impl PickerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PickerError::Rejected(_) => ErrorCategory::Input,
            PickerError::ApiError(_) | PickerError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            PickerError::MalformedResponse { .. } => ErrorCategory::Data,
            PickerError::ConfigError { .. } | PickerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PickerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the person at the form, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PickerError::Rejected(rejection) => rejection.to_string(),
            PickerError::ApiError(e) => format!("Shipment list could not be loaded: {}", e),
            PickerError::HttpStatusError { status } => {
                format!("Shipment list could not be loaded (HTTP {})", status)
            }
            PickerError::MalformedResponse { .. } => {
                "Shipment list has an unexpected format".to_string()
            }
            PickerError::ConfigError { message } => format!("Invalid configuration: {}", message),
            PickerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            PickerError::IoError(e) => format!("File access failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PickerError::Rejected(_) => "Choose the next valid delivery day and submit again",
            PickerError::ApiError(_) => "Check that the shipment service is reachable",
            PickerError::HttpStatusError { .. } => "Check the endpoint URL and the service logs",
            PickerError::MalformedResponse { .. } => {
                "Check that the endpoint returns a list of pallets with a Waren array"
            }
            PickerError::ConfigError { .. } | PickerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            PickerError::IoError(_) => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
