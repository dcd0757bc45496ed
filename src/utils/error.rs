use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Holiday API request failed: {0}")]
    HolidayApiError(#[from] reqwest::Error),

    #[error("Holiday API returned {status} for {url}")]
    HolidayApiStatus { status: u16, url: String },

    #[error("Holiday lookup timed out after {timeout_ms}ms")]
    LookupTimeout { timeout_ms: u128 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Config,
    System,
}

impl ErrorCategory {
    /// Process exit code used by the CLI for this category.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Lookup => 3,
            ErrorCategory::System => 4,
        }
    }
}

impl HoursError {
    pub fn invalid_timestamp(input: &str, reason: impl Into<String>) -> Self {
        HoursError::InvalidTimestamp {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HoursError::InvalidTimestamp { .. } => ErrorCategory::Input,
            HoursError::HolidayApiError(_)
            | HoursError::HolidayApiStatus { .. }
            | HoursError::LookupTimeout { .. }
            | HoursError::SerializationError(_) => ErrorCategory::Lookup,
            HoursError::ConfigError { .. }
            | HoursError::InvalidConfigValueError { .. }
            | HoursError::ValidationError { .. } => ErrorCategory::Config,
            HoursError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Failures while fetching or decoding holiday data.
    pub fn is_lookup_failure(&self) -> bool {
        self.category() == ErrorCategory::Lookup
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HoursError::InvalidTimestamp { input, .. } => format!(
                "Could not read '{}'. Use DD/MM/YYYY HH:mm or YYYY-MM-DD HH:mm",
                input
            ),
            HoursError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            HoursError::HolidayApiError(e) if e.is_timeout() => {
                "The holiday service did not answer in time".to_string()
            }
            HoursError::HolidayApiError(_) => {
                "Could not reach the holiday service; check --holiday-api".to_string()
            }
            HoursError::HolidayApiStatus { status, .. } => {
                format!("The holiday service answered with HTTP {}", status)
            }
            HoursError::SerializationError(_) => {
                "The holiday service sent a response that is not a holiday list".to_string()
            }
            HoursError::IoError(e) => format!("Could not read file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HoursError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_fail_open() {
        assert!(HoursError::LookupTimeout { timeout_ms: 5000 }.is_lookup_failure());
        assert!(HoursError::HolidayApiStatus {
            status: 500,
            url: "http://localhost/2025".to_string()
        }
        .is_lookup_failure());
        assert!(!HoursError::invalid_timestamp("x", "bad").is_lookup_failure());
    }

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(HoursError::invalid_timestamp("x", "bad").exit_code(), 1);
        assert_eq!(
            HoursError::ConfigError {
                message: "bad toml".to_string()
            }
            .exit_code(),
            2
        );
        assert_eq!(HoursError::LookupTimeout { timeout_ms: 5000 }.exit_code(), 3);
        let io = HoursError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), 4);
    }

    #[test]
    fn test_user_friendly_message_for_status() {
        let err = HoursError::HolidayApiStatus {
            status: 503,
            url: "http://localhost/2025".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "The holiday service answered with HTTP 503"
        );
    }

    #[test]
    fn test_user_friendly_message_for_timestamp() {
        let err = HoursError::invalid_timestamp("31-12-2025", "unrecognised format");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("DD/MM/YYYY HH:mm"));
    }
}
