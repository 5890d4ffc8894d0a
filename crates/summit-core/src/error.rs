//! Error types for summit-core
//!
//! Classification and filtering cannot fail. The errors here describe the
//! edges around them: an unavailable snapshot source, criteria text that
//! does not parse, or bad configuration.

use thiserror::Error;
use serde::{Deserialize, Serialize};
use summit_config::ConfigError;
use summit_source::SourceError;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Transfer or account source failed
    SourceUnavailable,
    /// Filter criteria could not be parsed
    InvalidCriteria,
    /// Configuration error
    ConfigError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::SourceUnavailable => write!(f, "SOURCE_UNAVAILABLE"),
            ErrorCode::InvalidCriteria => write!(f, "INVALID_CRITERIA"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
        }
    }
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - the view degrades but keeps working
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - the process cannot continue
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for summit-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Snapshot source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("Invalid filter criteria: {message}")]
    InvalidCriteria { message: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::SourceUnavailable(_) => ErrorCode::SourceUnavailable,
            CoreError::InvalidCriteria { .. } => ErrorCode::InvalidCriteria,
            CoreError::ConfigError(_) => ErrorCode::ConfigError,
        }
    }

    /// Source failures only empty the view, so they are warnings
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::SourceUnavailable(_) => ErrorSeverity::Warning,
            CoreError::InvalidCriteria { .. } => ErrorSeverity::Error,
            CoreError::ConfigError(_) => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::SourceUnavailable(source) => {
                if let SourceError::DuplicateId { id } = source {
                    details = details.with_detail(serde_json::json!({ "transfer_id": id }));
                }
                details = details
                    .with_suggestion("Check that the transfer and account files exist and are readable.".to_string())
                    .with_suggestion("The view shows no transactions until the next successful refresh.".to_string());
            }
            CoreError::InvalidCriteria { .. } => {
                details = details
                    .with_suggestion("Type filter must be one of: all, income, expense.".to_string())
                    .with_suggestion("Date window must be one of: 7, 30, 90, all.".to_string());
            }
            CoreError::ConfigError(config) => {
                for hint in config.to_details().hints {
                    details = details.with_suggestion(hint);
                }
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    pub fn new(operation: String) -> Self {
        Self {
            operation,
            data: serde_json::json!({}),
        }
    }

    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger: Send + Sync {
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Debug, Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Warning => log::warn!(
                target: "summit::error",
                "[{}] {} - Operation: {} - Data: {}",
                error.code(),
                error,
                context.operation,
                context.data
            ),
            _ => log::error!(
                target: "summit::error",
                "[{}] {} - Operation: {} - Data: {}",
                error.code(),
                error.to_details(),
                context.operation,
                context.data
            ),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::SourceUnavailable.to_string(), "SOURCE_UNAVAILABLE");
        assert_eq!(ErrorCode::InvalidCriteria.to_string(), "INVALID_CRITERIA");
    }

    #[test]
    fn test_core_error_code_and_severity() {
        let error = CoreError::from(SourceError::Unavailable { message: "offline".to_string() });
        assert_eq!(error.code(), ErrorCode::SourceUnavailable);
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        let error = CoreError::from(ConfigError::MissingField { field: "display.currency".to_string() });
        assert_eq!(error.code(), ErrorCode::ConfigError);
        assert_eq!(error.severity(), ErrorSeverity::Critical);

        let error = CoreError::InvalidCriteria { message: "Invalid date window: 14".to_string() };
        assert_eq!(error.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_duplicate_id_details() {
        let error = CoreError::from(SourceError::DuplicateId { id: 42 });
        let details = error.to_details();
        assert_eq!(details.code, ErrorCode::SourceUnavailable);
        assert_eq!(details.details, Some(serde_json::json!({ "transfer_id": 42 })));
        assert!(!details.suggestions.is_empty());
    }

    #[test]
    fn test_config_suggestions_carry_over() {
        let error = CoreError::from(ConfigError::FileNotFound { path: "summit.yaml".into() });
        let details = error.to_details();
        assert!(details.suggestions.iter().any(|s| s.contains("--config")));
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("refresh".to_string())
            .with_data("source", serde_json::json!("transfers"));
        assert_eq!(context.operation, "refresh");
        assert_eq!(context.data["source"], "transfers");
    }
}
