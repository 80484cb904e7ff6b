use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::config::constants::MISSING_TOKEN_MESSAGE;
use crate::enums::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArcdeskError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Authentication errors
    AuthenticationError {
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Lookup errors
    NotFound {
        kind: String,
        key: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ArcdeskError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn auth_error(reason: &str) -> Self {
        Self::AuthenticationError {
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: None,
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn not_found(kind: &str, key: &str) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            key: key.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Maps a client-layer failure onto the operation the user asked for, so the
    /// message reads "Failed to fetch sessions: Not Found" rather than a raw status.
    pub fn from_api(operation: &str, error: ApiError) -> Self {
        match error {
            ApiError::MissingToken => Self::auth_error(MISSING_TOKEN_MESSAGE),
            ApiError::Status { status, status_text, message } => Self::NetworkError {
                operation: operation.to_string(),
                url: None,
                status_code: Some(status),
                reason: message.unwrap_or(status_text),
            },
            ApiError::Network(reason) => Self::network_error(operation, None, &reason),
            ApiError::Decode(reason) => Self::ParseError {
                content_type: "JSON".to_string(),
                line_number: None,
                reason,
                context: Some(operation.to_string()),
            },
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. }
            | Self::ValidationError { .. }
            | Self::ConfigurationError { .. }
            | Self::AuthenticationError { .. } => true,
            Self::ConfigurationFileError { .. }
            | Self::ParseError { .. }
            | Self::NotFound { .. }
            | Self::FileOperationError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } | Self::ParseError { .. } | Self::AuthenticationError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::NotFound { .. } => ErrorSeverity::Low,
        }
    }

    /// Short message without suggestions, suitable for an inline banner.
    pub fn banner(&self) -> String {
        match self {
            Self::AuthenticationError { reason } => reason.clone(),
            Self::NetworkError { operation, reason, .. } => format!("{operation}: {reason}"),
            Self::ValidationError { constraint, .. } => constraint.clone(),
            Self::NotFound { kind, key } => format!("{kind} '{key}' not found"),
            other => other.user_message(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and syntax")
            }
            Self::AuthenticationError { reason } => {
                format!("{reason}\n💡 Run 'arcdesk login' and try again")
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("{operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check your connection and reload");
                msg
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {ctx}"));
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = if value.is_empty() {
                    format!("{constraint} (field: {field})")
                } else {
                    format!("{constraint} (field: {field}, value: '{value}')")
                };
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::NotFound { kind, key } => format!("{kind} '{key}' not found"),
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for ArcdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ArcdeskError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for arcdesk operations
pub type ArcdeskResult<T> = Result<T, ArcdeskError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &ArcdeskError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Nothing was changed - you can retry the operation");
        }
    }
}

impl From<ApiError> for ArcdeskError {
    fn from(error: ApiError) -> Self {
        Self::from_api("API request", error)
    }
}

impl From<std::io::Error> for ArcdeskError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArcdeskError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for ArcdeskError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<reqwest::Error> for ArcdeskError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
