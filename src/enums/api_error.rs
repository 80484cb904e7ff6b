use thiserror::Error;

/// Failures at the HTTP client boundary, before they are attributed to a user operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("No authentication token found")]
    MissingToken,

    #[error("HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Decode Error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Drops the backend's message so list loads report the HTTP status text.
    pub fn without_message(self) -> Self {
        match self {
            Self::Status { status, status_text, .. } => Self::Status { status, status_text, message: None },
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_message_keeps_status_text() {
        let error = ApiError::Status { status: 503, status_text: "Service Unavailable".to_string(), message: Some("db down".to_string()) };
        assert_eq!(
            error.without_message(),
            ApiError::Status { status: 503, status_text: "Service Unavailable".to_string(), message: None }
        );
        assert_eq!(ApiError::MissingToken.without_message(), ApiError::MissingToken);
    }
}
