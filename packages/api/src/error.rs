use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] and form validation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response. `message` is the backend's `{"message": ...}` when present.
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_displays_message_only() {
        let err = ApiError::Backend {
            status: 400,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::Backend {
            status: 401,
            message: "No token".into(),
        };
        assert!(err.is_unauthorized());
        assert!(ApiError::Validation("x".into()).status().is_none());
    }
}
