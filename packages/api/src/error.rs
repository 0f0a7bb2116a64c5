use thiserror::Error;

/// Message shown for connection failures.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server";

/// The two ways a backend call can fail.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status or a non-success envelope.
    #[error("request rejected{}: {}", status_suffix(.status), .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            status: None,
            message: Some(message.into()),
        }
    }

    /// Text to show the user: the backend's own message, else `default`.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => default.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::rejected("bad creds");
        assert_eq!(err.user_message("Login failed"), "bad creds");

        let err = ApiError::Rejected {
            status: Some(500),
            message: None,
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");

        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Login failed"), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::Rejected {
            status: Some(401),
            message: Some("Login required".to_string()),
        };
        assert_eq!(err.to_string(), "request rejected (401): Login required");
    }
}
