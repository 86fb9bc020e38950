use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Client credentials are not configured on the server.
    #[error("{0}")]
    Configuration(String),

    #[error("missing authorization code")]
    MissingCode,

    /// The identity provider answered with an error payload.
    #[error("{description}")]
    Provider { description: String },

    /// The token exchange could not be completed. The detail is for logs only.
    #[error("token exchange failed: {0}")]
    Transport(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Configuration(_) | RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::MissingCode | RelayError::Provider { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Text safe to show to the browser.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::Transport(_) => "Authentication failed".to_string(),
            other => other.to_string(),
        }
    }

    pub fn json_body(&self) -> String {
        serde_json::json!({ "error": self.public_message() }).to_string()
    }
}
