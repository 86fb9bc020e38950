//! Authorization-code exchange with the identity provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::error::RelayError;

/// Body of the token request.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
}

impl std::fmt::Debug for TokenRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenResponse {
    /// The token, or the provider's reason for not issuing one.
    pub fn into_token(self) -> Result<String, RelayError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            warn!(
                "Provider rejected the code: {} ({})",
                error,
                self.error_description.as_deref().unwrap_or("no description")
            );
            let description = self.error_description.filter(|d| !d.is_empty()).unwrap_or(error);
            return Err(RelayError::Provider { description });
        }
        match self.access_token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(token),
            None => {
                warn!("Provider response carried neither a token nor an error");
                Err(RelayError::Provider {
                    description: "provider response did not include an access token".to_string(),
                })
            }
        }
    }
}

/// One server-to-provider exchange per call. Implementations do not retry.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange(&self, request: &TokenRequest<'_>) -> Result<String, RelayError>;
}

pub struct GithubExchanger {
    client: reqwest::Client,
    token_url: String,
}

impl GithubExchanger {
    pub fn new(token_url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            token_url: token_url.into(),
        })
    }
}

#[async_trait]
impl TokenExchanger for GithubExchanger {
    async fn exchange(&self, request: &TokenRequest<'_>) -> Result<String, RelayError> {
        debug!("Exchanging code at {}", self.token_url);
        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Token exchange request failed: {}", e);
                RelayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body: TokenResponse = response.json().await.map_err(|e| {
            error!("Unreadable token response (HTTP {}): {}", status, e);
            RelayError::Transport(e.to_string())
        })?;
        body.into_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TokenResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn token_is_returned() {
        let token = parse(r#"{"access_token":"gho_abc","token_type":"bearer","scope":"repo"}"#)
            .into_token()
            .unwrap();
        assert_eq!(token, "gho_abc");
    }

    #[test]
    fn provider_error_prefers_description() {
        let err = parse(r#"{"error":"bad_verification_code","error_description":"The code is incorrect."}"#)
            .into_token()
            .unwrap_err();
        assert_eq!(err.to_string(), "The code is incorrect.");

        let err = parse(r#"{"error":"access_denied"}"#).into_token().unwrap_err();
        assert_eq!(err.to_string(), "access_denied");
    }

    #[test]
    fn empty_response_is_a_provider_error() {
        let err = parse("{}").into_token().unwrap_err();
        assert!(matches!(err, RelayError::Provider { .. }));
        assert_eq!(err.to_string(), "provider response did not include an access token");
    }

    #[test]
    fn request_debug_hides_secret() {
        let req = TokenRequest {
            client_id: "id",
            client_secret: "hunter2",
            code: "c0de",
        };
        let shown = format!("{:?}", req);
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("c0de"));
    }
}
