//! Relay configuration, read from flags and the environment.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use super::message::{origin_of, OriginAllowList};
use super::page::RetryPolicy;

/// Value of `TRUSTED_ORIGINS` that lifts the origin restriction.
pub const ANY_ORIGIN: &str = "*";

#[derive(Parser, Debug, Clone)]
#[command(name = "folio-relay", version, about = "OAuth popup relay for the portfolio CMS editor")]
pub struct RelayArgs {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// OAuth application client id
    #[arg(long, env = "GITHUB_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OAuth application client secret
    #[arg(long, env = "GITHUB_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Public URL of the site the CMS editor runs on
    #[arg(long, env = "SITE_URL", default_value = "http://localhost:3000")]
    pub site_url: String,

    /// Redirect URI registered with the provider (default: <SITE_URL>/api/callback)
    #[arg(long, env = "OAUTH_REDIRECT_URI")]
    pub redirect_uri: Option<String>,

    #[arg(long, env = "OAUTH_SCOPE", default_value = "repo,user")]
    pub scope: String,

    #[arg(long, env = "OAUTH_AUTHORIZE_URL", default_value = "https://github.com/login/oauth/authorize")]
    pub authorize_url: String,

    #[arg(long, env = "OAUTH_TOKEN_URL", default_value = "https://github.com/login/oauth/access_token")]
    pub token_url: String,

    /// Provider name used in the relayed message
    #[arg(long, env = "OAUTH_PROVIDER", default_value = "github")]
    pub provider: String,

    /// Origins allowed to receive the token (comma separated, default: origin of SITE_URL).
    /// `*` posts to any origin.
    #[arg(long, env = "TRUSTED_ORIGINS", value_delimiter = ',')]
    pub trusted_origins: Vec<String>,

    /// Answer a callback without a code with 400 instead of restarting the flow
    #[arg(long, env = "STRICT_CALLBACK", default_value = "false")]
    pub strict_callback: bool,

    #[arg(long, env = "RELAY_RETRY_INTERVAL_MS", default_value = "100")]
    pub retry_interval_ms: u64,

    #[arg(long, env = "RELAY_MAX_ATTEMPTS", default_value = "50")]
    pub max_attempts: u32,

    /// Timeout for the token exchange request
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value = "10000")]
    pub request_timeout_ms: u64,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl RelayArgs {
    fn site_base(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    pub fn callback_uri(&self) -> String {
        match &self.redirect_uri {
            Some(uri) if !uri.trim().is_empty() => uri.trim().to_string(),
            _ => format!("{}/api/callback", self.site_base()),
        }
    }

    /// Where a callback without a code sends the browser.
    pub fn auth_uri(&self) -> String {
        format!("{}/api/auth", self.site_base())
    }

    /// Both credentials, when configured and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let id = self.client_id.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let secret = self.client_secret.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((id, secret))
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn origin_allow_list(&self) -> OriginAllowList {
        let configured: Vec<&str> = self
            .trusted_origins
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if configured.iter().any(|s| *s == ANY_ORIGIN) {
            return OriginAllowList::default();
        }
        if configured.is_empty() {
            return OriginAllowList::new(origin_of(&self.site_url));
        }
        OriginAllowList::new(configured)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval_ms: self.retry_interval_ms.max(1),
            max_attempts: self.max_attempts.max(1),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
