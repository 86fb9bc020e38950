//! OAuth popup relay for the headless CMS editor.
//!
//! `/api/auth` sends the browser to the provider, `/api/callback` trades the
//! returned code for a token and answers with a page that posts the result
//! back to the editor window that opened the popup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod message;
pub mod page;
pub mod provider;
pub mod server;

use std::sync::Arc;

pub use config::RelayArgs;
pub use error::RelayError;
pub use message::{OriginAllowList, RelayMessage};
pub use page::RetryPolicy;
pub use provider::{GithubExchanger, TokenExchanger, TokenRequest};

/// Shared, read-only state for every request.
pub struct RelayState {
    pub args: RelayArgs,
    pub origins: OriginAllowList,
    pub retry: RetryPolicy,
    pub exchanger: Arc<dyn TokenExchanger>,
}

impl RelayState {
    pub fn new(args: RelayArgs) -> Result<Self, RelayError> {
        let exchanger = GithubExchanger::new(args.token_url.clone(), args.request_timeout())?;
        Ok(Self::with_exchanger(args, Arc::new(exchanger)))
    }

    pub fn with_exchanger(args: RelayArgs, exchanger: Arc<dyn TokenExchanger>) -> Self {
        Self {
            origins: args.origin_allow_list(),
            retry: args.retry_policy(),
            args,
            exchanger,
        }
    }
}
