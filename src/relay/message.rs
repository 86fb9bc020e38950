//! Cross-window messages exchanged with the CMS editor, and the origins
//! allowed to receive them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayMessage {
    /// `authorization:<provider>:success:{"token":..,"provider":..}`
    Success { provider: String, token: String },
    /// `authorization:<provider>:error:<message>`
    Error { provider: String, message: String },
    /// `authorizing:<provider>`, sent by the opener to request the result.
    Authorizing { provider: String },
}

impl RelayMessage {
    pub fn provider(&self) -> &str {
        match self {
            RelayMessage::Success { provider, .. }
            | RelayMessage::Error { provider, .. }
            | RelayMessage::Authorizing { provider } => provider,
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            RelayMessage::Success { provider, token } => {
                let payload = serde_json::json!({ "token": token, "provider": provider });
                format!("authorization:{}:success:{}", provider, payload)
            }
            RelayMessage::Error { provider, message } => {
                format!("authorization:{}:error:{}", provider, message)
            }
            RelayMessage::Authorizing { provider } => format!("authorizing:{}", provider),
        }
    }
}

/// `scheme://host[:port]` of an http(s) URL, lowercased.
pub fn origin_of(url: &str) -> Option<String> {
    let (scheme, rest) = url.trim().split_once("://")?;
    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if authority.is_empty() || authority.contains('@') || authority.contains(char::is_whitespace) {
        return None;
    }
    Some(format!("{}://{}", scheme, authority.to_ascii_lowercase()))
}

/// Origins the relay page may post the result to. Empty means any origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginAllowList {
    origins: Vec<String>,
}

impl OriginAllowList {
    /// Entries that are not http(s) URLs are dropped.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for origin in origins.into_iter().filter_map(|o| origin_of(o.as_ref())) {
            if !list.contains(&origin) {
                list.push(origin);
            }
        }
        Self { origins: list }
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}
