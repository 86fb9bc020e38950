//! The popup page returned by the callback. Its script hands the result to
//! the window that opened the popup.

use serde_json::Value;

use super::message::{OriginAllowList, RelayMessage};

/// How often and how long the page reposts its message to the opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval_ms: u64,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            max_attempts: 50,
        }
    }
}

const RELAY_SCRIPT: &str = r#"(function () {
__SETTINGS__
  var attempts = 0;
  var timer = null;

  function stop() {
    if (timer !== null) {
      clearInterval(timer);
      timer = null;
    }
  }

  function finish(delayMs) {
    stop();
    setTimeout(function () { window.close(); }, delayMs);
  }

  function post(target) {
    attempts += 1;
    if (targets.length === 0) {
      target.postMessage(message, "*");
      return;
    }
    targets.forEach(function (origin) { target.postMessage(message, origin); });
  }

  if (!window.opener) {
    if (fallbackUser !== null) {
      localStorage.setItem("netlify-cms-user", JSON.stringify(fallbackUser));
      window.location.href = "/admin/";
    }
    return;
  }

  window.addEventListener("message", function (event) {
    if (targets.length > 0 && targets.indexOf(event.origin) === -1) return;
    if (event.data !== handshake || !event.source) return;
    event.source.postMessage(message, targets.length === 0 ? "*" : event.origin);
    finish(1000);
  });
  window.addEventListener("beforeunload", stop);

  post(window.opener);
  timer = setInterval(function () {
    if (attempts >= maxAttempts) {
      finish(0);
      return;
    }
    post(window.opener);
  }, intervalMs);
})();"#;

/// JSON for embedding inside a `<script>` element.
pub fn script_json(value: &Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn relay_script(message: &RelayMessage, origins: &OriginAllowList, policy: RetryPolicy) -> String {
    let fallback = match message {
        RelayMessage::Success { provider, token } => serde_json::json!({ "token": token, "provider": provider }),
        _ => Value::Null,
    };
    let handshake = RelayMessage::Authorizing {
        provider: message.provider().to_string(),
    };
    let settings = format!(
        "  var handshake = {};\n  var message = {};\n  var targets = {};\n  var fallbackUser = {};\n  var intervalMs = {};\n  var maxAttempts = {};",
        script_json(&Value::from(handshake.to_wire())),
        script_json(&Value::from(message.to_wire())),
        script_json(&Value::from(origins.origins().to_vec())),
        script_json(&fallback),
        policy.interval_ms,
        policy.max_attempts,
    );
    RELAY_SCRIPT.replacen("__SETTINGS__", &settings, 1)
}

fn document(title: &str, heading: &str, detail: &str, background: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
      body {{
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        display: flex;
        align-items: center;
        justify-content: center;
        height: 100vh;
        margin: 0;
        background: {background};
        color: white;
      }}
      .container {{ text-align: center; }}
      .spinner {{
        border: 4px solid rgba(255,255,255,0.3);
        border-top: 4px solid white;
        border-radius: 50%;
        width: 40px;
        height: 40px;
        animation: spin 1s linear infinite;
        margin: 20px auto;
      }}
      @keyframes spin {{ 0% {{ transform: rotate(0deg); }} 100% {{ transform: rotate(360deg); }} }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="spinner"></div>
      <h2>{heading}</h2>
      <p>{detail}</p>
    </div>
    <script>
{script}
    </script>
  </body>
</html>
"#,
        title = escape_html(title),
        heading = escape_html(heading),
        detail = escape_html(detail),
        background = background,
        script = script,
    )
}

pub fn render_success(provider: &str, token: &str, origins: &OriginAllowList, policy: RetryPolicy) -> String {
    let message = RelayMessage::Success {
        provider: provider.to_string(),
        token: token.to_string(),
    };
    document(
        "Authenticating...",
        "Authentication Successful!",
        "Redirecting to CMS...",
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        &relay_script(&message, origins, policy),
    )
}

pub fn render_error(provider: &str, error: &str, origins: &OriginAllowList, policy: RetryPolicy) -> String {
    let message = RelayMessage::Error {
        provider: provider.to_string(),
        message: error.to_string(),
    };
    document(
        "Authentication failed",
        "Authentication Failed",
        error,
        "linear-gradient(135deg, #e0566b 0%, #8e2d4a 100%)",
        &relay_script(&message, origins, policy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> OriginAllowList {
        OriginAllowList::new(["https://example.net"])
    }

    #[test]
    fn success_page_posts_to_trusted_origin() {
        let html = render_success("github", "gho_abc", &site(), RetryPolicy::default());
        assert!(html.contains("authorization:github:success:"));
        assert!(html.contains(r#"var targets = ["https://example.net"];"#));
        assert!(html.contains("var intervalMs = 100;"));
        assert!(html.contains("var maxAttempts = 50;"));
        assert!(html.contains(r#"var handshake = "authorizing:github";"#));
        assert!(html.contains("event.data !== handshake"));
    }

    #[test]
    fn empty_allow_list_posts_anywhere() {
        let html = render_success("github", "t", &OriginAllowList::default(), RetryPolicy::default());
        assert!(html.contains("var targets = [];"));
    }

    #[test]
    fn script_breakout_is_escaped() {
        let html = render_success("github", "</script><script>alert(1)</script>", &site(), RetryPolicy::default());
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn error_page_has_no_storage_fallback() {
        let policy = RetryPolicy {
            interval_ms: 250,
            max_attempts: 8,
        };
        let html = render_error("github", "Access <denied>", &site(), policy);
        assert!(html.contains("authorization:github:error:Access \\u003cdenied\\u003e"));
        assert!(html.contains("<p>Access &lt;denied&gt;</p>"));
        assert!(html.contains("var fallbackUser = null;"));
        assert!(html.contains("var intervalMs = 250;"));
        assert!(html.contains("var maxAttempts = 8;"));
    }

    #[test]
    fn success_page_keeps_storage_fallback() {
        let html = render_success("github", "tok", &site(), RetryPolicy::default());
        assert!(html.contains("var fallbackUser = {"));
        assert!(html.contains(r#""token":"tok""#));
        assert!(html.contains("window.location.href = \"/admin/\""));
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
