//! Tracing bootstrap shared by both binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set; otherwise this crate logs at `level` and
/// everything else at `info`.
pub fn default_filter(level: &str) -> String {
    format!("folio={},info", level.trim().to_ascii_lowercase())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level).into());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
