//! folio-relay: OAuth popup relay for the portfolio CMS editor.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use folio::relay::{server, RelayArgs, RelayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = RelayArgs::parse();
    folio::logging::init(&args.log_level);

    info!("folio-relay v{}", env!("CARGO_PKG_VERSION"));
    info!("Provider: {} (scope {})", args.provider, args.scope);
    info!(
        "Retry: every {}ms, {} attempts",
        args.retry_interval_ms, args.max_attempts
    );

    let state = Arc::new(RelayState::new(args)?);
    server::run(state).await?;
    Ok(())
}
