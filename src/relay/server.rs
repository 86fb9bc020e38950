//! HTTP/1 accept loop.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use super::handlers::{self, BoxBody};
use super::RelayState;

/// Serve until the process is stopped. Fails only if the listener cannot bind.
pub async fn run(state: Arc<RelayState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(state.args.listen).await?;
    info!("Relay listening on {}", listener.local_addr()?);
    info!("Callback URI: {}", state.args.callback_uri());

    if state.origins.is_empty() {
        warn!("No trusted origins: the token will be posted to any opener origin");
    } else {
        info!("Trusted origins: {}", state.origins.origins().join(", "));
    }
    if state.args.credentials().is_none() {
        warn!("GITHUB_CLIENT_ID / GITHUB_CLIENT_SECRET not set; the OAuth endpoints will answer 500");
    }

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

async fn handle_request(
    state: Arc<RelayState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> Result<Response<BoxBody>, hyper::Error> {
    // The query carries the authorization code; only the path is logged.
    info!("[{}] {} {}", addr, req.method(), req.uri().path());
    let (parts, _body) = req.into_parts();
    let req = Request::from_parts(parts, ());
    let response = handlers::route(&state, &req).await;
    info!("[{}] {} {} -> {}", addr, req.method(), req.uri().path(), response.status().as_u16());
    Ok(response)
}
