//! Request routing. Handlers never fail: every outcome is a response.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{HeaderValue, ACCEPT, ALLOW, CACHE_CONTROL, CONTENT_TYPE, LOCATION};
use hyper::{Method, Request, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::error::RelayError;
use super::page;
use super::provider::TokenRequest;
use super::RelayState;

pub type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CallbackQuery {
    code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

pub async fn route<B>(state: &RelayState, req: &Request<B>) -> Response<BoxBody> {
    if req.method() != Method::GET {
        let resp = json_response(StatusCode::METHOD_NOT_ALLOWED, &error_json("Method Not Allowed"));
        return with_header(resp, ALLOW, "GET");
    }

    match req.uri().path() {
        "/api/auth" => authorize(state),
        "/api/callback" => callback(state, req).await,
        "/health" => json_response(StatusCode::OK, r#"{"status":"ok"}"#),
        path => {
            debug!("No route for {}", path);
            json_response(
                StatusCode::NOT_FOUND,
                &serde_json::json!({ "error": "Not Found", "path": path }).to_string(),
            )
        }
    }
}

fn authorize(state: &RelayState) -> Response<BoxBody> {
    let Some(client_id) = state.args.client_id() else {
        warn!("Authorization requested but no client id is configured");
        let err = RelayError::Configuration("OAuth client id not configured".to_string());
        return json_response(err.status(), &err.json_body());
    };

    let nonce = Uuid::new_v4().simple().to_string();
    let redirect_uri = state.args.callback_uri();
    let params = [
        ("client_id", client_id),
        ("redirect_uri", redirect_uri.as_str()),
        ("scope", state.args.scope.as_str()),
        ("state", nonce.as_str()),
    ];
    let query = match serde_urlencoded::to_string(params) {
        Ok(query) => query,
        Err(e) => {
            error!("Could not encode authorize parameters: {}", e);
            return internal_error();
        }
    };

    let base = &state.args.authorize_url;
    let separator = if base.contains('?') { '&' } else { '?' };
    info!("Redirecting to {} provider", state.args.provider);
    redirect(format!("{}{}{}", base, separator, query))
}

async fn callback<B>(state: &RelayState, req: &Request<B>) -> Response<BoxBody> {
    let query: CallbackQuery = match serde_urlencoded::from_str(req.uri().query().unwrap_or_default()) {
        Ok(query) => query,
        Err(e) => {
            warn!("Malformed callback query: {}", e);
            CallbackQuery::default()
        }
    };

    let Some(code) = query.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
        if let Some(error) = query.error {
            warn!("Provider returned to the callback with an error: {}", error);
            let description = query.error_description.filter(|d| !d.is_empty()).unwrap_or(error);
            return failure(state, req, RelayError::Provider { description });
        }
        if state.args.strict_callback {
            return failure(state, req, RelayError::MissingCode);
        }
        debug!("Callback without code, restarting the flow");
        return redirect(state.args.auth_uri());
    };

    let Some((client_id, client_secret)) = state.args.credentials() else {
        warn!("Callback received but OAuth credentials are not configured");
        let err = RelayError::Configuration("OAuth credentials not configured".to_string());
        return failure(state, req, err);
    };

    let request = TokenRequest {
        client_id,
        client_secret,
        code,
    };
    match state.exchanger.exchange(&request).await {
        Ok(token) => {
            info!("Token exchange succeeded for {}", state.args.provider);
            let body = page::render_success(&state.args.provider, &token, &state.origins, state.retry);
            with_header(html_response(StatusCode::OK, body), CACHE_CONTROL, "no-store")
        }
        Err(err) => failure(state, req, err),
    }
}

/// HTML relay error page for browsers, JSON for everything else.
fn failure<B>(state: &RelayState, req: &Request<B>, err: RelayError) -> Response<BoxBody> {
    if prefers_html(req) {
        let body = page::render_error(&state.args.provider, &err.public_message(), &state.origins, state.retry);
        with_header(html_response(err.status(), body), CACHE_CONTROL, "no-store")
    } else {
        json_response(err.status(), &err.json_body())
    }
}

fn prefers_html<B>(req: &Request<B>) -> bool {
    req.headers()
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn full(body: impl Into<Bytes>) -> BoxBody {
    Full::new(body.into()).map_err(|never| match never {}).boxed()
}

fn internal_error() -> Response<BoxBody> {
    let mut resp = Response::new(full("Internal Server Error"));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}

fn build(status: StatusCode, content_type: &str, body: impl Into<Bytes>) -> Response<BoxBody> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .body(full(body))
        .unwrap_or_else(|e| {
            error!("Failed to build response: {}", e);
            internal_error()
        })
}

fn json_response(status: StatusCode, body: &str) -> Response<BoxBody> {
    build(status, JSON, body.to_string())
}

fn html_response(status: StatusCode, body: String) -> Response<BoxBody> {
    build(status, HTML, body)
}

fn redirect(location: String) -> Response<BoxBody> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, location)
        .header(CACHE_CONTROL, "no-store")
        .body(full(Bytes::new()))
        .unwrap_or_else(|e| {
            error!("Failed to build redirect: {}", e);
            internal_error()
        })
}

fn with_header(mut resp: Response<BoxBody>, name: hyper::header::HeaderName, value: &'static str) -> Response<BoxBody> {
    resp.headers_mut().insert(name, HeaderValue::from_static(value));
    resp
}
