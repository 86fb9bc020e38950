use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use http_body_util::BodyExt;
use hyper::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, LOCATION};
use hyper::{Method, Request, StatusCode};

use folio::relay::handlers::{route, BoxBody};
use folio::relay::{RelayArgs, RelayError, RelayState, TokenExchanger, TokenRequest};

enum Outcome {
    Token(&'static str),
    Denied,
    Unreachable,
}

struct FakeExchanger {
    calls: AtomicUsize,
    outcome: Outcome,
}

impl FakeExchanger {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchanger for FakeExchanger {
    async fn exchange(&self, request: &TokenRequest<'_>) -> Result<String, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(request.client_id, "client-id");
        assert_eq!(request.client_secret, "client-secret");
        match self.outcome {
            Outcome::Token(token) => Ok(token.to_string()),
            Outcome::Denied => Err(RelayError::Provider {
                description: "The user has denied your application access.".to_string(),
            }),
            Outcome::Unreachable => Err(RelayError::Transport("connection refused".to_string())),
        }
    }
}

fn args(extra: &[&str]) -> RelayArgs {
    let mut argv = vec![
        "folio-relay",
        "--site-url",
        "https://example.net",
        "--client-id",
        "client-id",
        "--client-secret",
        "client-secret",
    ];
    argv.extend_from_slice(extra);
    RelayArgs::try_parse_from(argv).unwrap()
}

fn state(fake: &Arc<FakeExchanger>, extra: &[&str]) -> RelayState {
    RelayState::with_exchanger(args(extra), fake.clone())
}

fn get(uri: &str) -> Request<()> {
    Request::builder().uri(uri).body(()).unwrap()
}

fn browser_get(uri: &str) -> Request<()> {
    Request::builder()
        .uri(uri)
        .header(ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
        .body(())
        .unwrap()
}

async fn body_text(resp: hyper::Response<BoxBody>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn auth_redirects_to_provider_with_state() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let resp = route(&state(&fake, &[]), &get("/api/auth")).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[CACHE_CONTROL], "no-store");
    let location = resp.headers()[LOCATION].to_str().unwrap().to_string();
    assert!(location.starts_with("https://github.com/login/oauth/authorize?client_id=client-id&"));
    assert!(location.contains("redirect_uri=https%3A%2F%2Fexample.net%2Fapi%2Fcallback"));
    assert!(location.contains("scope=repo%2Cuser"));
    assert!(location.contains("&state="));
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn auth_state_differs_per_request() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let state = state(&fake, &[]);
    let first = route(&state, &get("/api/auth")).await;
    let second = route(&state, &get("/api/auth")).await;
    assert_ne!(first.headers()[LOCATION], second.headers()[LOCATION]);
}

#[tokio::test]
async fn auth_without_client_id_is_500_json() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let args = RelayArgs::try_parse_from(["folio-relay", "--client-id", ""]).unwrap();
    let state = RelayState::with_exchanger(args, fake.clone());
    let resp = route(&state, &get("/api/auth")).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    assert!(body_text(resp).await.contains("\"error\""));
}

#[tokio::test]
async fn callback_without_code_restarts_flow() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let resp = route(&state(&fake, &[]), &get("/api/callback")).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[LOCATION], "https://example.net/api/auth");
    assert_eq!(fake.calls(), 0);

    let resp = route(&state(&fake, &[]), &get("/api/callback?code=")).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn strict_callback_without_code_is_400() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let resp = route(&state(&fake, &["--strict-callback"]), &get("/api/callback")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, r#"{"error":"missing authorization code"}"#);
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn provider_redirect_error_is_surfaced_without_exchange() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let uri = "/api/callback?error=access_denied&error_description=User+said+no&state=abc";
    let resp = route(&state(&fake, &[]), &get(uri)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, r#"{"error":"User said no"}"#);
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn successful_exchange_returns_relay_page() {
    let fake = FakeExchanger::new(Outcome::Token("gho_secret"));
    let resp = route(&state(&fake, &[]), &browser_get("/api/callback?code=abc123&state=xyz")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
    let html = body_text(resp).await;
    assert!(html.contains("authorization:github:success:"));
    assert!(html.contains(r#"var targets = ["https://example.net"];"#));
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn provider_error_is_400_with_description() {
    let fake = FakeExchanger::new(Outcome::Denied);
    let resp = route(&state(&fake, &[]), &get("/api/callback?code=stale")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(resp).await,
        r#"{"error":"The user has denied your application access."}"#
    );
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn browser_sees_error_page_on_failure() {
    let fake = FakeExchanger::new(Outcome::Denied);
    let resp = route(&state(&fake, &[]), &browser_get("/api/callback?code=stale")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = body_text(resp).await;
    assert!(html.contains("authorization:github:error:The user has denied your application access."));
    assert!(html.contains("var fallbackUser = null;"));
}

#[tokio::test]
async fn transport_failure_is_generic_500() {
    let fake = FakeExchanger::new(Outcome::Unreachable);
    let resp = route(&state(&fake, &[]), &get("/api/callback?code=abc")).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(resp).await;
    assert_eq!(body, r#"{"error":"Authentication failed"}"#);
    assert!(!body.contains("refused"));
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn missing_secret_skips_exchange() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let args = RelayArgs::try_parse_from(["folio-relay", "--client-id", "client-id"]).unwrap();
    let state = RelayState::with_exchanger(args, fake.clone());
    let resp = route(&state, &get("/api/callback?code=abc")).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn health_unknown_and_wrong_method() {
    let fake = FakeExchanger::new(Outcome::Token("unused"));
    let state = state(&fake, &[]);

    let resp = route(&state, &get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, r#"{"status":"ok"}"#);

    let resp = route(&state, &get("/wp-login.php")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let post = Request::builder()
        .method(Method::POST)
        .uri("/api/callback?code=abc")
        .body(())
        .unwrap();
    let resp = route(&state, &post).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(fake.calls(), 0);
}
