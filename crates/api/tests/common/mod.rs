#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cbprep_api::config::{NotifyConfig, ServerConfig};
use cbprep_api::router::build_app_router;
use cbprep_api::state::AppState;
use cbprep_notify::{DeliveryError, Mailer, OutboundEmail};

pub const FROM: &str = "Chargeback Prep <hello@chargebackprep.com>";
pub const OWNER: &str = "owner@chargebackprep.com";

// ---------------------------------------------------------------------------
// Mailer double
// ---------------------------------------------------------------------------

/// Records every send. Optionally fails the n-th attempt (0-based); the
/// failed attempt is still recorded.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail_on: Option<usize>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_on(attempt: usize) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::default(),
            fail_on: Some(attempt),
        })
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DeliveryError> {
        let mut sent = self.sent.lock().unwrap();
        let attempt = sent.len();
        sent.push(email.clone());
        if self.fail_on == Some(attempt) {
            return Err(DeliveryError::Rejected {
                status: 500,
                message: "provider unavailable".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

pub fn full_notify_config() -> NotifyConfig {
    NotifyConfig {
        from: Some(FROM.to_string()),
        owner: Some(OWNER.to_string()),
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(mailer: Option<Arc<dyn Mailer>>, notify: NotifyConfig) -> Router {
    build_app_router(AppState {
        config: Arc::new(test_config()),
        notify: Arc::new(notify),
        mailer,
    })
}

/// Fully configured app backed by the given recording mailer.
pub fn app_with(mailer: &Arc<RecordingMailer>) -> Router {
    let mailer: Arc<dyn Mailer> = mailer.clone();
    build_test_app(Some(mailer), full_notify_config())
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn valid_submission() -> Value {
    json!({
        "name": "Dana",
        "email": "buyer@x.com",
        "offerType": "course",
        "platform": "Kajabi",
        "processor": "Stripe",
        "policyLink": "https://example.com/policy",
        "supportChannel": "help@example.com",
        "notes": "Two disputes last month.",
        "company": ""
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> Response {
    tokio::time::timeout(Duration::from_secs(10), app.oneshot(request))
        .await
        .expect("request timed out")
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert status and body in one go, returning the body for further checks.
pub async fn expect(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
