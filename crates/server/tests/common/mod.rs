//! Shared helpers for HTTP tests.
//!
//! Each test builds the real router over a [`MemoryAdminStore`] (or a
//! faulty store) and drives it with `tower::ServiceExt::oneshot`.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use shop_admin_server::{
    app::build_app,
    config::ServerConfig,
    db::{AdminStore, MemoryAdminStore},
    services::{HashCost, PasswordHasher},
    state::AppState,
};

pub const CLIENT_ORIGIN: &str = "http://localhost:3000";

/// Response pieces the tests care about.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Router plus handles on its store and hasher.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryAdminStore>,
    pub hasher: PasswordHasher,
}

pub fn test_config() -> ServerConfig {
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public");
    let vars: HashMap<&str, &str> = HashMap::from([
        ("DATABASE_URL", "postgres://unused/test"),
        ("CLIENT_URL", CLIENT_ORIGIN),
        ("STATIC_DIR", static_dir),
    ]);
    ServerConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap()
}

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(HashCost::minimal()).unwrap()
}

/// Build the router over an arbitrary store.
pub fn router_with_store(store: Arc<dyn AdminStore>) -> Router {
    build_app(AppState::new(test_config(), store, test_hasher()))
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryAdminStore::new());
        let hasher = test_hasher();
        let state = AppState::new(test_config(), store.clone(), hasher.clone());
        Self {
            router: build_app(state),
            store,
            hasher,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        send(&self.router, Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        send(&self.router, Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> TestResponse {
        send(&self.router, Method::PATCH, uri, Some(body)).await
    }

    /// Create an admin and return its ID.
    pub async fn create_admin(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post(
                "/admin",
                serde_json::json!({
                    "adminName": name,
                    "adminEmail": email,
                    "adminPassword": password,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_str().unwrap().to_string()
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_request(router, builder.body(body).unwrap()).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse {
        status,
        headers,
        body,
    }
}
