// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_log::config::Config;
use activity_log::routes::create_router;
use activity_log::AppState;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

/// Load a JSON fixture from `tests/fixtures`.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Value {
    let path = Path::new("tests/fixtures").join(name);
    let json = fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

/// Create a test app with the given config.
#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> axum::Router {
    let state = Arc::new(AppState { config });
    create_router(state)
}

/// Create a test app with the default test config.
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    create_test_app_with(Config::default())
}

/// POST a JSON body and return the status with the decoded response body.
#[allow(dead_code)]
pub async fn post_json(app: axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
