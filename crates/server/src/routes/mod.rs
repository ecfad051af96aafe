//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health          - Liveness check
//! GET   /health/ready    - Readiness check (store reachable)
//!
//! # Admins
//! POST  /admin           - Create an admin
//! GET   /admin           - List admins
//! GET   /admin/{id}      - Get one admin
//! PATCH /admin/{id}      - Partially update an admin
//!
//! # Anything else
//! GET   /*               - Static assets from STATIC_DIR, JSON 404 otherwise
//! ```

pub mod admins;
pub mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::state::AppState;

/// Create the admin resource routes.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(admins::create).get(admins::list))
        .route("/{id}", get(admins::show).patch(admins::update))
}

/// Create the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/admin", admin_routes())
}

/// JSON 404 for paths that match neither a route nor a static file.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}
