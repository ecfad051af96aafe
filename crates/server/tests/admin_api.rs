//! End-to-end tests for the `/admin` endpoints.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;

use common::TestApp;
use shop_admin_core::AdminId;
use shop_admin_server::db::AdminStore;

fn payload(name: &str, email: &str, password: &str) -> serde_json::Value {
    json!({ "adminName": name, "adminEmail": email, "adminPassword": password })
}

async fn stored_digest(app: &TestApp, id: &str) -> String {
    let id = AdminId::parse(id).unwrap();
    let record = app.store.find_record(id).await.unwrap().unwrap();
    record.password.as_str().to_string()
}

#[tokio::test]
async fn test_create_then_fetch_hides_password() {
    let app = TestApp::new();

    let created = app.post("/admin", payload("Al", "A@Test.com", "secret1")).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Admin created successfully");
    let id = created.body["id"].as_str().unwrap();

    let fetched = app.get(&format!("/admin/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"], id);
    assert_eq!(fetched.body["adminName"], "Al");
    assert_eq!(fetched.body["adminEmail"], "a@test.com");
    assert!(fetched.body.get("adminPassword").is_none());
    assert!(fetched.body["createdAt"].is_string());
    assert!(fetched.body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_stores_digest_not_plaintext() {
    let app = TestApp::new();
    let id = app.create_admin("Alice", "alice@test.com", "secret1").await;

    let digest = stored_digest(&app, &id).await;
    assert_ne!(digest, "secret1");
    assert!(digest.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_create_short_name_is_rejected() {
    let app = TestApp::new();

    let response = app.post("/admin", payload("A", "a@test.com", "secret1")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "adminName");
    assert_eq!(errors[0]["message"], "Name must be at least 2 characters");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_missing_fields_reports_each() {
    let app = TestApp::new();

    let response = app.post("/admin", json!({})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["adminName", "adminEmail", "adminPassword"]);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_invalid_email_and_short_password() {
    let app = TestApp::new();

    let response = app.post("/admin", payload("Alice", "not-an-email", "123")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let messages: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        ["Invalid email format", "Password must be at least 6 characters"]
    );
}

#[tokio::test]
async fn test_create_duplicate_email_ignores_case() {
    let app = TestApp::new();
    app.create_admin("Alice", "a@test.com", "secret1").await;

    let response = app.post("/admin", payload("Alfred", "A@TEST.COM", "secret2")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "message": "Email already exists" }));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = TestApp::new();

    let response = app.get("/admin").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_list_returns_every_admin_without_passwords() {
    let app = TestApp::new();
    app.create_admin("Alice", "alice@test.com", "secret1").await;
    app.create_admin("Bob", "bob@test.com", "secret2").await;

    let response = app.get("/admin").await;
    assert_eq!(response.status, StatusCode::OK);
    let admins = response.body.as_array().unwrap();
    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0]["adminEmail"], "alice@test.com");
    assert_eq!(admins[1]["adminEmail"], "bob@test.com");
    for admin in admins {
        assert!(admin.get("adminPassword").is_none());
    }
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app.get(&format!("/admin/{}", AdminId::generate())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Admin not found" }));
}

#[tokio::test]
async fn test_get_malformed_id_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/admin/not-a-uuid").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Admin not found" }));
}

#[tokio::test]
async fn test_update_name_only_keeps_password() {
    let app = TestApp::new();
    let id = app.create_admin("Alice", "alice@test.com", "secret1").await;
    let before = stored_digest(&app, &id).await;

    let response = app
        .patch(&format!("/admin/{id}"), json!({ "adminName": "Alicia" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Admin updated successfully");
    assert_eq!(response.body["admin"]["adminName"], "Alicia");
    assert_eq!(response.body["admin"]["adminEmail"], "alice@test.com");
    assert!(response.body["admin"].get("adminPassword").is_none());

    assert_eq!(stored_digest(&app, &id).await, before);
}

#[tokio::test]
async fn test_update_password_rehashes() {
    let app = TestApp::new();
    let id = app.create_admin("Alice", "alice@test.com", "secret1").await;
    let before = stored_digest(&app, &id).await;

    let response = app
        .patch(&format!("/admin/{id}"), json!({ "adminPassword": "another1" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = stored_digest(&app, &id).await;
    assert_ne!(after, before);
    assert_ne!(after, "another1");
    let digest = shop_admin_core::PasswordDigest::from_phc(after);
    assert!(app.hasher.verify("another1", &digest));
    assert!(!app.hasher.verify("secret1", &digest));
}

#[tokio::test]
async fn test_update_to_own_email_is_allowed() {
    let app = TestApp::new();
    let id = app.create_admin("Alice", "alice@test.com", "secret1").await;

    let response = app
        .patch(&format!("/admin/{id}"), json!({ "adminEmail": "ALICE@test.com" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["admin"]["adminEmail"], "alice@test.com");
}

#[tokio::test]
async fn test_update_to_taken_email_changes_nothing() {
    let app = TestApp::new();
    app.create_admin("Alice", "a@test.com", "secret1").await;
    let id = app.create_admin("Bob", "b@test.com", "secret2").await;

    let response = app
        .patch(
            &format!("/admin/{id}"),
            json!({ "adminName": "Robert", "adminEmail": "a@test.com" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "message": "Email already exists" }));

    let bob = app.get(&format!("/admin/{id}")).await;
    assert_eq!(bob.body["adminName"], "Bob");
    assert_eq!(bob.body["adminEmail"], "b@test.com");
}

#[tokio::test]
async fn test_update_invalid_field_is_rejected() {
    let app = TestApp::new();
    let id = app.create_admin("Alice", "alice@test.com", "secret1").await;

    let response = app
        .patch(&format!("/admin/{id}"), json!({ "adminPassword": "123" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "adminPassword");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .patch(
            &format!("/admin/{}", AdminId::generate()),
            json!({ "adminName": "Alice" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Admin not found" }));
}

#[tokio::test]
async fn test_update_empty_body_touches_timestamp() {
    let app = TestApp::new();
    let id = app.create_admin("Alice", "alice@test.com", "secret1").await;
    let before = app.get(&format!("/admin/{id}")).await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let response = app.patch(&format!("/admin/{id}"), json!({})).await;
    assert_eq!(response.status, StatusCode::OK);
    let admin = &response.body["admin"];
    assert_eq!(admin["adminName"], "Alice");
    assert_eq!(admin["createdAt"], before.body["createdAt"]);

    let timestamp = |value: &serde_json::Value| -> DateTime<Utc> {
        serde_json::from_value(value.clone()).unwrap()
    };
    assert!(timestamp(&admin["updatedAt"]) > timestamp(&before.body["updatedAt"]));
}

#[tokio::test]
async fn test_undecodable_id_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/admin/%FF").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Admin not found" }));

    let response = app.patch("/admin/%FF", json!({})).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Admin not found" }));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/admin")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"adminName\": "))
        .unwrap();
    let response = common::send_request(&app.router, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "body");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_non_string_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post(
            "/admin",
            json!({ "adminName": 42, "adminEmail": "a@test.com", "adminPassword": "secret1" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/admin")
        .body(axum::body::Body::from(payload("Al", "a@test.com", "secret1").to_string()))
        .unwrap();
    let response = common::send_request(&app.router, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);
}
