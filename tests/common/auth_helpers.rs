//! Authentication test helpers
//!
//! Provides utilities for creating test users through the public API and
//! forging tokens for the validation tests.

use axum::http::StatusCode;
use serde_json::json;

use studio_booking::backend::auth::tokens::{now_seconds, Claims, TokenService};

use super::database::{TestApp, TEST_SECRET};

pub const TEST_PASSWORD: &str = "Aa123456!";

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub token: String,
}

/// Register `email` through the API and return the status
pub async fn register(app: &TestApp, email: &str) -> StatusCode {
    let (status, _) = app
        .post(
            "/api/auth/register",
            None,
            Some(json!({
                "email": email,
                "password": TEST_PASSWORD,
                "firstName": "MockFN",
                "lastName": "MockLN"
            })),
        )
        .await;
    status
}

/// Register and log in `email`
pub async fn create_test_user(app: &TestApp, email: &str) -> TestUser {
    assert_eq!(register(app, email).await, StatusCode::OK);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": TEST_PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);

    TestUser {
        id: body["id"].as_i64().expect("login response without id"),
        email: email.to_string(),
        token: body["token"].as_str().expect("login response without token").to_string(),
    }
}

/// Token for `subject` whose expiry is already in the past
pub fn expired_token(subject: &str) -> String {
    let now = now_seconds();
    TokenService::new(TEST_SECRET, 60_000)
        .sign(&Claims {
            sub: subject.to_string(),
            iat: now - 120,
            exp: now - 60,
        })
        .expect("Failed to sign test token")
}

/// Token for `subject` signed with a secret the server does not know
pub fn foreign_token(subject: &str) -> String {
    TokenService::new("some-other-secret", 60_000)
        .issue(subject)
        .expect("Failed to sign test token")
}
