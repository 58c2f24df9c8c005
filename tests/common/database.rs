//! Test application fixture
//!
//! Every `TestApp` owns a fresh, migrated in-memory SQLite database and the
//! full router, driven through `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use studio_booking::backend::server::config::{connect_database, ensure_admin};
use studio_booking::backend::server::init::build_app;
use studio_booking::shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration used by every test application
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Invalid test configuration")
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Test application with a bootstrap administrator
    pub async fn with_admin(email: &str, password: &str) -> Self {
        let config = AppConfig::builder()
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(4)
            .admin(email, password)
            .build()
            .expect("Invalid test configuration");
        Self::with_config(config).await
    }

    async fn with_config(config: AppConfig) -> Self {
        let pool = connect_database(&config.database_url)
            .await
            .expect("Failed to create test database");
        ensure_admin(&pool, &config)
            .await
            .expect("Failed to create administrator");
        let router = build_app(pool.clone(), &config);
        Self { router, pool, config }
    }

    /// Send a request and return the status and JSON body (`Null` when empty)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router service failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, body).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }
}
