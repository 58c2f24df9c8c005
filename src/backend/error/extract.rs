/**
 * Request Body Extractor
 *
 * `JsonBody` reads a JSON request body like `axum::Json`, but its rejection
 * is a `BackendError`. A body that is not JSON, or whose fields do not match
 * the target type, is answered with the usual `{status, error, message}`
 * body instead of axum's plain-text rejection.
 */

use axum::extract::{rejection::JsonRejection, FromRequest};
use axum::http::StatusCode;

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

/// JSON request body with `BackendError` as its rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::MissingJsonContentType(_) => BackendError::handler(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Content-Type must be application/json",
            ),
            other => SharedError::malformed_body(other.body_text()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Credentials {
        email: String,
        #[allow(dead_code)]
        password: String,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<JsonBody<Credentials>, BackendError> {
        let mut builder = Request::builder().method("POST").uri("/api/auth/login");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        JsonBody::<Credentials>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let error = extract(Some("application/json"), r#"{"email":"yoga@studio.com"}"#)
            .await
            .unwrap_err();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.message().contains("password"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let error = extract(Some("application/json"), "{ not json").await.unwrap_err();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let error = extract(None, r#"{"email":"a@b.io","password":"x"}"#)
            .await
            .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_valid_body() {
        let JsonBody(credentials) = extract(
            Some("application/json"),
            r#"{"email":"yoga@studio.com","password":"test!1234"}"#,
        )
        .await
        .unwrap();
        assert_eq!(credentials.email, "yoga@studio.com");
    }
}
