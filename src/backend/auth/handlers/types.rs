/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the login and
 * register handlers. Field names follow the camelCase JSON the front-end
 * sends and expects.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User's email address (unique)
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// First name (3-20 chars)
    pub first_name: String,
    /// Last name (3-20 chars)
    pub last_name: String,
}

/// Successful login response
///
/// Carries the bearer token and the public profile of the account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    /// Signed bearer token
    pub token: String,
    /// Always `"Bearer"`
    #[serde(rename = "type")]
    pub token_type: String,
    /// User ID
    pub id: i64,
    /// User's email address
    pub email: String,
    /// Login name; same value as `email`
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Whether the user may administer sessions
    pub admin: bool,
}

impl JwtResponse {
    /// Build the response for `user` carrying `token`
    pub fn new(token: String, user: &User) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            id: user.id,
            email: user.email.clone(),
            username: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            admin: user.admin,
        }
    }
}

/// Plain `{ "message": ... }` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request: RegisterRequest = serde_json::from_value(json!({
            "email": "yoga@studio.com",
            "password": "test!1234",
            "firstName": "Alice",
            "lastName": "Doe"
        }))
        .unwrap();

        assert_eq!(request.first_name, "Alice");
        assert_eq!(request.last_name, "Doe");
    }

    #[test]
    fn test_jwt_response_shape() {
        let now = Utc::now();
        let user = User {
            id: 7,
            email: "yoga@studio.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            password_hash: "hash".to_string(),
            admin: true,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(JwtResponse::new("abc".to_string(), &user)).unwrap();
        assert_eq!(
            value,
            json!({
                "token": "abc",
                "type": "Bearer",
                "id": 7,
                "email": "yoga@studio.com",
                "username": "yoga@studio.com",
                "firstName": "Admin",
                "lastName": "Admin",
                "admin": true
            })
        );
    }
}
