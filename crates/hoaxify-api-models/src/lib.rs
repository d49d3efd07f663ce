#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Hoaxify public API.
//!
//! The web UI encodes requests and decodes responses through these types so
//! the wire contract (field names, casing, optional members) lives in one
//! place.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    /// Requested username.
    pub username: String,
    /// Contact e-mail, also used for activation.
    pub email: String,
    /// Plain-text password; hashed server side.
    pub password: String,
}

/// Generic `{ "message": ... }` acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MessageResponse {
    /// Localized, human-readable outcome.
    pub message: String,
}

/// Body of `POST /api/v1/auth`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account e-mail.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Authenticated user returned by `POST /api/v1/auth` and persisted under the
/// `auth` storage key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    /// Numeric account id.
    pub id: u64,
    /// Display name.
    pub username: String,
    /// Account e-mail.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Avatar file name, when one was uploaded.
    pub image: Option<String>,
}

/// Public user record returned by `GET /api/v1/users/:id` and in user pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Numeric account id.
    pub id: u64,
    /// Display name.
    pub username: String,
    /// Account e-mail.
    pub email: String,
    #[serde(default)]
    /// Avatar file name, when one was uploaded.
    pub image: Option<String>,
}

/// One page of `GET /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    /// Users on this page.
    pub content: Vec<User>,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Total number of pages available.
    pub total_pages: u32,
}

/// Body of `POST /api/v1/users/password-reset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    /// Account e-mail receiving the reset link.
    pub email: String,
}

/// Body of `PATCH /api/v1/users/:token/password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordUpdate {
    /// New password.
    pub password: String,
}

/// Error document returned on non-2xx responses.
///
/// Validation failures (HTTP 400) carry `validationErrors`, a map from request
/// field name to message. Other failures usually carry only `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    /// Request path that failed.
    pub path: Option<String>,
    #[serde(default)]
    /// Server timestamp in epoch milliseconds.
    pub timestamp: Option<u64>,
    #[serde(default)]
    /// Human-readable failure summary.
    pub message: Option<String>,
    #[serde(default)]
    /// Per-field validation messages.
    pub validation_errors: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_uses_camel_case_keys() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"validationErrors":{"username":"username connot be null"}}"#,
        )
        .expect("decode");
        let fields = body.validation_errors.expect("fields");
        assert_eq!(
            fields.get("username").map(String::as_str),
            Some("username connot be null")
        );
        assert!(body.message.is_none());
    }

    #[test]
    fn auth_user_tolerates_null_image() {
        let user: AuthUser = serde_json::from_str(
            r#"{"id":1,"username":"user1","email":"user1@mail.com","image":null}"#,
        )
        .expect("decode");
        assert_eq!(user.id, 1);
        assert!(user.image.is_none());

        let stored = serde_json::to_string(&user).expect("encode");
        assert_eq!(
            stored,
            r#"{"id":1,"username":"user1","email":"user1@mail.com"}"#
        );
    }

    #[test]
    fn user_page_reads_total_pages() {
        let page: UserPage = serde_json::from_str(
            r#"{"content":[{"id":2,"username":"test user","email":"t@mail.com"}],"page":0,"size":3,"totalPages":4}"#,
        )
        .expect("decode");
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.content[0].username, "test user");
        assert!(page.content[0].image.is_none());
    }

    #[test]
    fn sign_up_request_serializes_exact_fields() {
        let body = SignUpRequest {
            username: "user1".to_string(),
            email: "user1@mail.com".to_string(),
            password: "P4ssword".to_string(),
        };
        let value = serde_json::to_value(&body).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({
                "username": "user1",
                "email": "user1@mail.com",
                "password": "P4ssword"
            })
        );
    }
}
