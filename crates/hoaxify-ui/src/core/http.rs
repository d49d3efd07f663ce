//! Transport-agnostic request descriptions and response classification.
//!
//! # Design
//! - Describe every endpoint as plain data so paths and bodies are testable off-wasm.
//! - Classify status codes and error bodies here; the wasm client only moves bytes.
//! - Validation failures stay structured; everything else collapses to a message.

use crate::i18n::LocaleCode;
use hoaxify_api_models::{
    ApiErrorBody, Credentials, PasswordResetRequest, PasswordUpdate, SignUpRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Header carrying the active UI locale on every request.
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Failure of one API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network failure: {0}")]
    Network(String),
    /// The server rejected one or more request fields.
    #[error("validation failed for {} field(s)", .fields.len())]
    Validation {
        /// Optional summary sent with the field map.
        message: Option<String>,
        /// Field name to message.
        fields: BTreeMap<String, String>,
    },
    /// Non-success status without field-level detail.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, when present.
        message: Option<String>,
    },
    /// A body could not be encoded or decoded.
    #[error("malformed payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Message supplied by the server, if the response carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } | Self::Status { message, .. } => {
                message.as_deref()
            }
            Self::Network(_) | Self::Payload(_) => None,
        }
    }

    /// Per-field validation messages, if this is a validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PATCH.
    Patch,
}

/// One outgoing API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    /// Verb.
    pub method: Method,
    /// Absolute path including query string.
    pub path: String,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded =
            serde_json::to_string(body).map_err(|err| ApiError::Payload(err.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Headers attached to this request for the given locale.
    #[must_use]
    pub fn headers(&self, locale: LocaleCode) -> Vec<(&'static str, &'static str)> {
        let mut headers = vec![(ACCEPT_LANGUAGE, locale.code())];
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json"));
        }
        headers
    }
}

/// `POST /api/v1/users`.
///
/// # Errors
/// Returns [`ApiError::Payload`] if the body cannot be encoded.
pub fn sign_up(body: &SignUpRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/api/v1/users").with_json(body)
}

/// `PATCH /api/v1/users/:token/active`.
#[must_use]
pub fn activate(token: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Patch,
        format!("/api/v1/users/{}/active", urlencoding::encode(token)),
    )
}

/// `POST /api/v1/auth`.
///
/// # Errors
/// Returns [`ApiError::Payload`] if the body cannot be encoded.
pub fn login(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/api/v1/auth").with_json(credentials)
}

/// `POST /api/v1/logout`.
#[must_use]
pub fn logout() -> ApiRequest {
    ApiRequest::new(Method::Post, "/api/v1/logout")
}

/// `GET /api/v1/users?page=&size=`.
#[must_use]
pub fn list_users(page: u32, size: u32) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("/api/v1/users?page={page}&size={size}"))
}

/// `GET /api/v1/users/:id`.
#[must_use]
pub fn get_user(id: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Get,
        format!("/api/v1/users/{}", urlencoding::encode(id)),
    )
}

/// `POST /api/v1/users/password-reset`.
///
/// # Errors
/// Returns [`ApiError::Payload`] if the body cannot be encoded.
pub fn request_password_reset(body: &PasswordResetRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/api/v1/users/password-reset").with_json(body)
}

/// `PATCH /api/v1/users/:token/password`.
///
/// # Errors
/// Returns [`ApiError::Payload`] if the body cannot be encoded.
pub fn set_password(token: &str, body: &PasswordUpdate) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(
        Method::Patch,
        format!("/api/v1/users/{}/password", urlencoding::encode(token)),
    )
    .with_json(body)
}

/// Turn a status code and raw body into a typed result.
///
/// # Errors
/// - [`ApiError::Validation`] for a 400 carrying a non-empty `validationErrors` map.
/// - [`ApiError::Status`] for any other non-2xx status.
/// - [`ApiError::Payload`] when a 2xx body does not match `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        let text = if body.trim().is_empty() { "null" } else { body };
        return serde_json::from_str(text).map_err(|err| ApiError::Payload(err.to_string()));
    }
    let problem: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    match problem.validation_errors {
        Some(fields) if status == 400 && !fields.is_empty() => Err(ApiError::Validation {
            message: problem.message,
            fields,
        }),
        _ => Err(ApiError::Status {
            status,
            message: problem.message,
        }),
    }
}
