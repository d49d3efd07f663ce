//! HTTP client helpers (REST).

use crate::core::http::{self, ApiError, ApiRequest, Method, decode_response};
use crate::core::store::AppStore;
use hoaxify_api_models::{
    AuthUser, Credentials, MessageResponse, PasswordResetRequest, PasswordUpdate, SignUpRequest,
    User, UserPage,
};
use gloo_net::http::{Method as HttpMethod, Request};
use serde::de::{DeserializeOwned, IgnoredAny};
use yewdux::prelude::Dispatch;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let locale = Dispatch::<AppStore>::new().get().locale;
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Patch => HttpMethod::PATCH,
        };
        let mut req = Request::new(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            request.path
        ))
        .method(method);
        for (name, value) in request.headers(locale) {
            req = req.header(name, value);
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(status, &text)
    }

    pub(crate) async fn sign_up(&self, body: &SignUpRequest) -> Result<MessageResponse, ApiError> {
        self.send(http::sign_up(body)?).await
    }

    pub(crate) async fn activate(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.send(http::activate(token)).await
    }

    pub(crate) async fn login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError> {
        self.send(http::login(credentials)?).await
    }

    pub(crate) async fn logout(&self) -> Result<(), ApiError> {
        self.send::<IgnoredAny>(http::logout()).await.map(|_| ())
    }

    pub(crate) async fn list_users(&self, page: u32, size: u32) -> Result<UserPage, ApiError> {
        self.send(http::list_users(page, size)).await
    }

    pub(crate) async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.send(http::get_user(id)).await
    }

    pub(crate) async fn request_password_reset(
        &self,
        body: &PasswordResetRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.send(http::request_password_reset(body)?).await
    }

    pub(crate) async fn set_password(
        &self,
        token: &str,
        body: &PasswordUpdate,
    ) -> Result<MessageResponse, ApiError> {
        self.send(http::set_password(token, body)?).await
    }
}
