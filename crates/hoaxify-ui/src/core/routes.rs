//! Routing definitions for the Hoaxify UI.
use std::borrow::Cow;
use yew_router::prelude::*;

/// Every page reachable in the app.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// User directory.
    #[at("/")]
    Home,
    /// Account creation.
    #[at("/signup")]
    SignUp,
    /// Credential login.
    #[at("/login")]
    Login,
    /// Account activation by e-mailed token.
    #[at("/activation/:token")]
    Activation {
        /// Activation token.
        token: String,
    },
    /// Ask for a password reset e-mail.
    #[at("/password-reset/request")]
    PasswordResetRequest,
    /// Choose a new password; the token arrives as `?tk=`.
    #[at("/password-reset/set")]
    PasswordResetSet,
    /// Public profile.
    #[at("/user/:id")]
    User {
        /// Numeric user id.
        id: String,
    },
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Value of a named path parameter on this route.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        match (self, name) {
            (Self::Activation { token }, "token") => Some(token),
            (Self::User { id }, "id") => Some(id),
            _ => None,
        }
    }

    /// `data-testid` of the page element rendered for this route.
    #[must_use]
    pub const fn page_id(&self) -> &'static str {
        match self {
            Self::Home => "home-page",
            Self::SignUp => "signup-page",
            Self::Login => "login-page",
            Self::Activation { .. } => "activation-page",
            Self::PasswordResetRequest => "password-reset-request-page",
            Self::PasswordResetSet => "password-reset-set-page",
            Self::User { .. } => "user-page",
            Self::NotFound => "not-found-page",
        }
    }
}

/// Extract one parameter from a query string such as `?tk=abc&x=1`.
#[must_use]
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(Cow::into_owned)
        .filter(|value| !value.is_empty())
}
