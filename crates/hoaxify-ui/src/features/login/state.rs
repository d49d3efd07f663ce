//! Login form state.

use crate::core::http::ApiError;
use crate::core::submit::SubmitState;
use hoaxify_api_models::{AuthUser, Credentials};

/// Mutable login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// E-mail input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Submission phase.
    pub submit: SubmitState,
}

impl LoginForm {
    /// Update the e-mail and drop any stale failure message.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.clear_failure();
    }

    /// Update the password and drop any stale failure message.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.clear_failure();
    }

    fn clear_failure(&mut self) {
        if self.submit.generic_error().is_some() {
            self.submit.settle();
        }
    }

    /// Whether the login button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.submit.is_submitting()
    }

    /// Claim the in-flight slot and build the credentials.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() || !self.submit.start() {
            return None;
        }
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the server's answer. Returns the user on success so the caller can
    /// start the session and navigate away.
    pub fn finish_submit(
        &mut self,
        result: Result<AuthUser, ApiError>,
        generic: &str,
    ) -> Option<AuthUser> {
        match result {
            Ok(user) => {
                self.submit.settle();
                Some(user)
            }
            Err(err) => {
                let message = err
                    .server_message()
                    .map_or_else(|| generic.to_string(), ToString::to_string);
                self.submit.fail_with_message(message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC: &str = "Unexpected error occurred, please try again";

    fn filled() -> LoginForm {
        let mut form = LoginForm::default();
        form.set_email("user1@mail.com".to_string());
        form.set_password("P4ssword".to_string());
        form
    }

    #[test]
    fn needs_both_inputs() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit());
        form.set_email("user1@mail.com".to_string());
        assert!(!form.can_submit());
        form.set_password("P4ssword".to_string());
        assert!(form.can_submit());
    }

    #[test]
    fn single_flight() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn success_hands_back_user() {
        let mut form = filled();
        form.begin_submit().expect("credentials");
        let user = form.finish_submit(
            Ok(AuthUser {
                id: 1,
                username: "user1".to_string(),
                email: "user1@mail.com".to_string(),
                image: None,
            }),
            GENERIC,
        );
        assert_eq!(user.map(|user| user.id), Some(1));
        assert!(!form.submit.is_submitting());
    }

    #[test]
    fn failure_shows_server_message_then_clears_on_edit() {
        let mut form = filled();
        form.begin_submit().expect("credentials");
        let user = form.finish_submit(
            Err(ApiError::Status {
                status: 401,
                message: Some("Incorrect credentials".to_string()),
            }),
            GENERIC,
        );
        assert!(user.is_none());
        assert_eq!(form.submit.generic_error(), Some("Incorrect credentials"));

        form.set_password("P4ssword2".to_string());
        assert_eq!(form.submit.generic_error(), None);
    }

    #[test]
    fn network_failure_uses_generic_text() {
        let mut form = filled();
        form.begin_submit().expect("credentials");
        form.finish_submit(Err(ApiError::Network("offline".into())), GENERIC);
        assert_eq!(form.submit.generic_error(), Some(GENERIC));
    }
}
