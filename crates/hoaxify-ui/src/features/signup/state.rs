//! Signup form state.
//!
//! # Design
//! - Keep inputs as raw strings; validity is derived, never stored.
//! - Submission is gated by [`SignUpForm::begin_submit`], which both checks
//!   validity and claims the single in-flight slot.
//! - Editing a field drops only that field's server error.

use crate::core::http::ApiError;
use crate::core::submit::{SubmitState, passwords_ready};
use hoaxify_api_models::{MessageResponse, SignUpRequest};

/// Editable signup inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpField {
    /// Username input.
    Username,
    /// E-mail input.
    Email,
    /// Password input.
    Password,
    /// Password confirmation input.
    PasswordRepeat,
}

impl SignUpField {
    /// Request/validation key for the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordRepeat => "passwordRepeat",
        }
    }
}

/// Mutable signup form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Username input.
    pub username: String,
    /// E-mail input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Password confirmation input.
    pub password_repeat: String,
    /// Submission phase and server field errors.
    pub submit: SubmitState,
}

impl SignUpForm {
    /// Update one input and clear its server error.
    pub fn set_field(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::Username => self.username = value,
            SignUpField::Email => self.email = value,
            SignUpField::Password => self.password = value,
            SignUpField::PasswordRepeat => self.password_repeat = value,
        }
        self.submit.clear_field(field.key());
    }

    /// Whether the two password inputs differ.
    #[must_use]
    pub fn password_mismatch(&self) -> bool {
        self.password != self.password_repeat
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        passwords_ready(&self.password, &self.password_repeat) && !self.submit.is_submitting()
    }

    /// Claim the in-flight slot and build the request body.
    ///
    /// Returns `None` (and changes nothing) while invalid or already submitting.
    pub fn begin_submit(&mut self) -> Option<SignUpRequest> {
        if !self.can_submit() || !self.submit.start() {
            return None;
        }
        Some(SignUpRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the server's answer to the outstanding submission.
    pub fn finish_submit(&mut self, result: Result<MessageResponse, ApiError>, generic: &str) {
        match result {
            Ok(response) => self.submit.succeed(response.message),
            Err(err) => self.submit.fail(&err, generic),
        }
    }

    /// Error text for one field.
    #[must_use]
    pub fn field_error(&self, field: SignUpField) -> Option<&str> {
        self.submit.field_error(field.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const GENERIC: &str = "Unexpected error occurred, please try again";

    fn filled() -> SignUpForm {
        let mut form = SignUpForm::default();
        form.set_field(SignUpField::Username, "user1".to_string());
        form.set_field(SignUpField::Email, "user1@mail.com".to_string());
        form.set_field(SignUpField::Password, "P4ssword".to_string());
        form.set_field(SignUpField::PasswordRepeat, "P4ssword".to_string());
        form
    }

    fn invalid(field: &str, message: &str) -> ApiError {
        ApiError::Validation {
            message: None,
            fields: BTreeMap::from([(field.to_string(), message.to_string())]),
        }
    }

    #[test]
    fn button_disabled_initially() {
        let form = SignUpForm::default();
        assert!(!form.can_submit());
        assert!(!form.password_mismatch());
    }

    #[test]
    fn mismatched_passwords_block_submission() {
        let pairs = [("124", "356"), ("P4ssword", ""), ("", "P4ssword"), ("abc", "abC")];
        for (password, repeat) in pairs {
            let mut form = filled();
            form.set_field(SignUpField::Password, password.to_string());
            form.set_field(SignUpField::PasswordRepeat, repeat.to_string());
            assert!(form.password_mismatch(), "{password} vs {repeat}");
            assert!(!form.can_submit());
            assert!(form.begin_submit().is_none());
        }
    }

    #[test]
    fn matching_passwords_enable_submission() {
        assert!(filled().can_submit());
    }

    #[test]
    fn submit_sends_username_email_password() {
        let mut form = filled();
        let body = form.begin_submit().expect("request");
        assert_eq!(
            body,
            SignUpRequest {
                username: "user1".to_string(),
                email: "user1@mail.com".to_string(),
                password: "P4ssword".to_string(),
            }
        );
    }

    #[test]
    fn second_click_while_pending_sends_nothing() {
        let mut form = filled();
        let requests = (0..2).filter_map(|_| form.begin_submit()).count();
        assert_eq!(requests, 1);
        assert!(form.submit.is_submitting());
        assert!(!form.can_submit());
    }

    #[test]
    fn success_replaces_form_with_message() {
        let mut form = filled();
        form.begin_submit().expect("request");
        form.finish_submit(
            Ok(MessageResponse {
                message: "user create success".to_string(),
            }),
            GENERIC,
        );
        assert_eq!(form.submit.success_message(), Some("user create success"));
        assert!(!form.submit.is_submitting());
    }

    #[test]
    fn network_failure_shows_generic_message() {
        let mut form = filled();
        form.begin_submit().expect("request");
        form.finish_submit(Err(ApiError::Network("failed to fetch".into())), GENERIC);
        assert_eq!(form.submit.generic_error(), Some(GENERIC));
        assert!(!form.submit.is_submitting());
        assert!(form.can_submit());
    }

    #[test]
    fn resubmitting_hides_previous_generic_error() {
        let mut form = filled();
        form.begin_submit().expect("request");
        form.finish_submit(Err(ApiError::Network("failed".into())), GENERIC);
        form.begin_submit().expect("second request");
        assert_eq!(form.submit.generic_error(), None);
    }

    #[test]
    fn validation_errors_map_to_fields_and_clear_on_edit() {
        let cases = [
            (SignUpField::Username, "username connot be null"),
            (SignUpField::Email, "E-mail cannot be null"),
            (SignUpField::Password, "Password cannot be null"),
        ];
        for (field, message) in cases {
            let mut form = filled();
            form.begin_submit().expect("request");
            form.finish_submit(Err(invalid(field.key(), message)), GENERIC);
            assert_eq!(form.field_error(field), Some(message));
            assert_eq!(form.submit.generic_error(), None);

            form.set_field(field, "updated".to_string());
            assert_eq!(form.field_error(field), None);
            assert!(!form.submit.is_submitting());
        }
    }

    #[test]
    fn editing_other_field_keeps_error() {
        let mut form = filled();
        form.begin_submit().expect("request");
        form.finish_submit(Err(invalid("username", "taken")), GENERIC);
        form.set_field(SignUpField::Email, "other@mail.com".to_string());
        assert_eq!(form.field_error(SignUpField::Username), Some("taken"));
    }
}
