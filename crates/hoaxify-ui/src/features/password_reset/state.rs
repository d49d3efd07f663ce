//! Password reset form state.
//!
//! # Design
//! - Request form: one e-mail field, server field errors like signup.
//! - Set form: password pair gated exactly like signup, plus the `tk` token.

use crate::core::http::ApiError;
use crate::core::submit::{SubmitState, passwords_ready};
use hoaxify_api_models::{MessageResponse, PasswordResetRequest, PasswordUpdate};

/// "Forgot password" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetRequestForm {
    /// E-mail input.
    pub email: String,
    /// Submission phase and field errors.
    pub submit: SubmitState,
}

impl ResetRequestForm {
    /// Update the e-mail and clear its server error.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.submit.clear_field("email");
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.submit.is_submitting()
    }

    /// Claim the in-flight slot and build the request body.
    pub fn begin_submit(&mut self) -> Option<PasswordResetRequest> {
        if !self.can_submit() || !self.submit.start() {
            return None;
        }
        Some(PasswordResetRequest {
            email: self.email.trim().to_string(),
        })
    }

    /// Apply the server's answer.
    pub fn finish_submit(&mut self, result: Result<MessageResponse, ApiError>, generic: &str) {
        match result {
            Ok(response) => self.submit.succeed(response.message),
            Err(err) => self.submit.fail(&err, generic),
        }
    }
}

/// Password reset field on the set form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetField {
    /// New password.
    Password,
    /// Confirmation.
    PasswordRepeat,
}

/// "Choose a new password" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetSetForm {
    /// Token taken from the `tk` query parameter.
    pub token: Option<String>,
    /// New password.
    pub password: String,
    /// Confirmation.
    pub password_repeat: String,
    /// Submission phase and field errors.
    pub submit: SubmitState,
}

impl ResetSetForm {
    /// Form bound to the token from the reset link.
    #[must_use]
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    /// Update one input and clear its server error.
    pub fn set_field(&mut self, field: ResetField, value: String) {
        match field {
            ResetField::Password => {
                self.password = value;
                self.submit.clear_field("password");
            }
            ResetField::PasswordRepeat => self.password_repeat = value,
        }
    }

    /// Whether the two password inputs differ.
    #[must_use]
    pub fn password_mismatch(&self) -> bool {
        self.password != self.password_repeat
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.token.is_some()
            && passwords_ready(&self.password, &self.password_repeat)
            && !self.submit.is_submitting()
    }

    /// Claim the in-flight slot; returns the token and body to send.
    pub fn begin_submit(&mut self) -> Option<(String, PasswordUpdate)> {
        if !self.can_submit() {
            return None;
        }
        let token = self.token.clone()?;
        if !self.submit.start() {
            return None;
        }
        Some((
            token,
            PasswordUpdate {
                password: self.password.clone(),
            },
        ))
    }

    /// Apply the server's answer.
    pub fn finish_submit(&mut self, result: Result<MessageResponse, ApiError>, generic: &str) {
        match result {
            Ok(response) => self.submit.succeed(response.message),
            Err(err) => match err.server_message() {
                Some(message) if err.field_errors().is_none() => {
                    self.submit.fail_with_message(message);
                }
                _ => self.submit.fail(&err, generic),
            },
        }
    }
}
