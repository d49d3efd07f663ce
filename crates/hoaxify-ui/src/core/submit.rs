//! Single-flight form submission state shared by every form.
//!
//! # Design
//! - One phase enum instead of `submitting`/`error`/`success` flags.
//! - `start` refuses while a request is outstanding; callers issue the request
//!   only when it returns `true`.
//! - Field errors come from the server and are cleared one field at a time.

use crate::core::http::ApiError;
use std::collections::BTreeMap;

/// Where a form submission currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Editable, nothing in flight.
    #[default]
    Idle,
    /// Exactly one request is outstanding.
    Submitting,
    /// Last request failed without field detail; message is displayable.
    Failed(String),
    /// Last request succeeded; message comes from the server.
    Succeeded(String),
}

/// Submission phase plus server-side field errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    phase: SubmitPhase,
    field_errors: BTreeMap<String, String>,
}

impl SubmitState {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    /// Generic failure message, if the last request failed without field detail.
    #[must_use]
    pub fn generic_error(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Server success message, if the last request succeeded.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Succeeded(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Validation message for one field.
    #[must_use]
    pub fn field_error(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }

    /// All current field errors.
    #[must_use]
    pub const fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    /// Enter the submitting phase. Returns `false` when a request is already out.
    pub fn start(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Record a successful response.
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.phase = SubmitPhase::Succeeded(message.into());
    }

    /// Record a failure: validation maps onto fields, anything else shows `generic`.
    pub fn fail(&mut self, err: &ApiError, generic: &str) {
        match err.field_errors() {
            Some(fields) => {
                self.field_errors = fields.clone();
                self.phase = SubmitPhase::Idle;
            }
            None => self.phase = SubmitPhase::Failed(generic.to_string()),
        }
    }

    /// Record a failure with an explicit message and no field detail.
    pub fn fail_with_message(&mut self, message: impl Into<String>) {
        self.phase = SubmitPhase::Failed(message.into());
    }

    /// Return to idle after a success the caller handles elsewhere (e.g. navigation).
    pub fn settle(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    /// Drop the error of one edited field.
    pub fn clear_field(&mut self, key: &str) {
        self.field_errors.remove(key);
    }
}

/// Password pair is submittable: non-empty and exactly equal.
#[must_use]
pub fn passwords_ready(password: &str, repeat: &str) -> bool {
    !password.is_empty() && password == repeat
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC: &str = "Unexpected error occurred, please try again";

    fn validation(field: &str, message: &str) -> ApiError {
        ApiError::Validation {
            message: None,
            fields: BTreeMap::from([(field.to_string(), message.to_string())]),
        }
    }

    #[test]
    fn start_is_single_flight() {
        let mut state = SubmitState::default();
        assert!(state.start());
        assert!(!state.start());
        assert!(state.is_submitting());
    }

    #[test]
    fn start_clears_generic_error() {
        let mut state = SubmitState::default();
        assert!(state.start());
        state.fail(&ApiError::Network("offline".into()), GENERIC);
        assert_eq!(state.generic_error(), Some(GENERIC));
        assert!(state.start());
        assert_eq!(state.generic_error(), None);
    }

    #[test]
    fn validation_failure_fills_fields_only() {
        let mut state = SubmitState::default();
        assert!(state.start());
        state.fail(&validation("email", "E-mail cannot be null"), GENERIC);
        assert_eq!(state.phase(), &SubmitPhase::Idle);
        assert_eq!(state.field_error("email"), Some("E-mail cannot be null"));
        assert_eq!(state.generic_error(), None);
    }

    #[test]
    fn unstructured_failure_keeps_field_errors() {
        let mut state = SubmitState::default();
        assert!(state.start());
        state.fail(&validation("username", "taken"), GENERIC);
        assert!(state.start());
        state.fail(
            &ApiError::Status {
                status: 502,
                message: None,
            },
            GENERIC,
        );
        assert_eq!(state.field_error("username"), Some("taken"));
        assert_eq!(state.generic_error(), Some(GENERIC));
    }

    #[test]
    fn clearing_one_field_leaves_others() {
        let mut state = SubmitState::default();
        assert!(state.start());
        let err = ApiError::Validation {
            message: None,
            fields: BTreeMap::from([
                ("username".to_string(), "a".to_string()),
                ("password".to_string(), "b".to_string()),
            ]),
        };
        state.fail(&err, GENERIC);
        state.clear_field("username");
        assert_eq!(state.field_error("username"), None);
        assert_eq!(state.field_error("password"), Some("b"));
        assert_eq!(state.field_errors().len(), 1);
    }

    #[test]
    fn password_pair_rules() {
        assert!(!passwords_ready("", ""));
        assert!(!passwords_ready("P4ssword", ""));
        assert!(!passwords_ready("P4ssword", "p4ssword"));
        assert!(passwords_ready("P4ssword", "P4ssword"));
    }
}
