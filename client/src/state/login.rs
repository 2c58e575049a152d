//! Login form bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginUserInput` keeps one `RwSignal<LoginFormState>` for the field values,
//! the in-flight flag driving the button's loading state, and the message of
//! the last failed attempt.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::LoginError;
use crate::net::types::LoginRequest;

/// Login form state.
///
/// `logging_in` only mirrors the button's loading state. It does not lock
/// anything: the disabled button is what prevents a second submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub logging_in: bool,
    pub error: Option<String>,
}

impl LoginFormState {
    /// The submit control is disabled while either field is empty.
    pub fn submit_disabled(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }

    /// Start a submit: returns the credential pair to post, or `None` when
    /// submitting is not possible right now.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submit_disabled() || self.logging_in {
            return None;
        }
        self.logging_in = true;
        self.error = None;
        Some(LoginRequest::new(self.username.clone(), self.password.clone()))
    }

    /// Settle the in-flight request.
    pub fn finish_submit(&mut self, result: &Result<(), LoginError>) {
        self.logging_in = false;
        self.error = result.as_ref().err().map(ToString::to_string);
    }
}
