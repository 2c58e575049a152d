use super::*;
use crate::net::error::TransportError;

fn filled(username: &str, password: &str) -> LoginFormState {
    LoginFormState { username: username.to_owned(), password: password.to_owned(), ..LoginFormState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_disabled() {
    let state = LoginFormState::default();
    assert!(state.submit_disabled());
    assert!(!state.logging_in);
    assert!(state.error.is_none());
}

// =============================================================
// Submit enablement
// =============================================================

#[test]
fn submit_disabled_when_either_field_empty() {
    assert!(filled("", "").submit_disabled());
    assert!(filled("alice", "").submit_disabled());
    assert!(filled("", "pw").submit_disabled());
    assert!(!filled("alice", "pw").submit_disabled());
}

#[test]
fn submit_enablement_ignores_request_state() {
    let mut state = filled("alice", "pw");
    state.logging_in = true;
    assert!(!state.submit_disabled());

    state.password.clear();
    assert!(state.submit_disabled());
}

#[test]
fn whitespace_counts_as_a_value() {
    assert!(!filled(" ", " ").submit_disabled());
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_sets_loading_and_returns_credentials() {
    let mut state = filled("alice", "pw");
    state.error = Some("old".to_owned());

    let req = state.begin_submit().unwrap();
    assert_eq!(req, LoginRequest::new("alice", "pw"));
    assert!(state.logging_in);
    assert!(state.error.is_none());
}

#[test]
fn begin_submit_refuses_empty_fields() {
    let mut state = filled("alice", "");
    assert!(state.begin_submit().is_none());
    assert!(!state.logging_in);
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut state = filled("alice", "pw");
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert!(state.logging_in);
}

#[test]
fn finish_submit_success_clears_loading() {
    let mut state = filled("alice", "pw");
    state.begin_submit();
    state.finish_submit(&Ok(()));
    assert!(!state.logging_in);
    assert!(state.error.is_none());
}

#[test]
fn finish_submit_failure_clears_loading_and_keeps_message() {
    let mut state = filled("alice", "pw");
    state.begin_submit();
    state.finish_submit(&Err(LoginError::InvalidCredentials));
    assert!(!state.logging_in);
    assert_eq!(state.error.as_deref(), Some("Invalid username and/or password"));

    state.begin_submit();
    state.finish_submit(&Err(LoginError::Remote("server exploded".to_owned())));
    assert_eq!(state.error.as_deref(), Some("server exploded"));

    state.begin_submit();
    state.finish_submit(&Err(TransportError::Status(500).into()));
    assert_eq!(state.error.as_deref(), Some("request failed with status code 500"));
}

#[test]
fn fields_are_kept_after_settling() {
    let mut state = filled("alice", "pw");
    state.begin_submit();
    state.finish_submit(&Err(LoginError::InvalidCredentials));
    assert_eq!(state.username, "alice");
    assert_eq!(state.password, "pw");
    assert!(!state.submit_disabled());
}
