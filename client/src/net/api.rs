//! REST helper for the login endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller as a [`LoginError`]; nothing is
//! swallowed, retried, or recovered here. The UI decides how to display it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{LoginError, TransportError};
use super::transport::LoginTransport;
use super::types::{HttpResponse, LoginRequest};

/// Login endpoint used when no build-time override is set.
pub const DEFAULT_LOGIN_ENDPOINT: &str = "http://localhost:8960/auth/login";

/// The login endpoint: `LOGIN_ENDPOINT` at compile time, else the default.
pub fn login_endpoint() -> &'static str {
    option_env!("LOGIN_ENDPOINT").unwrap_or(DEFAULT_LOGIN_ENDPOINT)
}

/// Post the credential pair to the login endpoint.
///
/// Issues exactly one request through `transport`. Resolves with `()` on any
/// 2xx status.
///
/// # Errors
///
/// - [`LoginError::InvalidCredentials`] on 403, whatever the body.
/// - [`LoginError::Remote`] on any other error status with a non-empty body.
/// - [`LoginError::Transport`] when no response arrived, or the error status
///   came without a body.
pub async fn login<T>(transport: &T, username: &str, password: &str) -> Result<(), LoginError>
where
    T: LoginTransport,
{
    let request = LoginRequest::new(username, password);
    let endpoint = login_endpoint();
    log::debug!("login attempt for {username:?} -> {endpoint}");

    let outcome = match transport.post_json(endpoint, &request).await {
        Ok(resp) => classify_response(resp),
        Err(e) => Err(e.into()),
    };
    if let Err(e) = &outcome {
        log::warn!("login failed for {username:?}: {e}");
    }
    outcome
}

/// Map a received response onto the login outcome.
///
/// # Errors
///
/// See [`login`]; only the status/body rules apply here.
pub fn classify_response(resp: HttpResponse) -> Result<(), LoginError> {
    if resp.is_success() {
        return Ok(());
    }
    if resp.status == 403 {
        return Err(LoginError::InvalidCredentials);
    }
    if !resp.body.is_empty() {
        return Err(LoginError::Remote(resp.body));
    }
    Err(TransportError::Status(resp.status).into())
}
