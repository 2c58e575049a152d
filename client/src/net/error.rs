//! Login failure taxonomy.

/// Message shown when the server rejects the credential pair (HTTP 403).
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username and/or password";

/// Failures of the HTTP exchange itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, refused connection, CORS,
    /// body serialization).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with an error status and no usable body.
    #[error("request failed with status code {0}")]
    Status(u16),
}

/// Errors produced by [`crate::net::api::login`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server answered 403.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// Any other error status carrying a body; the body is the message.
    #[error("{0}")]
    Remote(String),

    /// Network failure or an error status without a body.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
