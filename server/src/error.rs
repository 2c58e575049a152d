//! Host startup errors.

use std::net::SocketAddr;

/// Errors that stop the login server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
