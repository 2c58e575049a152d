//! Listener configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

/// Bind address used when `HOST` is unset: all interfaces.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build the listener config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: bind port, default `default_port` (the Leptos `site-addr`
    ///   port, 3000 in the workspace manifest)
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a set value does not parse.
    pub fn from_env(default_port: u16) -> Result<Self, ServerError> {
        Self::from_values(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            default_port,
        )
    }

    fn from_values(host: Option<&str>, port: Option<&str>, default_port: u16) -> Result<Self, ServerError> {
        let host = match non_empty(host) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ServerError::Config { var: "HOST", value: raw.to_owned() })?,
            None => DEFAULT_HOST,
        };
        let port = match non_empty(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ServerError::Config { var: "PORT", value: raw.to_owned() })?,
            None => default_port,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
