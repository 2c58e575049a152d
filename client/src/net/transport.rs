//! HTTP transport seam for the login call.
//!
//! Client-side (hydrate): `BrowserTransport` issues the request through
//! `gloo-net` (the browser `fetch` API).
//! Elsewhere the login handler is driven by whatever transport the caller
//! supplies, which keeps the response handling testable off the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::TransportError;
use super::types::{HttpResponse, LoginRequest};

/// Performs a single JSON `POST` and reports the raw outcome.
///
/// Implementations must not retry: one call to `post_json` is one request.
pub trait LoginTransport {
    /// Send `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when no response was received or its
    /// body could not be read.
    /// A received response is `Ok` whatever its status.
    fn post_json(
        &self,
        url: &str,
        body: &LoginRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

/// `fetch`-backed transport used by the browser build.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl LoginTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &LoginRequest) -> Result<HttpResponse, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        response_from_parts(status, resp.text().await)
    }
}

/// Pair a received status with the result of reading its body.
///
/// A body that cannot be read is a transport failure, not an empty body.
#[cfg(any(test, feature = "hydrate"))]
fn response_from_parts<E: std::fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> Result<HttpResponse, TransportError> {
    let body = body.map_err(|e| TransportError::Network(format!("reading response body: {e}")))?;
    Ok(HttpResponse { status, body })
}
