//! Networking modules for the login request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the login call and its response classification, `transport`
//! abstracts the HTTP exchange, `types` defines the wire schema, and `error`
//! the failure taxonomy surfaced to the UI.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
