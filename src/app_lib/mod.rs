//! Shared client utilities for API access, configuration and errors.
//!
//! Feature clients go through [`ApiClient`] so URL building, response envelopes
//! and error mapping stay in one place. Views never talk to `reqwest` directly.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::{AppConfig, DEFAULT_API_BASE_URL};
pub use errors::{AppError, FALLBACK_ERROR_MESSAGE};
