//! # userdesk
//!
//! Terminal client for managing user records (list, view, create, edit, delete)
//! against a REST backend exposing `/api/users`, plus a small development backend
//! implementing the same contract.
//!
//! ## Layout
//!
//! - [`app_lib`]: HTTP helpers, configuration and the shared [`app_lib::AppError`].
//! - [`features::users`]: the `UserService` and the create/edit form state machine.
//! - [`routes`]: the route table and the list/detail views rendered to the terminal.
//! - [`backend`]: the in-memory `axum` backend used for development and tests.
//! - [`cli`]: command line parsing, logging setup and action dispatch.
//!
//! Every request is a single `async` call whose result is delivered once; nothing
//! is retried, cached or cancelled.

pub mod app_lib;
pub mod backend;
pub mod cli;
pub mod features;
pub mod routes;

pub const GIT_COMMIT_HASH: &str = env!("USERDESK_GIT_SHA");

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
