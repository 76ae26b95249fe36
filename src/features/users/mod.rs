//! User records: the HTTP-backed service, the record types and the create/edit form.

pub mod client;
pub mod form;
pub mod types;

pub use client::{UserService, USERS_PATH};
pub use form::{FormMode, UserForm};
pub use types::{User, UserInput};
