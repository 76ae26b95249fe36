//! Route table for the user screens.
//!
//! | path              | view                    |
//! |-------------------|-------------------------|
//! | `/` (redirect)    | user list               |
//! | `/users`          | user list               |
//! | `/user/:id`       | user detail             |
//! | `/user-form`      | form in create mode     |
//! | `/user-form/:id`  | form in edit mode       |
//!
//! Route ids are parsed as integers; a non-numeric id matches nothing.

pub mod users;

use crate::features::users::{UserForm, UserService};
use std::fmt;

pub use users::{UserDetail, UserList};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Users,
    UserDetail(i64),
    UserForm(Option<i64>),
}

impl Route {
    /// Resolves a path to a route. The empty path redirects to the user list.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["users"] => Some(Self::Users),
            ["user", id] => parse_id(id).map(Self::UserDetail),
            ["user-form"] => Some(Self::UserForm(None)),
            ["user-form", id] => parse_id(id).map(|id| Self::UserForm(Some(id))),
            _ => None,
        }
    }

    /// Canonical path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Users => "/users".to_string(),
            Self::UserDetail(id) => format!("/user/{id}"),
            Self::UserForm(None) => "/user-form".to_string(),
            Self::UserForm(Some(id)) => format!("/user-form/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Loads the view behind a route and renders it.
pub async fn render(service: &UserService, route: Route) -> String {
    match route {
        Route::Users => UserList::load(service.clone()).await.to_string(),
        Route::UserDetail(id) => UserDetail::load(service.clone(), id).await.to_string(),
        Route::UserForm(id) => UserForm::init(service.clone(), id).await.to_string(),
    }
}
