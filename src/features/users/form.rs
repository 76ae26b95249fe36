//! Create/edit form for a single user.
//!
//! The form decides once, at initialization, whether it creates or edits: a
//! route-supplied id means edit, no id means create. Field edits never change
//! that decision. A submit either returns the route to navigate to (the user
//! list) or stores a displayable error and stays on the form.

use crate::features::users::{client::UserService, types::User};
use crate::routes::Route;
use std::fmt;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    #[must_use]
    pub fn from_route_id(id: Option<i64>) -> Self {
        id.map_or(Self::Create, Self::Edit)
    }

    #[must_use]
    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }

    #[must_use]
    pub fn id(self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

#[derive(Debug)]
pub struct UserForm {
    service: UserService,
    mode: FormMode,
    user: User,
    error: Option<String>,
}

impl UserForm {
    /// Builds the form for the given route id.
    ///
    /// In edit mode the record is fetched first. If that fetch fails the form
    /// keeps its empty initial values and shows no error.
    pub async fn init(service: UserService, route_id: Option<i64>) -> Self {
        let mode = FormMode::from_route_id(route_id);
        let mut form = Self {
            service,
            mode,
            user: User::default(),
            error: None,
        };

        if let FormMode::Edit(id) = mode {
            match form.service.get(id).await {
                Ok(user) => form.user = user,
                Err(err) => debug!(id, error = %err, "could not load user for editing"),
            }
        }

        form
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.user.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.user.email = email.into();
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Saves the record: create in create mode, update of the route id in edit
    /// mode. Returns the list route on success and `None` when the form stays.
    pub async fn submit(&mut self) -> Option<Route> {
        let input = self.user.input();
        let result = match self.mode {
            FormMode::Create => self.service.create(&input).await.map(|created| {
                info!(id = ?created.id, "user created");
            }),
            FormMode::Edit(id) => self.service.update(id, &input).await.map(|()| {
                info!(id, "user updated");
            }),
        };

        match result {
            Ok(()) => {
                self.error = None;
                Some(Route::Users)
            }
            Err(err) => {
                debug!(error = %err, "user was not saved");
                self.error = Some(err.user_message());
                None
            }
        }
    }

    /// Leaves the form without saving.
    #[must_use]
    pub fn go_back(&self) -> Route {
        Route::Users
    }
}

impl fmt::Display for UserForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            FormMode::Create => writeln!(f, "New user")?,
            FormMode::Edit(id) => writeln!(f, "Edit user #{id}")?,
        }
        writeln!(f, "  name:  {}", self.user.name)?;
        write!(f, "  email: {}", self.user.email)?;
        if let Some(error) = &self.error {
            write!(f, "\n  error: {error}")?;
        }
        Ok(())
    }
}
