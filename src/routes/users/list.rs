use crate::features::users::{User, UserService};
use crate::routes::Route;
use std::fmt;
use tracing::{debug, info};

/// The user list screen. Rows are only replaced by a confirmed server response.
#[derive(Debug)]
pub struct UserList {
    service: UserService,
    users: Vec<User>,
    error: Option<String>,
}

impl UserList {
    pub async fn load(service: UserService) -> Self {
        let mut list = Self {
            service,
            users: Vec::new(),
            error: None,
        };
        list.refresh().await;
        list
    }

    /// Re-fetches the rows. On failure the previous rows stay and the error is set.
    pub async fn refresh(&mut self) {
        match self.service.list().await {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(err) => {
                debug!(error = %err, "could not load users");
                self.error = Some(err.user_message());
            }
        }
    }

    /// Deletes a user and reloads the list. Returns whether the delete succeeded.
    pub async fn delete(&mut self, id: i64) -> bool {
        match self.service.delete(id).await {
            Ok(()) => {
                info!(id, "user deleted");
                self.refresh().await;
                true
            }
            Err(err) => {
                debug!(id, error = %err, "could not delete user");
                self.error = Some(err.user_message());
                false
            }
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn new_user_route(&self) -> Route {
        Route::UserForm(None)
    }

    #[must_use]
    pub fn detail_route(&self, id: i64) -> Route {
        Route::UserDetail(id)
    }

    #[must_use]
    pub fn edit_route(&self, id: i64) -> Route {
        Route::UserForm(Some(id))
    }
}

impl fmt::Display for UserList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "error: {error}")?;
        }
        if self.users.is_empty() {
            return write!(f, "No users.");
        }

        let name_width = self
            .users
            .iter()
            .map(|user| user.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("NAME".len());

        write!(f, "{:<6} {:<name_width$} EMAIL", "ID", "NAME")?;
        for user in &self.users {
            let id = user.id.map_or_else(|| "-".to_string(), |id| id.to_string());
            write!(f, "\n{id:<6} {:<name_width$} {}", user.name, user.email)?;
        }
        Ok(())
    }
}
