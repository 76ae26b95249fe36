use crate::features::users::{User, UserService};
use crate::routes::Route;
use std::fmt;
use tracing::debug;

/// Read-only view of a single user.
#[derive(Debug)]
pub struct UserDetail {
    id: i64,
    user: Option<User>,
    error: Option<String>,
}

impl UserDetail {
    pub async fn load(service: UserService, id: i64) -> Self {
        match service.get(id).await {
            Ok(user) => Self {
                id,
                user: Some(user),
                error: None,
            },
            Err(err) => {
                debug!(id, error = %err, "could not load user");
                Self {
                    id,
                    user: None,
                    error: Some(err.user_message()),
                }
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn edit_route(&self) -> Route {
        Route::UserForm(Some(self.id))
    }

    #[must_use]
    pub fn go_back(&self) -> Route {
        Route::Users
    }
}

impl fmt::Display for UserDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User #{}", self.id)?;
        match (&self.user, &self.error) {
            (Some(user), _) => {
                writeln!(f, "  name:  {}", user.name)?;
                write!(f, "  email: {}", user.email)
            }
            (None, Some(error)) => write!(f, "  error: {error}"),
            (None, None) => write!(f, "  (no data)"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::app_lib::AppConfig;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn service_for(server: &MockServer) -> UserService {
        UserService::from_config(&AppConfig::load(Some(server.uri().as_str())).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn load_shows_record() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": { "id": 3, "name": "Ada", "email": "ada@example.com" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let detail = UserDetail::load(service_for(&server), 3).await;
        assert_eq!(detail.user().map(|user| user.name.as_str()), Some("Ada"));
        assert_eq!(
            detail.to_string(),
            "User #3\n  name:  Ada\n  email: ada@example.com"
        );
        assert_eq!(detail.edit_route(), Route::UserForm(Some(3)));
        assert_eq!(detail.go_back(), Route::Users);
    }

    #[tokio::test]
    async fn missing_record_shows_backend_message() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": "error",
                "message": "User not found with ID: 404"
            })))
            .mount(&server)
            .await;

        let detail = UserDetail::load(service_for(&server), 404).await;
        assert!(detail.user().is_none());
        assert_eq!(detail.error(), Some("User not found with ID: 404"));
        assert_eq!(detail.id(), 404);
    }
}
