//! Client for the user endpoints. Keeps the resource paths centralized; every
//! operation issues exactly one request and forwards the transport outcome.

use crate::app_lib::{ApiClient, AppConfig, AppError};
use crate::features::users::types::{User, UserInput};
use tracing::instrument;

/// Resource path of the user collection.
pub const USERS_PATH: &str = "/api/users";

#[derive(Clone, Debug)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        ApiClient::new(config).map(Self::new)
    }

    /// Absolute URL of the user collection.
    #[must_use]
    pub fn resource_url(&self) -> String {
        self.api.url(USERS_PATH)
    }

    /// Fetches every user. No pagination, no filtering.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.api.get_json(USERS_PATH).await
    }

    /// Fetches one user. A 404 surfaces as `AppError::Http`.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.api.get_json(&user_path(id)).await
    }

    /// Creates a user and returns it with its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails.
    #[instrument(skip(self))]
    pub async fn create(&self, user: &UserInput) -> Result<User, AppError> {
        self.api.post_json(USERS_PATH, user).await
    }

    /// Replaces the user stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, user: &UserInput) -> Result<(), AppError> {
        self.api.put_json(&user_path(id), user).await
    }

    /// # Errors
    ///
    /// Returns an `AppError` if the request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&user_path(id)).await
    }
}

fn user_path(id: i64) -> String {
    format!("{USERS_PATH}/{id}")
}
