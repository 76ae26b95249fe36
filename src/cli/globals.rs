use crate::app_lib::{AppConfig, AppError};
use crate::features::users::UserService;
use anyhow::{Context, Result};

/// Arguments shared by every client subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// # Errors
    /// Returns an error if the API URL is not a valid http(s) URL.
    pub fn config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(Some(&self.api_url))
    }

    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn service(&self) -> Result<UserService> {
        let config = self
            .config()
            .with_context(|| format!("invalid --api-url: {}", self.api_url))?;

        Ok(UserService::from_config(&config)?)
    }
}
