//! Client configuration: where the users API lives.
//!
//! The base URL comes from `--api-url` / `USERDESK_API_URL` and falls back to
//! the local development backend. Configuration values are public; do not store
//! secrets here.

use super::errors::AppError;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the default config and applies a non-empty override.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the resulting base URL is not an absolute
    /// `http`/`https` URL.
    pub fn load(api_base_url: Option<&str>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(value) = api_base_url.and_then(normalize_runtime_value) {
            config.api_base_url = value;
        }

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        let parsed = Url::parse(&self.api_base_url).map_err(|err| {
            AppError::Config(format!("Invalid API base URL {}: {err}", self.api_base_url))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            ))),
        }
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_API_BASE_URL, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://users.example.com "),
            Some("https://users.example.com".to_string())
        );
    }

    #[test]
    fn load_ignores_empty_override() {
        let config = AppConfig::load(Some("  ")).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_overwrites_when_present() {
        let config = AppConfig::load(Some("http://127.0.0.1:9000/")).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/");
    }

    #[test]
    fn load_rejects_invalid_urls() {
        assert!(AppConfig::load(Some("not a url")).is_err());
        assert!(AppConfig::load(Some("ftp://example.com")).is_err());
    }
}
