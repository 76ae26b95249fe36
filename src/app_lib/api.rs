//! HTTP helpers for JSON APIs with consistent error handling. Feature clients use
//! these helpers to avoid duplicating request setup. Each helper issues exactly one
//! request: no retries, no caching and no client-side timeout.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

/// Maximum number of error body characters surfaced in `AppError::Http`.
const MAX_ERROR_CHARS: usize = 200;

/// Successful payloads either arrive wrapped as `{ "status", "data" }` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Envelope { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Envelope { data } | Self::Bare(data) => data,
        }
    }
}

/// JSON client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a URL from the configured base URL and the provided path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    /// Fetches JSON, unwrapping a response envelope when present.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` on network failure, non-2xx status or undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        debug!(method = "GET", %url, "sending request");
        let response = send(self.http.get(&url)).await?;

        handle_json_response(response).await
    }

    /// Posts a JSON body and parses the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` on network failure, non-2xx status or undecodable body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(method = "POST", %url, "sending request");
        let response = send(self.http.post(&url).json(body)).await?;

        handle_json_response(response).await
    }

    /// Puts a JSON body and ignores the response body.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` on network failure or non-2xx status.
    pub async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(method = "PUT", %url, "sending request");
        let response = send(self.http.put(&url).json(body)).await?;

        handle_empty_response(response).await
    }

    /// Deletes a resource and ignores the response body.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` on network failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let url = self.url(path);
        debug!(method = "DELETE", %url, "sending request");
        let response = send(self.http.delete(&url)).await?;

        handle_empty_response(response).await
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, AppError> {
    request.send().await.map_err(map_request_error)
}

/// Maps transport errors into `AppError` variants.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with their decoded bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(http_error(response).await);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| AppError::Network(format!("Failed to read response: {err}")))?;

    serde_json::from_slice::<Payload<T>>(&bytes)
        .map(Payload::into_inner)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Handles responses whose body carries nothing the caller needs.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let payload = serde_json::from_str::<Value>(&body).ok();

    debug!(status, "request failed");

    AppError::Http {
        status,
        message: sanitize_body(&body),
        payload,
    }
}

/// Sanitizes HTTP error bodies by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
