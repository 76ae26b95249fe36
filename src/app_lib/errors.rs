use serde_json::Value;
use std::fmt;

/// Text shown when a failed request carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Http {
        status: u16,
        message: String,
        payload: Option<Value>,
    },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Message supplied by the backend in the failure payload, if any.
    ///
    /// Reads the body's `message` field, or a nested `error.message` when the
    /// backend wraps its error object.
    #[must_use]
    pub fn payload_message(&self) -> Option<&str> {
        let Self::Http {
            payload: Some(payload),
            ..
        } = self
        else {
            return None;
        };

        payload
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| {
                payload
                    .get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(Value::as_str)
            })
    }

    /// The single string a view stores when a request fails.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.payload_message()
            .map_or_else(|| FALLBACK_ERROR_MESSAGE.to_string(), str::to_string)
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http { status, message, .. } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn http_error(payload: Option<Value>) -> AppError {
        AppError::Http {
            status: 409,
            message: "conflict".to_string(),
            payload,
        }
    }

    #[test]
    fn user_message_uses_body_message_verbatim() {
        let err = http_error(Some(json!({
            "status": "error",
            "message": "A user with the email ada@example.com already exists"
        })));
        assert_eq!(
            err.user_message(),
            "A user with the email ada@example.com already exists"
        );
    }

    #[test]
    fn user_message_reads_nested_error_message() {
        let err = http_error(Some(json!({ "error": { "message": "Name is taken" } })));
        assert_eq!(err.user_message(), "Name is taken");
    }

    #[test]
    fn user_message_falls_back_without_message() {
        assert_eq!(http_error(None).user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            http_error(Some(json!({ "status": "error" }))).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            http_error(Some(json!({ "message": 42 }))).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            AppError::Network("connection refused".to_string()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn display_includes_status() {
        let err = http_error(None);
        assert_eq!(err.to_string(), "Request failed (409): conflict");
        assert_eq!(err.status(), Some(409));
        assert_eq!(AppError::Parse("bad".to_string()).status(), None);
    }
}
