pub mod health;
pub use self::health::health;

pub mod users;

// common response helpers for the handlers
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct Envelope<'a, T> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

pub(crate) fn success<T: Serialize>(
    status: StatusCode,
    message: Option<&str>,
    data: Option<T>,
) -> Response {
    let body = Envelope {
        status: "success",
        message,
        data,
    };
    (status, Json(body)).into_response()
}

pub(crate) fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    let body: Envelope<'_, ()> = Envelope {
        status: "error",
        message: Some(message.as_str()),
        data: None,
    };
    (status, Json(body)).into_response()
}
