//! `/api/users` handlers. Every response is a JSON envelope:
//! `{ "status": "success" | "error", "message"?, "data"? }`.

use super::{failure, success};
use crate::backend::store::{StoreError, UserStore};
use crate::features::users::{User, UserInput};
use axum::{
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
    Json,
};
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Incoming record. Fields are optional so missing values produce a 400 envelope
/// instead of an extractor rejection.
#[derive(Deserialize, Debug, Default)]
pub struct UserPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

fn validate(payload: Result<Json<UserPayload>, JsonRejection>) -> Result<UserInput, Response> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!("rejected user payload: {rejection}");
            return Err(failure(StatusCode::BAD_REQUEST, "Invalid user data"));
        }
    };

    let present = |value: Option<String>| value.filter(|value| !value.trim().is_empty());
    let (Some(name), Some(email)) = (present(payload.name), present(payload.email)) else {
        return Err(failure(StatusCode::BAD_REQUEST, "Invalid user data"));
    };

    if !valid_email(&email) {
        return Err(failure(StatusCode::BAD_REQUEST, "Invalid email format"));
    }

    Ok(UserInput { name, email })
}

fn store_failure(err: &StoreError) -> Response {
    let status = match err {
        StoreError::NameTaken(_) | StoreError::EmailTaken(_) => StatusCode::CONFLICT,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    failure(status, err.to_string())
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses (
        (status = 200, description = "All users", body = [User], content_type = "application/json"),
    ),
    tag = "users"
)]
#[instrument(skip(store))]
pub async fn list_users(Extension(store): Extension<Arc<UserStore>>) -> Response {
    let users = store.list().await;
    success(StatusCode::OK, None, Some(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses (
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with that id"),
    ),
    tag = "users"
)]
#[instrument(skip(store))]
pub async fn get_user(
    Extension(store): Extension<Arc<UserStore>>,
    Path(id): Path<i64>,
) -> Response {
    match store.get(id).await {
        Some(user) => success(StatusCode::OK, None, Some(user)),
        None => store_failure(&StoreError::NotFound(id)),
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserInput,
    responses (
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing fields or invalid email"),
        (status = 409, description = "Name or email already in use"),
    ),
    tag = "users"
)]
#[instrument(skip(store, payload))]
pub async fn create_user(
    Extension(store): Extension<Arc<UserStore>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Response {
    let input = match validate(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match store.insert(input).await {
        Ok(user) => success(
            StatusCode::CREATED,
            Some("User created successfully"),
            Some(user),
        ),
        Err(err) => store_failure(&err),
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserInput,
    responses (
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Missing fields or invalid email"),
        (status = 404, description = "No user with that id"),
    ),
    tag = "users"
)]
#[instrument(skip(store, payload))]
pub async fn update_user(
    Extension(store): Extension<Arc<UserStore>>,
    Path(id): Path<i64>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Response {
    let input = match validate(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match store.update(id, input).await {
        Ok(user) => success(StatusCode::OK, Some("User updated successfully"), Some(user)),
        Err(err) => store_failure(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses (
        (status = 200, description = "User deleted"),
        (status = 404, description = "No user with that id"),
    ),
    tag = "users"
)]
#[instrument(skip(store))]
pub async fn delete_user(
    Extension(store): Extension<Arc<UserStore>>,
    Path(id): Path<i64>,
) -> Response {
    match store.remove(id).await {
        Ok(()) => success::<()>(StatusCode::OK, Some("User deleted successfully"), None),
        Err(err) => store_failure(&err),
    }
}
