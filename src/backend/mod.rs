//! Development backend serving the `/api/users` contract the client expects.
//!
//! Records live in memory for the lifetime of the process. Requests get an
//! `x-request-id` (ULID) when the caller did not send one, and each request is
//! traced in its own span.

pub mod handlers;
pub mod store;

use crate::features::users::{User, UserInput};
use anyhow::Result;
use axum::{
    body::Body,
    extract::Extension,
    http::{header, HeaderName, HeaderValue, Method, Request},
    routing::get,
    Router,
};
use handlers::{health, users};
use std::sync::Arc;
use store::UserStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,
    ),
    components(schemas(User, UserInput, handlers::health::Health)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Backend status"),
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the router with every route and middleware layer registered.
pub fn router(store: Arc<UserStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/health", get(health::health))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(store)),
        )
}

/// Serve the backend on `port` until Ctrl-C.
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn new(port: u16) -> Result<()> {
    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    serve(listener, Arc::new(UserStore::new())).await
}

/// Serve the backend on an already bound listener.
/// # Errors
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, store: Arc<UserStore>) -> Result<()> {
    axum::serve(listener, router(store).into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let method = request.method().as_str();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", method, path, request_id)
}
