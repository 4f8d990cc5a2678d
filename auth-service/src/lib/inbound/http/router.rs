use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::validate::validate;
use super::middleware::require_auth;
use crate::domain::user::ports::AuthServicePort;

/// Attributes of the session cookie set on login.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub secure: bool,
    /// Should equal the token lifetime
    pub max_age: chrono::Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub cookie: CookieSettings,
}

pub fn create_router(auth_service: Arc<dyn AuthServicePort>, cookie: CookieSettings) -> Router {
    let state = AppState {
        auth_service,
        cookie,
    };

    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/health", get(health));

    let protected_routes = Router::new()
        .route("/validate", get(validate))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Headers are left out of the span: they carry session tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .with_state(state)
}
