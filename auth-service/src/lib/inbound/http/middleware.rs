use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Cookie carrying the session token.
pub const AUTH_COOKIE_NAME: &str = "Authorization";

/// Extension type holding the user resolved from the session token
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity(pub User);

/// Middleware that validates the session token and attaches the user to
/// request extensions
///
/// The token is read from the `Authorization` cookie, falling back to an
/// `Authorization: Bearer` header.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&jar, req.headers()).ok_or_else(|| {
        tracing::debug!("No session token presented");
        ApiError::unauthorized()
    })?;

    let user = state.auth_service.validate(&token).await?;

    req.extensions_mut().insert(AuthenticatedIdentity(user));

    Ok(next.run(req).await)
}

fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(AUTH_COOKIE_NAME) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
