use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::CredentialsBody;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::inbound::http::middleware::AUTH_COOKIE_NAME;
use crate::inbound::http::router::AppState;
use crate::inbound::http::router::CookieSettings;
use crate::user::errors::AuthError;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    CredentialsBody(body): CredentialsBody<LoginRequest>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let credentials = Credentials::new(body.email, body.password).map_err(AuthError::from)?;

    let outcome = state.auth_service.login(credentials).await?;

    let cookie = session_cookie(&state.cookie, outcome.token.clone());

    Ok((
        jar.add(cookie),
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                token: outcome.token,
                expires_at: outcome.expires_at,
            },
        ),
    ))
}

/// Http-only, same-site cookie living exactly as long as the token.
fn session_cookie(settings: &CookieSettings, token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(settings.max_age.num_seconds()))
        .build()
}

/// HTTP request body for logging in (JSON or form)
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let settings = CookieSettings {
            secure: true,
            max_age: chrono::Duration::days(30),
        };

        let cookie = session_cookie(&settings, "token-value".to_string());

        assert_eq!(cookie.name(), AUTH_COOKIE_NAME);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(30)));
    }
}
