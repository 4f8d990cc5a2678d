use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::CredentialsBody;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

pub async fn signup(
    State(state): State<AppState>,
    CredentialsBody(body): CredentialsBody<SignupRequest>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let credentials = Credentials::new(body.email, body.password).map_err(AuthError::from)?;

    state
        .auth_service
        .signup(credentials)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for signing up (JSON or form)
///
/// Absent fields deserialize as empty and are reported as missing.
#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
