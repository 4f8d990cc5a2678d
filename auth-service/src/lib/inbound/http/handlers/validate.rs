use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedIdentity;

/// Reports the identity `require_auth` attached to the request.
pub async fn validate(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> ApiSuccess<IdentityResponseData> {
    ApiSuccess::new(StatusCode::OK, (&identity.0).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityResponseData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for IdentityResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
