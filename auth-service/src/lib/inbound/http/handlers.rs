use axum::async_trait;
use axum::extract::rejection::FormRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Form;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod health;
pub mod login;
pub mod signup;
pub mod validate;

/// Body returned for every 401, whatever the underlying reason.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    /// The single outward form of every token or session failure.
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        tracing::error!(error = %e, "Unhandled error");
        Self::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

/// Collapses domain errors into what a caller is allowed to learn.
///
/// Credential and token failures carry a fixed message; the precise reason
/// only reaches the log. Infrastructure failures stay distinguishable as 500.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(_) => ApiError::BadRequest(err.to_string()),
            AuthError::DuplicateUser(_) => {
                ApiError::Conflict("A user with this email already exists".to_string())
            }
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::Unauthorized(reason) => {
                tracing::warn!(reason = %reason, "Request unauthorized");
                ApiError::unauthorized()
            }
            AuthError::Storage(_)
            | AuthError::Hashing(_)
            | AuthError::Signing(_)
            | AuthError::Internal(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// Request body read as JSON, or as a form when sent
/// `application/x-www-form-urlencoded`.
///
/// Unreadable bodies are answered with a 400 in the usual envelope.
#[derive(Debug, Clone)]
pub struct CredentialsBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for CredentialsBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection: FormRejection| bad_body(rejection.body_text()))?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection: JsonRejection| bad_body(rejection.body_text()))?;
            Ok(Self(body))
        }
    }
}

fn bad_body(reason: String) -> ApiError {
    tracing::debug!(reason = %reason, "Request body rejected");
    ApiError::BadRequest(reason)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
