use std::fmt;

use auth::JwtError;
use auth::PasswordError;
use auth::TokenRejection;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for malformed or missing request input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

/// Why a token-bearing request was refused.
///
/// Never shown to the caller; kept for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnauthorizedReason {
    Token(TokenRejection),
    UnknownSubject,
}

impl fmt::Display for UnauthorizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnauthorizedReason::Token(rejection) => rejection.fmt(f),
            UnauthorizedReason::UnknownSubject => f.write_str("Token subject is not a known user"),
        }
    }
}

/// Top-level error for all authentication operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("User already exists: {0}")]
    DuplicateUser(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(UnauthorizedReason),

    // Infrastructure errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Token signing error: {0}")]
    Signing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TokenRejection> for AuthError {
    fn from(rejection: TokenRejection) -> Self {
        AuthError::Unauthorized(UnauthorizedReason::Token(rejection))
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Hashing(err.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        AuthError::Signing(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Background task failed: {}", err))
    }
}
