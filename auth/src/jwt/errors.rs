use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Reason a presented token was refused.
///
/// Each variant corresponds to one verification step. Callers outside the
/// service see a single "unauthorized" outcome; the variant is kept for
/// logging and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Unexpected signing algorithm: {0}")]
    UnexpectedAlgorithm(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token has no subject")]
    MissingSubject,
}
