use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::SigningSecret;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenRejection;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Holds the hasher, the issuer and the verifier built from a single
/// signing secret, so a service only needs to carry one value around.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
    /// Instant after which the token is no longer accepted
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with default hashing cost and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(secret),
            token_verifier: TokenVerifier::new(secret),
        }
    }

    /// Replace the password hasher (e.g. one built with a custom cost).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Override the lifetime of issued tokens.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_issuer = self.token_issuer.with_ttl(ttl);
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_issuer.ttl()
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier to bind into the token
    /// * `now` - Issuance time
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or hash is unreadable)
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let expires_at = self.token_issuer.expires_at(now)?;
        let access_token = self.token_issuer.issue(subject, now)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Issue a token without password verification.
    pub fn issue_token(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.token_issuer.issue(subject, now)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `TokenRejection` - The step at which verification failed
    pub fn validate_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenRejection> {
        self.token_verifier.verify(token, now)
    }
}
