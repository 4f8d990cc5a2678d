use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SigningSecret;

/// Lifetime of a session token when none is configured.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;

/// Signs session tokens.
///
/// Uses HS256 (HMAC with SHA-256) and a fixed time-to-live.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with the default 30 day lifetime.
    ///
    /// # Arguments
    /// * `secret` - Process signing secret
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(DEFAULT_TOKEN_TTL_DAYS),
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Expiry of a token issued at `now`.
    ///
    /// # Errors
    /// * `SigningFailed` - Lifetime is not positive or `now + ttl` is out of range
    pub fn expires_at(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, JwtError> {
        if self.ttl <= Duration::zero() {
            return Err(JwtError::SigningFailed(
                "token lifetime must be positive".to_string(),
            ));
        }

        now.checked_add_signed(self.ttl).ok_or_else(|| {
            JwtError::SigningFailed("token expiry out of range".to_string())
        })
    }

    /// Issue a token for `subject`, valid until `now + ttl`.
    ///
    /// # Arguments
    /// * `subject` - User identifier to embed as `sub`
    /// * `now` - Issuance time
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `SigningFailed` - Subject is empty, expiry is invalid or encoding failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        if subject.is_empty() {
            return Err(JwtError::SigningFailed(
                "subject must not be empty".to_string(),
            ));
        }

        let claims = Claims::for_subject(subject, now, self.expires_at(now)?);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }
}
