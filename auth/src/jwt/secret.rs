use std::fmt;

use super::errors::JwtError;

/// Process-wide HMAC signing secret.
///
/// Constructed once at startup and handed to the issuer and verifier.
/// The bytes never appear in `Debug` output.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap raw secret bytes.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, JwtError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}
