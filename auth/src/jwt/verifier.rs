use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::TokenRejection;
use super::secret::SigningSecret;

const EXPECTED_ALGORITHM: &str = "HS256";

/// Only the algorithm is read before the signature is checked.
#[derive(Deserialize)]
struct UntrustedHeader {
    alg: String,
}

/// Validates session tokens issued by [`super::TokenIssuer`].
///
/// Verification runs in a fixed order and stops at the first failure:
/// structure, algorithm, signature, expiry, subject.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier bound to the process signing secret.
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry and subject are checked here against the caller's clock
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and return its subject.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    /// * `now` - Current time; the token must expire strictly after it
    ///
    /// # Returns
    /// Subject (user identifier) embedded in the token
    ///
    /// # Errors
    /// * `MalformedToken` - Not a three-part JWT, undecodable header or claims, no `exp`
    /// * `UnexpectedAlgorithm` - Header names anything other than HS256
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `TokenExpired` - `exp` is at or before `now`
    /// * `MissingSubject` - No `sub` claim, or it is empty
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenRejection> {
        let algorithm = Self::read_algorithm(token)?;
        if algorithm != EXPECTED_ALGORITHM {
            return Err(TokenRejection::UnexpectedAlgorithm(algorithm));
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenRejection::InvalidSignature,
                ErrorKind::InvalidAlgorithm => {
                    TokenRejection::UnexpectedAlgorithm(algorithm.clone())
                }
                _ => TokenRejection::MalformedToken(e.to_string()),
            })?;

        if claims.exp.is_none() {
            return Err(TokenRejection::MalformedToken(
                "missing exp claim".to_string(),
            ));
        }
        if claims.is_expired(now.timestamp()) {
            return Err(TokenRejection::TokenExpired);
        }

        match claims.sub {
            Some(subject) if !subject.is_empty() => Ok(subject),
            _ => Err(TokenRejection::MissingSubject),
        }
    }

    fn read_algorithm(token: &str) -> Result<String, TokenRejection> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments[0].is_empty() || segments[1].is_empty() {
            return Err(TokenRejection::MalformedToken(
                "expected three dot-separated segments".to_string(),
            ));
        }

        let header_bytes = URL_SAFE_NO_PAD
            .decode(segments[0])
            .map_err(|e| TokenRejection::MalformedToken(format!("header encoding: {}", e)))?;

        serde_json::from_slice::<UntrustedHeader>(&header_bytes)
            .map(|header| header.alg)
            .map_err(|e| TokenRejection::MalformedToken(format!("header: {}", e)))
    }
}
