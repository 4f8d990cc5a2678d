use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Only the subject and expiry are meaningful to the verifier. Both are
/// optional on the wire so that a token missing either one can be
/// reported precisely instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims binding a subject until `expires_at`, issued at `now`.
    ///
    /// # Returns
    /// Claims with sub, exp and iat set
    pub fn for_subject(
        subject: impl ToString,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: Some(expires_at.timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    /// Check if token is expired.
    ///
    /// A token is only live while `exp` is strictly in the future, so a
    /// token whose expiry equals the current second is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(true, |exp| exp <= current_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn expiring_at(exp: i64) -> Claims {
        Claims {
            exp: Some(exp),
            ..Claims::default()
        }
    }

    #[test]
    fn test_for_subject() {
        let now = Utc::now();
        let claims = Claims::for_subject("user123", now, now + Duration::days(30));

        assert_eq!(claims.sub, Some("user123".to_string()));
        assert_eq!(claims.iat, Some(now.timestamp()));

        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = expiring_at(1000);

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_is_expired_no_exp_claim() {
        assert!(Claims::default().is_expired(0));
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let claims = Claims {
            sub: Some("abc".to_string()),
            ..Claims::default()
        };

        let json = serde_json::to_value(claims).unwrap();
        assert_eq!(json, serde_json::json!({ "sub": "abc" }));
    }
}
