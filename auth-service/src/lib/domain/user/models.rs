use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::UserIdError;
use crate::user::errors::ValidationError;

/// User aggregate entity.
///
/// Represents a registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. The address is
/// kept exactly as supplied; lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `MissingEmail` - Empty
    /// * `InvalidEmail` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| ValidationError::InvalidEmail(e.to_string()))
    }

    /// Wrap an address that was validated when it was first stored.
    pub fn from_stored(email: String) -> Self {
        EmailAddress(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password held only for the duration of one call.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `MissingPassword` - Empty
    pub fn new(password: String) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Email and password as submitted to signup or login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}

impl Credentials {
    /// Construct credentials, requiring both fields to be present.
    ///
    /// The email format is not checked here: signup validates it, login
    /// treats an unknown address like any other mismatch.
    ///
    /// # Errors
    /// * `MissingEmail` - Email is empty
    /// * `MissingPassword` - Password is empty
    pub fn new(email: String, password: String) -> Result<Self, ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        let password = Password::new(password)?;
        Ok(Self { email, password })
    }
}

/// Successful login: the user and a session token for them.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
