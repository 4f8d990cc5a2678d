use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Validation` - Email is not a valid address
    /// * `DuplicateUser` - Email is already registered
    /// * `Storage` - Database operation failed
    async fn signup(&self, credentials: Credentials) -> Result<User, AuthError>;

    /// Check credentials and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Signing` - Token could not be signed
    /// * `Storage` - Database operation failed
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, AuthError>;

    /// Resolve the user a session token belongs to.
    ///
    /// # Errors
    /// * `Unauthorized` - Token rejected, or its subject is no longer a user
    /// * `Storage` - Database operation failed
    async fn validate(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `DuplicateUser` - Email is already registered
    /// * `Storage` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve user by email address (exact match).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Source of the current time for token issuance and expiry checks.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}
