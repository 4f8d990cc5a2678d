use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::errors::UnauthorizedReason;
use crate::user::ports::AuthServicePort;
use crate::user::ports::Clock;
use crate::user::ports::UserRepository;

/// Verified against when the email is unknown, so both login failure paths
/// cost one password verification.
const TIMING_EQUALIZER_PASSWORD: &str = "timing-equalizer-not-a-real-password";

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR, C>
where
    UR: UserRepository,
    C: Clock,
{
    repository: Arc<UR>,
    clock: Arc<C>,
    authenticator: Arc<Authenticator>,
    dummy_hash: Arc<str>,
}

impl<UR, C> AuthService<UR, C>
where
    UR: UserRepository,
    C: Clock,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// Hashes a throwaway password once with the configured cost.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `clock` - Time source for token issuance and expiry
    /// * `authenticator` - Password hasher and token issuer/verifier
    ///
    /// # Errors
    /// * `Hashing` - The throwaway hash could not be computed
    pub fn new(
        repository: Arc<UR>,
        clock: Arc<C>,
        authenticator: Arc<Authenticator>,
    ) -> Result<Self, AuthError> {
        let dummy_hash = authenticator.hash_password(TIMING_EQUALIZER_PASSWORD)?;

        Ok(Self {
            repository,
            clock,
            authenticator,
            dummy_hash: Arc::from(dummy_hash),
        })
    }
}

#[async_trait]
impl<UR, C> AuthServicePort for AuthService<UR, C>
where
    UR: UserRepository,
    C: Clock,
{
    async fn signup(&self, credentials: Credentials) -> Result<User, AuthError> {
        let email = EmailAddress::new(credentials.email)?;

        if self.repository.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::DuplicateUser(email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await??;

        let user = User {
            id: UserId::new(),
            email,
            password_hash,
            created_at: self.clock.now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User signed up");

        Ok(created_user)
    }

    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;

        let user = match self.repository.find_by_email(&credentials.email).await? {
            Some(user) => user,
            None => {
                let dummy_hash = Arc::clone(&self.dummy_hash);
                tokio::task::spawn_blocking(move || {
                    authenticator.verify_password(password.expose(), &dummy_hash)
                })
                .await?;

                tracing::debug!("Login rejected: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let now = self.clock.now();
        let stored_hash = user.password_hash.clone();
        let subject = user.id.to_string();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), &stored_hash, &subject, now)
        })
        .await?;

        match result {
            Ok(authenticated) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(LoginOutcome {
                    user,
                    token: authenticated.access_token,
                    expires_at: authenticated.expires_at,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(user_id = %user.id, error = %e, "Failed to sign session token");
                Err(AuthError::from(e))
            }
        }
    }

    async fn validate(&self, token: &str) -> Result<User, AuthError> {
        let subject = self
            .authenticator
            .validate_token(token, self.clock.now())?;

        let user_id = UserId::from_string(&subject)
            .map_err(|_| AuthError::Unauthorized(UnauthorizedReason::UnknownSubject))?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::Unauthorized(UnauthorizedReason::UnknownSubject))
    }
}
