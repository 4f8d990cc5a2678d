//! Authentication utilities library
//!
//! Provides the building blocks of a session-token login flow:
//! - Password hashing (Argon2id, tunable cost)
//! - Session token issuance (HS256, fixed lifetime)
//! - Session token verification with a precise rejection reason
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{SigningSecret, TokenIssuer, TokenVerifier};
//! use chrono::Utc;
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(&secret);
//! let verifier = TokenVerifier::new(&secret);
//!
//! let now = Utc::now();
//! let token = issuer.issue("user123", now).unwrap();
//! assert_eq!(verifier.verify(&token, now).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SigningSecret};
//! use chrono::Utc;
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&secret);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let now = Utc::now();
//! let result = auth.authenticate("password123", &hash, "user123", now).unwrap();
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token, now).unwrap();
//! assert_eq!(subject, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::SigningSecret;
pub use jwt::TokenIssuer;
pub use jwt::TokenRejection;
pub use jwt::TokenVerifier;
pub use jwt::DEFAULT_TOKEN_TTL_DAYS;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
