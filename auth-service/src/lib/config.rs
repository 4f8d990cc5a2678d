use std::env;

use auth::HashCost;
use auth::JwtError;
use auth::SigningSecret;
use auth::DEFAULT_TOKEN_TTL_DAYS;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cookie: CookieConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_days")]
    pub expiration_days: i64,
}

// Keeps the secret out of the startup log line
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CookieConfig {
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self { secure: true }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        let cost = HashCost::default();
        Self {
            memory_kib: cost.memory_kib,
            iterations: cost.iterations,
            parallelism: cost.parallelism,
        }
    }
}

impl From<&PasswordConfig> for HashCost {
    fn from(config: &PasswordConfig) -> Self {
        HashCost {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

/// Longest session lifetime accepted from configuration.
pub const MAX_TOKEN_TTL_DAYS: i64 = 365;

fn default_max_connections() -> u32 {
    5
}

fn default_expiration_days() -> i64 {
    DEFAULT_TOKEN_TTL_DAYS
}

impl JwtConfig {
    /// Build the signing secret.
    ///
    /// # Errors
    /// * `MissingSecret` - No secret was configured (or it is blank)
    pub fn signing_secret(&self) -> Result<SigningSecret, JwtError> {
        if self.secret.trim().is_empty() {
            return Err(JwtError::MissingSecret);
        }

        // Signed with the configured bytes as-is
        SigningSecret::new(self.secret.as_bytes())
    }

    /// Session lifetime.
    ///
    /// # Errors
    /// * `ConfigError::Message` - `expiration_days` is outside `1..=MAX_TOKEN_TTL_DAYS`
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        if !(1..=MAX_TOKEN_TTL_DAYS).contains(&self.expiration_days) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_days must be between 1 and {}, got {}",
                MAX_TOKEN_TTL_DAYS, self.expiration_days
            )));
        }

        Ok(chrono::Duration::days(self.expiration_days))
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
