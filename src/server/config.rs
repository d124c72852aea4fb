/**
 * Server Configuration
 *
 * Loads the full runtime configuration from the environment (with `.env`
 * support via dotenv, applied in `main`). Unlike ad hoc per-call reads,
 * everything is resolved once at startup into a typed `Config`; required
 * values that are missing abort startup with a typed error instead of
 * falling back to an insecure default.
 *
 * # Variables
 *
 * - `DATABASE_URL`      - required, Postgres connection string
 * - `JWT_SECRET`        - required, token signing secret
 * - `JWT_EXPIRY_DAYS`   - optional, default 7
 * - `OPENAI_API_KEY`    - required, completion API key
 * - `OPENAI_BASE_URL`   - optional, default `https://api.openai.com`
 * - `OPENAI_MODEL`      - optional, default `gpt-3.5-turbo`
 * - `SERVER_PORT`       - optional, default 3000
 */
use thiserror::Error;

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing and verifying session tokens
    pub jwt_secret: String,
    /// Token lifetime in days
    pub token_expiry_days: i64,
}

/// Completion API configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    /// Base URL of an OpenAI-compatible API, without trailing slash
    pub base_url: String,
    pub model: String,
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub auth: AuthConfig,
    pub generation: GenerationConfig,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is unset or a numeric
    /// variable fails to parse. Callers are expected to treat this as
    /// fatal before the server binds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let jwt_secret = require("JWT_SECRET")?;
        let api_key = require("OPENAI_API_KEY")?;

        let token_expiry_days = match std::env::var("JWT_EXPIRY_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or(ConfigError::Invalid("JWT_EXPIRY_DAYS"))?,
            Err(_) => 7,
        };

        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            Err(_) => 3000,
        };

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        Ok(Self {
            database_url,
            server_port,
            auth: AuthConfig {
                jwt_secret,
                token_expiry_days,
            },
            generation: GenerationConfig {
                api_key,
                base_url: base_url.trim_end_matches('/').to_string(),
                model,
            },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
