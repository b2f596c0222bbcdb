pub mod app;
pub mod auth;
pub mod security;

pub use app::{AppConfig, AppMetadata, ObservabilityConfig, ServerConfig};
pub use auth::{Argon2Config, AuthConfig};
pub use security::{SecurityConfig, SecurityHeadersConfig};

/// Environment variable prefix, e.g. `LIGHTER_ACCOUNT__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "LIGHTER_ACCOUNT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Sanity checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
