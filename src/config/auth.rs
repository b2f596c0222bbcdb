use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Session and credential configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Session lifetime in seconds
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime: u64,
    /// Expired session sweep interval in seconds
    #[serde(default = "default_session_sweep_interval")]
    pub session_sweep_interval: u64,
    /// Mark the session cookie `Secure`
    #[serde(default)]
    pub secure_cookie: bool,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of threads)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
}

fn default_session_cookie() -> String {
    "session".to_string()
}

fn default_session_lifetime() -> u64 {
    3600 // 1 hour
}

fn default_session_sweep_interval() -> u64 {
    300 // 5 minutes
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

impl AuthConfig {
    pub fn session_lifetime(&self) -> Duration {
        Duration::from_secs(self.session_lifetime)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: default_session_cookie(),
            session_lifetime: default_session_lifetime(),
            session_sweep_interval: default_session_sweep_interval(),
            secure_cookie: false,
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let valid_cookie_name = !self.session_cookie.is_empty()
            && self
                .session_cookie
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_cookie_name {
            return Err(ConfigError::ValidationError(
                "auth.session_cookie must be a non-empty token of [A-Za-z0-9_-]".to_string(),
            ));
        }
        if self.session_lifetime == 0 {
            return Err(ConfigError::ValidationError(
                "auth.session_lifetime must be > 0".to_string(),
            ));
        }
        if self.session_sweep_interval == 0 {
            return Err(ConfigError::ValidationError(
                "auth.session_sweep_interval must be > 0".to_string(),
            ));
        }
        self.argon2.validate()?;
        Ok(())
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        // Floors enforced by the argon2 crate itself
        if self.memory_cost < 8 * self.parallelism.max(1) {
            return Err(ConfigError::ValidationError(
                "auth.argon2.memory_cost must be >= 8 * parallelism".to_string(),
            ));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.time_cost must be > 0".to_string(),
            ));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.parallelism must be > 0".to_string(),
            ));
        }
        if self.hash_length < 4 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.hash_length must be >= 4".to_string(),
            ));
        }
        Ok(())
    }
}
