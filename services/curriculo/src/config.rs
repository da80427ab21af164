//! Application configuration loaded from `CURRICULO_*` environment variables

use axum_extra::extract::cookie::Key;
use chrono::Duration;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Signs the session cookie; at least 64 bytes
    pub secret_key: Option<String>,
    pub session_lifetime_minutes: i64,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub openai_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            secret_key: None,
            session_lifetime_minutes: 30,
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Load the configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// - `CURRICULO_HOST`: Bind address (default: 0.0.0.0)
    /// - `CURRICULO_PORT`: Bind port (default: 3000)
    /// - `CURRICULO_SECRET_KEY`: Cookie signing secret (default: random per process)
    /// - `CURRICULO_SESSION_LIFETIME_MINUTES`: Login lifetime (default: 30)
    /// - `CURRICULO_OPENAI_API_KEY`: OpenAI key (default: unset, generation disabled)
    /// - `CURRICULO_OPENAI_MODEL`: Chat model (default: gpt-3.5-turbo)
    /// - `CURRICULO_OPENAI_BASE_URL`: API base URL (default: https://api.openai.com/v1)
    /// - `CURRICULO_OPENAI_TIMEOUT_SECONDS`: Request timeout (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config: Self = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("session_lifetime_minutes", defaults.session_lifetime_minutes)?
            .set_default("openai_model", defaults.openai_model)?
            .set_default("openai_base_url", defaults.openai_base_url)?
            .set_default("openai_timeout_seconds", defaults.openai_timeout_seconds as i64)?
            .add_source(Environment::with_prefix("CURRICULO").try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.session_lifetime_minutes <= 0 {
            return Err(ConfigError::Message(
                "CURRICULO_SESSION_LIFETIME_MINUTES must be positive".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_lifetime(&self) -> Duration {
        Duration::minutes(self.session_lifetime_minutes)
    }

    /// Key used to sign the session cookie
    pub fn cookie_key(&self) -> Result<Key, ConfigError> {
        match &self.secret_key {
            Some(secret) => Key::try_from(secret.as_bytes()).map_err(|_| {
                ConfigError::Message(
                    "CURRICULO_SECRET_KEY must be at least 64 bytes long".to_string(),
                )
            }),
            None => {
                warn!("CURRICULO_SECRET_KEY is not set, sessions will not survive a restart");
                Ok(Key::generate())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "CURRICULO_HOST",
        "CURRICULO_PORT",
        "CURRICULO_SECRET_KEY",
        "CURRICULO_SESSION_LIFETIME_MINUTES",
        "CURRICULO_OPENAI_MODEL",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.session_lifetime(), Duration::minutes(30));
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert!(config.secret_key.is_none());
        assert!(config.cookie_key().is_ok());
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        clear_env();
        unsafe {
            env::set_var("CURRICULO_HOST", "127.0.0.1");
            env::set_var("CURRICULO_PORT", "8080");
            env::set_var("CURRICULO_SESSION_LIFETIME_MINUTES", "5");
            env::set_var("CURRICULO_OPENAI_MODEL", "gpt-4o-mini");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.session_lifetime(), Duration::minutes(5));
        assert_eq!(config.openai_model, "gpt-4o-mini");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_positive_lifetime() {
        clear_env();
        unsafe {
            env::set_var("CURRICULO_SESSION_LIFETIME_MINUTES", "0");
        }

        assert!(AppConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_cookie_key_requires_long_secret() {
        let short = AppConfig {
            secret_key: Some("curto".to_string()),
            ..AppConfig::default()
        };
        assert!(short.cookie_key().is_err());

        let long = AppConfig {
            secret_key: Some("k".repeat(64)),
            ..AppConfig::default()
        };
        assert!(long.cookie_key().is_ok());
    }
}
