//! Runtime configuration read from the environment (and `.env` when present)

use std::{env, str::FromStr, sync::LazyLock};

use crate::constants::{
    DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_MAX_BODY_BYTES, DEFAULT_ROOT_COMPANY_NAME,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Process-wide configuration, loaded on first access
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    pub max_body_bytes: usize,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// Root company and user created on first boot
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub company_name: String,
    pub company_email: Option<String>,
    pub user_email: Option<String>,
    pub user_password: Option<String>,
    pub user_first_name: String,
    pub user_last_name: String,
}

impl SeedConfig {
    /// Seeding needs at least the root user's credentials
    pub fn is_enabled(&self) -> bool {
        self.user_email.is_some() && self.user_password.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue(name)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: optional("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: parsed_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format: parsed_or("LOG_FORMAT", LogFormat::Pretty)?,
            max_body_bytes: parsed_or("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        };

        let database = DatabaseConfig {
            url: required("DATABASE_URL")?,
            max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
            acquire_timeout_secs: parsed_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
            )?,
        };

        let jwt = JwtConfig {
            secret: required("JWT_SECRET")?,
            expiry_hours: parsed_or("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
        };

        let seed = SeedConfig {
            company_name: optional("ROOT_COMPANY_NAME")
                .unwrap_or_else(|| DEFAULT_ROOT_COMPANY_NAME.to_string()),
            company_email: optional("ROOT_COMPANY_EMAIL"),
            user_email: optional("ROOT_USER_EMAIL"),
            user_password: optional("ROOT_USER_PASSWORD"),
            user_first_name: optional("ROOT_USER_FIRST_NAME").unwrap_or_else(|| "Root".to_string()),
            user_last_name: optional("ROOT_USER_LAST_NAME").unwrap_or_else(|| "Admin".to_string()),
        };

        Ok(Self {
            server,
            database,
            jwt,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse(), Ok(LogFormat::Json));
        assert_eq!(" JSON ".parse(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_unset_variable_uses_default() {
        let port = parsed_or("HRDESK_TEST_UNSET_PORT", DEFAULT_SERVER_PORT).unwrap();
        assert_eq!(port, 8080);
        assert!(matches!(
            required("HRDESK_TEST_UNSET_SECRET"),
            Err(ConfigError::Missing("HRDESK_TEST_UNSET_SECRET"))
        ));
    }

    #[test]
    fn test_seed_requires_credentials() {
        let mut seed = SeedConfig {
            company_name: DEFAULT_ROOT_COMPANY_NAME.to_string(),
            company_email: None,
            user_email: Some("root@example.com".to_string()),
            user_password: None,
            user_first_name: "Root".to_string(),
            user_last_name: "Admin".to_string(),
        };
        assert!(!seed.is_enabled());

        seed.user_password = Some("secret-password".to_string());
        assert!(seed.is_enabled());
    }
}
