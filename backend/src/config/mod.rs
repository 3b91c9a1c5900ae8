//! Central module for application-wide configuration settings.
//!
//! Settings come from the process environment (a `.env` file is loaded by
//! `main` first): database connection parameters, the token signing secret,
//! the bcrypt cost and the listening port. A missing signing secret is fatal.

use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET_KEY must be set to a non-empty value")]
    MissingSecret,

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        Ok(Config {
            server: ServerConfig {
                port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            },
            database: DatabaseConfig {
                host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                user: lookup("DB_USER").unwrap_or_else(|| "root".to_string()),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                name: lookup("DB_NAME").unwrap_or_else(|| "storefront".to_string()),
                port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            },
            auth: AuthConfig {
                jwt_secret,
                bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
