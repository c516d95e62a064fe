use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::net::SocketAddr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub credentials: BasicCredentials,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the CPU-derived pool size when set
    pub max_pool_size: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The single user allowed to call the API
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup (used by tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::InvalidInput("DATABASE_URL environment variable not found".to_string())
        })?;
        validate_database_url(&url)?;

        let max_pool_size = match lookup("DB_POOL_MAX_SIZE") {
            Some(raw) => {
                let size = raw.trim().parse::<u32>()?;
                if size == 0 {
                    return Err(AppError::InvalidInput(
                        "DB_POOL_MAX_SIZE must be greater than zero".to_string(),
                    ));
                }
                Some(size)
            }
            None => None,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        let username = required(&lookup, "APP_USERNAME")?;
        let password = required(&lookup, "APP_PASSWORD")?;

        Ok(Self {
            database: DatabaseConfig { url, max_pool_size },
            server: ServerConfig { host, port },
            credentials: BasicCredentials { username, password },
        })
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::InvalidInput(format!("Invalid bind address: {}", e)))
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::InvalidInput(format!(
            "{} environment variable not found",
            key
        ))),
    }
}

fn validate_database_url(url: &str) -> AppResult<()> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::InvalidInput(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }
    Ok(())
}
