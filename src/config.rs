use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use log::warn;

use crate::{errors::AppError, SESSION_TTL_SECS};

const DEV_SESSION_SECRET: &str = "event-tickets-dev-secret";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub session_secret: String,
    pub session_ttl_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://tickets.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_max_connections: 5,
            session_secret: DEV_SESSION_SECRET.to_string(),
            session_ttl_secs: SESSION_TTL_SECS,
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let session_secret = match lookup("SESSION_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("SESSION_SECRET is not set, using the development secret");
                defaults.session_secret
            }
        };
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            session_secret,
            session_ttl_secs: parse_var(&lookup, "SESSION_TTL_SECS", defaults.session_ttl_secs)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| AppError::Config {
            reason: format!("{} has an invalid value '{}'", key, raw),
        }),
        None => Ok(default),
    }
}
