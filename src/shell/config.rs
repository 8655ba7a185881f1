use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

use crate::modules::identity::core::password::DEFAULT_BCRYPT_COST;
use crate::modules::password_reset::core::state::DEFAULT_TOKEN_TTL_HOURS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },

    #[error("{name} is not a valid {expected}: {value}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("BOOTSTRAP_ADMIN_EMAIL and BOOTSTRAP_ADMIN_PASSWORD must be set together")]
    PartialBootstrap,

    #[error("JWT_SECRET must be set when DATABASE_URL is configured")]
    MissingJwtSecret,
}

pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

const TTL_HOURS: RangeInclusive<i64> = 1..=8_760;
const PURGE_INTERVAL_SECS: RangeInclusive<u64> = 1..=604_800;
const BCRYPT_COSTS: RangeInclusive<u32> = 4..=31;

/// Administrator seeded on startup when no user holds that email yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

/// Process configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absent means every store lives in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub reset_token_ttl_hours: i64,
    /// Echo the reset token in the request response. Development only.
    pub reset_token_expose: bool,
    pub mail_from: String,
    pub token_purge_interval_secs: u64,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            database_url: None,
            database_max_connections: 10,
            jwt_secret: DEFAULT_JWT_SECRET.into(),
            jwt_issuer: "k12-platform".into(),
            jwt_ttl_hours: 12,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            reset_token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            reset_token_expose: false,
            mail_from: "no-reply@k12-platform.local".into(),
            token_purge_interval_secs: 3600,
            bootstrap_admin: None,
        }
    }
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |name: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { name }),
                Some(value) => Ok(Some(value.trim().to_string())),
                None => Ok(None),
            }
        };

        let bootstrap_admin = match (
            read("BOOTSTRAP_ADMIN_EMAIL")?,
            read("BOOTSTRAP_ADMIN_PASSWORD")?,
        ) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialBootstrap),
        };

        let database_url = read("DATABASE_URL")?;
        let jwt_secret = match (read("JWT_SECRET")?, &database_url) {
            (Some(secret), _) => secret,
            (None, Some(_)) => return Err(ConfigError::MissingJwtSecret),
            (None, None) => {
                tracing::warn!("JWT_SECRET not set; signing tokens with the development default");
                defaults.jwt_secret
            }
        };

        Ok(Self {
            host: read("APP_HOST")?.unwrap_or(defaults.host),
            port: parse(read("APP_PORT")?, "APP_PORT", "port")?.unwrap_or(defaults.port),
            database_url,
            database_max_connections: parse(
                read("DATABASE_MAX_CONNECTIONS")?,
                "DATABASE_MAX_CONNECTIONS",
                "connection count",
            )?
            .unwrap_or(defaults.database_max_connections),
            jwt_secret,
            jwt_issuer: read("JWT_ISSUER")?.unwrap_or(defaults.jwt_issuer),
            jwt_ttl_hours: within(
                read("JWT_TTL_HOURS")?,
                "JWT_TTL_HOURS",
                "number of hours between 1 and 8760",
                TTL_HOURS,
            )?
            .unwrap_or(defaults.jwt_ttl_hours),
            bcrypt_cost: within(
                read("BCRYPT_COST")?,
                "BCRYPT_COST",
                "bcrypt cost between 4 and 31",
                BCRYPT_COSTS,
            )?
            .unwrap_or(defaults.bcrypt_cost),
            reset_token_ttl_hours: within(
                read("RESET_TOKEN_TTL_HOURS")?,
                "RESET_TOKEN_TTL_HOURS",
                "number of hours between 1 and 8760",
                TTL_HOURS,
            )?
            .unwrap_or(defaults.reset_token_ttl_hours),
            reset_token_expose: flag(read("RESET_TOKEN_EXPOSE")?, "RESET_TOKEN_EXPOSE")?
                .unwrap_or(defaults.reset_token_expose),
            mail_from: read("MAIL_FROM")?.unwrap_or(defaults.mail_from),
            token_purge_interval_secs: within(
                read("TOKEN_PURGE_INTERVAL_SECS")?,
                "TOKEN_PURGE_INTERVAL_SECS",
                "positive number of seconds (at most one week)",
                PURGE_INTERVAL_SECS,
            )?
            .unwrap_or(defaults.token_purge_interval_secs),
            bootstrap_admin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn reset_token_ttl_ms(&self) -> i64 {
        self.reset_token_ttl_hours * 60 * 60 * 1000
    }
}

fn parse<T: FromStr>(
    value: Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value: raw,
            })
        })
        .transpose()
}

fn within<T>(
    value: Option<String>,
    name: &'static str,
    expected: &'static str,
    range: RangeInclusive<T>,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialOrd + Display,
{
    match parse::<T>(value, name, expected)? {
        Some(number) if !range.contains(&number) => Err(ConfigError::Invalid {
            name,
            expected,
            value: number.to_string(),
        }),
        other => Ok(other),
    }
}

fn flag(value: Option<String>, name: &'static str) -> Result<Option<bool>, ConfigError> {
    value
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid {
                name,
                expected: "boolean",
                value: raw,
            }),
        })
        .transpose()
}
