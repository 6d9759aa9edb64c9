use axum::http::HeaderValue;
use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;
const DEFAULT_SESSION_MAX_AGE_HOURS: i64 = 12;
const MAX_SESSION_IDLE_MINUTES: i64 = 30 * 24 * 60;
const MAX_SESSION_MAX_AGE_HOURS: i64 = 366 * 24;
const DEFAULT_RATE_LIMIT_REPLENISH_SECONDS: u64 = 2;
const DEFAULT_RATE_LIMIT_BURST: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Single origin allowed to call the API with credentials; CORS is off when unset.
    pub allowed_origin: Option<HeaderValue>,

    pub session_idle_minutes: i64,
    pub session_max_age_hours: i64,
    pub secure_cookies: bool,

    pub rate_limit_replenish_seconds: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            get("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = parse_or("BIND_ADDRESS", get("BIND_ADDRESS"), DEFAULT_BIND_ADDRESS)?;

        let allowed_origin = match get("ALLOWED_ORIGIN") {
            Some(origin) => Some(HeaderValue::from_str(&origin).map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "ALLOWED_ORIGIN".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let session_idle_minutes = at_most(
            "SESSION_IDLE_MINUTES",
            positive(
                "SESSION_IDLE_MINUTES",
                parse_or(
                    "SESSION_IDLE_MINUTES",
                    get("SESSION_IDLE_MINUTES"),
                    DEFAULT_SESSION_IDLE_MINUTES,
                )?,
            )?,
            MAX_SESSION_IDLE_MINUTES,
        )?;
        let session_max_age_hours = at_most(
            "SESSION_MAX_AGE_HOURS",
            positive(
                "SESSION_MAX_AGE_HOURS",
                parse_or(
                    "SESSION_MAX_AGE_HOURS",
                    get("SESSION_MAX_AGE_HOURS"),
                    DEFAULT_SESSION_MAX_AGE_HOURS,
                )?,
            )?,
            MAX_SESSION_MAX_AGE_HOURS,
        )?;
        let secure_cookies = parse_or("SECURE_COOKIES", get("SECURE_COOKIES"), true)?;

        let rate_limit_replenish_seconds = positive(
            "RATE_LIMIT_REPLENISH_SECONDS",
            parse_or(
                "RATE_LIMIT_REPLENISH_SECONDS",
                get("RATE_LIMIT_REPLENISH_SECONDS"),
                DEFAULT_RATE_LIMIT_REPLENISH_SECONDS,
            )?,
        )?;
        let rate_limit_burst = positive(
            "RATE_LIMIT_BURST",
            parse_or(
                "RATE_LIMIT_BURST",
                get("RATE_LIMIT_BURST"),
                DEFAULT_RATE_LIMIT_BURST,
            )?,
        )?;

        Ok(Self {
            database_url,
            bind_address,
            allowed_origin,
            session_idle_minutes,
            session_max_age_hours,
            secure_cookies,
            rate_limit_replenish_seconds,
            rate_limit_burst,
        })
    }

    /// Absolute session lifetime measured from login.
    pub fn session_max_age(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_max_age_hours)
    }

    /// Inactivity expiry handed to the session layer.
    pub fn session_idle_timeout(&self) -> time::Duration {
        time::Duration::minutes(self.session_idle_minutes)
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

fn positive<T>(name: &str, value: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Default + Display,
{
    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        })
    }
}

fn at_most<T>(name: &str, value: T, max: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Display,
{
    if value <= max {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: format!("must be at most {}", max),
        })
    }
}
