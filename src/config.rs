use crate::error::{config::ConfigError, AppError};

/// Default seconds between reconciliation runs.
const DEFAULT_RECONCILE_INTERVAL_SECONDS: u64 = 120;

/// Default lookahead window (days) for upcoming-expiry reminders.
const DEFAULT_EXPIRY_NOTICE_DAYS: i64 = 10;

pub struct Config {
    pub database_url: String,

    pub reconcile_interval_secs: u64,
    pub expiry_notice_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            reconcile_interval_secs: parse_env_or(
                "RECONCILE_INTERVAL_SECONDS",
                DEFAULT_RECONCILE_INTERVAL_SECONDS,
            )?,
            expiry_notice_days: parse_env_or("EXPIRY_NOTICE_DAYS", DEFAULT_EXPIRY_NOTICE_DAYS)?,
        })
    }
}

/// Reads an optional environment variable, falling back to a default when
/// unset and failing when set to something unparseable.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string())),
        Err(_) => Ok(default),
    }
}
