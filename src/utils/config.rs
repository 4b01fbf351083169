use chrono::Duration;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
}

const DEVELOPMENT_JWT_SECRET: &str = "development-secret-key";

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parsed_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

/// Parses token lifetimes such as `7d`, `12h`, `30m`, `45s` or a bare number
/// of seconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let split_at = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (amount, unit) = raw.split_at(split_at);
    let amount = amount.parse::<i64>().ok()?;

    match unit {
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        _ => None,
    }
    .filter(|duration| *duration > Duration::zero())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = AppEnvironment::from(env::var("APP_ENV").unwrap_or_default());

        let jwt_secret = match (env::var("JWT_SECRET"), &environment) {
            (Ok(secret), _) if !secret.is_empty() => secret,
            (_, AppEnvironment::Production) => return Err(ConfigError::Missing("JWT_SECRET")),
            _ => {
                tracing::warn!("JWT_SECRET not set, falling back to the development secret");
                DEVELOPMENT_JWT_SECRET.to_string()
            }
        };

        let raw_expires_in = env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "7d".to_string());
        let jwt_expires_in =
            parse_duration(&raw_expires_in).ok_or_else(|| ConfigError::Invalid {
                name: "JWT_EXPIRES_IN",
                value: raw_expires_in.clone(),
            })?;

        Ok(Self {
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 10)?,
                min_connections: parsed_or("DATABASE_MIN_CONNECTIONS", 0)?,
                acquire_timeout_secs: parsed_or("DATABASE_ACQUIRE_TIMEOUT", 30)?,
                idle_timeout_secs: parsed_or("DATABASE_IDLE_TIMEOUT", 600)?,
            },
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                environment,
                port: parsed_or("PORT", 3001)?,
                cors_origins: env::var("CORS_ORIGINS")
                    .map(|raw| parse_origins(&raw))
                    .unwrap_or_default(),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expires_in,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_suffixed_durations() {
        assert_eq!(parse_duration("7d"), Some(Duration::days(7)));
        assert_eq!(parse_duration("12h"), Some(Duration::hours(12)));
        assert_eq!(parse_duration("30m"), Some(Duration::minutes(30)));
        assert_eq!(parse_duration("45s"), Some(Duration::seconds(45)));
        assert_eq!(parse_duration("3600"), Some(Duration::seconds(3600)));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("d"), None);
        assert_eq!(parse_duration("7w"), None);
        assert_eq!(parse_duration("0"), None);
        assert_eq!(parse_duration("1.5h"), None);
    }

    #[test]
    fn splits_cors_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://meals.example.com,,"),
            vec![
                "http://localhost:3000".to_string(),
                "https://meals.example.com".to_string()
            ]
        );
    }

    #[test]
    fn unknown_environment_is_development() {
        assert_eq!(
            AppEnvironment::from("production".to_string()),
            AppEnvironment::Production
        );
        assert_eq!(
            AppEnvironment::from("staging".to_string()),
            AppEnvironment::Development
        );
    }
}
