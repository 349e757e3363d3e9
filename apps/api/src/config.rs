use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::assessment::recommendation::MissingScorePolicy;
use crate::assessment::session::SessionSettings;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub recommendation_delay_ms: u64,
    pub report_delay_ms: u64,
    pub require_all_scores: bool,
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "127.0.0.1"),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            recommendation_delay_ms: parse_env("RECOMMENDATION_DELAY_MS", 2000)?,
            report_delay_ms: parse_env("REPORT_DELAY_MS", 2000)?,
            require_all_scores: parse_flag(&env_or("REQUIRE_ALL_SCORES", "false"))
                .context("REQUIRE_ALL_SCORES must be true or false")?,
            public_url: env_or("PUBLIC_URL", "http://localhost:8080/assessment"),
        })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            recommendation_delay: Duration::from_millis(self.recommendation_delay_ms),
            missing_score_policy: if self.require_all_scores {
                MissingScorePolicy::Reject
            } else {
                MissingScorePolicy::TreatAsZero
            },
        }
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            recommendation_delay_ms: 2000,
            report_delay_ms: 2000,
            require_all_scores: false,
            public_url: "http://localhost:8080/assessment".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_strict_mode_maps_to_reject_policy() {
        let config = Config {
            require_all_scores: true,
            recommendation_delay_ms: 10,
            ..Config::default()
        };
        let settings = config.session_settings();
        assert_eq!(settings.missing_score_policy, MissingScorePolicy::Reject);
        assert_eq!(settings.recommendation_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_defaults_are_lenient() {
        let settings = Config::default().session_settings();
        assert_eq!(settings.missing_score_policy, MissingScorePolicy::TreatAsZero);
    }
}
