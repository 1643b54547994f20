//! Runtime configuration, read from the environment (and `.env` via dotenvy).

use std::env;
use std::fmt;
use std::time::Duration;

use chrono_tz::Tz;

use crate::models::meetup::DisplaySettings;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_API_URL: &str = "http://localhost:3333/";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BANNER: &str = "/static/img/banner.svg";
pub const DEFAULT_AVATAR_PLACEHOLDER: &str = "https://api.adorable.io/avatars/50/";

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout(String),
    InvalidTimezone(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout(v) => write!(f, "MEETAPP_API_TIMEOUT_SECS is not a positive number of seconds: {v}"),
            ConfigError::InvalidTimezone(v) => write!(f, "MEETAPP_TIMEZONE is not a known timezone: {v}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub api_url: String,
    pub api_token: Option<String>,
    pub api_timeout: Duration,
    pub timezone: Tz,
    pub default_banner: String,
    pub avatar_placeholder: String,
    /// Raw SESSION_KEY value; validated when the cookie key is built.
    pub session_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            timezone: Tz::UTC,
            default_banner: DEFAULT_BANNER.to_string(),
            avatar_placeholder: DEFAULT_AVATAR_PLACEHOLDER.to_string(),
            session_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_timeout = match get("MEETAPP_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => defaults.api_timeout,
        };

        let timezone = match get("MEETAPP_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone(raw))?,
            None => defaults.timezone,
        };

        Ok(Self {
            bind: get("MEETAPP_BIND").unwrap_or(defaults.bind),
            api_url: get("MEETAPP_API_URL").unwrap_or(defaults.api_url),
            api_token: get("MEETAPP_API_TOKEN"),
            api_timeout,
            timezone,
            default_banner: get("MEETAPP_DEFAULT_BANNER").unwrap_or(defaults.default_banner),
            avatar_placeholder: get("MEETAPP_AVATAR_PLACEHOLDER").unwrap_or(defaults.avatar_placeholder),
            session_key: get("SESSION_KEY"),
        })
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            timezone: self.timezone,
            default_banner: self.default_banner.clone(),
            avatar_placeholder: self.avatar_placeholder.clone(),
        }
    }
}
