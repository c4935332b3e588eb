//! Gateway Configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).
//! A missing credential or endpoint stops the process before the listener binds.

use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const SESSION_URL_VAR: &str = "REALTIME_SESSION_URL";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8888;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Gateway settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: String,
    pub realtime_session_url: String,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = read(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let realtime_session_url =
            read(SESSION_URL_VAR).ok_or(ConfigError::Missing(SESSION_URL_VAR))?;

        let host = read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read(PORT_VAR) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            realtime_session_url,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
