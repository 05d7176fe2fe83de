//! Server configuration from environment variables.
//!
//! - `FREIGHTDESK_BIND_ADDR`: socket address to listen on (default `0.0.0.0:8080`)
//! - `LOG_FORMAT`: `json` (default) or `pretty`
//!
//! Log filtering itself is read by the tracing subscriber from `RUST_LOG`.

use std::net::SocketAddr;

use thiserror::Error;

use freightdesk_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "FREIGHTDESK_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: freightdesk_observability::UnknownLogFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables (unset → `None`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
            })?;

        let log_format = match lookup(LOG_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|source| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    source,
                })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
