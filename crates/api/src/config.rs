//! Process configuration, read from environment variables.
//!
//! | variable                | default        | meaning                                  |
//! |-------------------------|----------------|------------------------------------------|
//! | `BIND_ADDR`             | `0.0.0.0:8080` | listen address                           |
//! | `LOG_FORMAT`            | `json`         | `json` or `pretty`                       |
//! | `USE_PERSISTENT_STORES` | `false`        | use Postgres instead of in-memory stores |
//! | `DATABASE_URL`          | -              | required when persistent                 |
//! | `SEED_DEMO_DATA`        | `false`        | load demo orders into in-memory stores   |
//!
//! `RUST_LOG` is read by the tracing subscriber directly.

use std::net::SocketAddr;

use thiserror::Error;

use orderdesk_observability::LogFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is invalid: {message}")]
    Invalid { name: &'static str, message: String },

    #[error("{0} must be set when USE_PERSISTENT_STORES=true")]
    Missing(&'static str),
}

/// Where products and orders are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    InMemory { seed_demo: bool },
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub persistence: Persistence,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                message: e.to_string(),
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(|e: orderdesk_observability::UnknownLogFormat| {
                ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    message: e.to_string(),
                }
            })?,
            None => LogFormat::default(),
        };

        let persistence = if flag(&lookup, "USE_PERSISTENT_STORES")? {
            let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
            Persistence::Postgres { database_url }
        } else {
            Persistence::InMemory {
                seed_demo: flag(&lookup, "SEED_DEMO_DATA")?,
            }
        };

        Ok(Self {
            bind_addr,
            log_format,
            persistence,
        })
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<bool, ConfigError> {
    match lookup(name).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::Invalid {
            name,
            message: format!("expected true/false, got {v:?}"),
        }),
    }
}
