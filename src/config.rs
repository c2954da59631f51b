//! Configuration loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

use crate::user_actor::IdPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind to (`HOST`)
    pub host: String,
    /// Port to bind to (`PORT`)
    pub port: u16,
    /// Id assignment for new users (`USER_ID_POLICY`: `length` or `monotonic`)
    pub id_policy: IdPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_policy: IdPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Invalid values fall
    /// back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let id_policy = match lookup("USER_ID_POLICY") {
            Some(raw) => IdPolicy::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Unknown USER_ID_POLICY, using length");
                IdPolicy::default()
            }),
            None => defaults.id_policy,
        };

        Self {
            host,
            port,
            id_policy,
        }
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}
