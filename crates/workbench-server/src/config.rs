//! Server configuration read from the environment.
//!
//! - `WORKBENCH_PORT`: listen port (default: 6004)
//!
//! The bind host is always `0.0.0.0`.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

pub const PORT_VAR: &str = "WORKBENCH_PORT";
pub const DEFAULT_PORT: u16 = 6004;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}': {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var(PORT_VAR).ok().as_deref())
    }

    /// Builds the config from the raw variable value, if set.
    pub fn from_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(ServerConfig::default());
        };
        let port = raw.trim().parse().map_err(|source| ConfigError::InvalidPort {
            var: PORT_VAR,
            value: raw.to_owned(),
            source,
        })?;
        Ok(ServerConfig { port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_when_unset() {
        let config = ServerConfig::from_port_var(None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:6004");
    }

    #[test]
    fn explicit_port() {
        let config = ServerConfig::from_port_var(Some(" 8080 ")).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServerConfig::from_port_var(Some("eighty")).unwrap_err();
        assert!(err.to_string().starts_with("WORKBENCH_PORT must be a port number, got 'eighty'"));
        assert!(ServerConfig::from_port_var(Some("70000")).is_err());
    }
}
