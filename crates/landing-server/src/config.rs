//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Where to listen and what to serve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the built frontend (`index.html`, wasm, assets)
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("STATIC_DIR").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, static_dir: Option<String>) -> Result<Self, ConfigError> {
        let value = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = value
            .parse()
            .map_err(|source| ConfigError::BindAddr { value, source })?;

        Ok(Self {
            bind_addr,
            static_dir: static_dir.map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_config_overrides() {
        let config = ServerConfig::from_vars(Some("127.0.0.1:8080".into()), Some("public".into())).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = ServerConfig::from_vars(Some("localhost".into()), None).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
