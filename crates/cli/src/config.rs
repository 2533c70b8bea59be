//! Configuration for `mockbase serve`.
//!
//! Settings come from an optional TOML file; every key may be omitted:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [storage]
//! file = "./fixtures/data.json"
//! ```

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use mockbase::{constants::DEFAULT_DATA_FILE, MockbaseError, Result};
use serde::Deserialize;
use tokio::fs as tokio_fs;
use tracing::{debug, error, info};

/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 8000;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server:  ServerConfig,
    /// Backing file settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: IpAddr,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backing file settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the JSON document served.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl ServerConfig {
    /// The socket address the server binds.
    pub const fn socket_addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

const fn default_host() -> IpAddr { IpAddr::V4(Ipv4Addr::UNSPECIFIED) }
const fn default_port() -> u16 { DEFAULT_PORT }
fn default_file() -> PathBuf { PathBuf::from(DEFAULT_DATA_FILE) }

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`MockbaseError::ConfigError`] on malformed TOML, unknown keys or
/// values of the wrong type.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| {
        MockbaseError::ConfigError {
            message: e.to_string(),
        }
    })
}

/// Loads configuration from a TOML file.
///
/// # Errors
///
/// Returns [`MockbaseError::ConfigError`] if the file cannot be read or is not
/// a valid configuration.
pub async fn load_config(path: &Path) -> Result<Config> {
    debug!("Reading configuration from {}", path.display());
    let text = tokio_fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read config file {}: {}", path.display(), e);
        MockbaseError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        }
    })?;
    parse_config(&text).map_err(|e| {
        error!("Invalid config file {}: {}", path.display(), e);
        e
    })
}

/// Loads configuration from `path` if one is given, or returns the defaults.
///
/// # Errors
///
/// Propagates [`load_config`] failures; a named file that cannot be loaded is
/// never silently replaced by the defaults.
pub async fn load_config_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = load_config(path).await?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        },
        None => {
            debug!("No config file specified, using defaults");
            Ok(Config::default())
        },
    }
}
