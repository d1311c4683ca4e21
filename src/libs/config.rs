//! Configuration management for taskdesk.
//!
//! Settings live in a JSON file inside the per-user data directory resolved by
//! [`DataStorage`]. Values are layered in this order, later layers winning:
//!
//! 1. Built-in defaults
//! 2. `config.json` in the data directory
//! 3. Environment variables (`TASKDESK_HOST`, `TASKDESK_PORT`, `TASKDESK_DB`),
//!    including those loaded from a `.env` file
//! 4. Command-line flags, applied through [`Config::apply_overrides`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("listening on {}", config.server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "taskdesk.db";

pub const ENV_HOST: &str = "TASKDESK_HOST";
pub const ENV_PORT: &str = "TASKDESK_PORT";
pub const ENV_DB: &str = "TASKDESK_DB";

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Address in `host:port` form, suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Database location.
///
/// When `path` is `None` the database is stored as [`DB_FILE_NAME`] in the
/// data directory.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}

/// Values given on the command line. `None` leaves the configured value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Reads the configuration file (or defaults when absent) and applies
    /// environment overrides.
    pub fn read() -> Result<Config> {
        let mut config = Self::read_file()?;
        config.apply_env()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Reads only the configuration file, ignoring the environment.
    pub fn read_file() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", config_file_path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var(ENV_HOST) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(ENV_PORT) {
            self.server.port = port.parse().with_context(|| format!("{} is not a valid port: {}", ENV_PORT, port))?;
        }
        if let Ok(db) = env::var(ENV_DB) {
            self.database.path = Some(PathBuf::from(db));
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(db) = overrides.db {
            self.database.path = Some(db);
        }
    }
}
