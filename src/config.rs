//! Host configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
}

/// Where to listen and which built bundle to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Directory holding the built client bundle (`index.html` + assets).
    pub site_dir: PathBuf,
}

impl HostConfig {
    /// Read `PORT` and `SITE_DIR`, falling back to defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_DIR").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `port` does not parse.
    pub fn from_vars(port: Option<&str>, site_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?,
        };
        let site_dir = site_dir
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        Ok(Self { port, site_dir })
    }
}
