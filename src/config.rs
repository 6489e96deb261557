use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::QuoteError;

pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "QUOTES_HOST";
pub const CATALOG_VAR: &str = "QUOTES_CATALOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to load catalog from {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: QuoteError,
    },
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON catalog to serve instead of the built-in quotes.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| {
                info!("{HOST_VAR} not set, using default: {}", defaults.host);
                defaults.host
            }),
            port: try_load(&lookup, PORT_VAR, defaults.port)?,
            catalog_path: lookup(CATALOG_VAR).map(PathBuf::from),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_json_file(path).map_err(|source| ConfigError::Catalog {
                    path: path.clone(),
                    source,
                })?;
                if catalog.is_empty() {
                    warn!("Catalog {} is empty, every random pick will 404", path.display());
                }
                info!("Loaded {} quotes from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| {
                warn!("Invalid {key} value: {e}");
                ConfigError::Invalid {
                    key,
                    value,
                    reason: e.to_string(),
                }
            })
        }
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
