//! Service configuration read from the environment.

use std::path::PathBuf;

use roadnet_lib::DATA_PATH_ENV;

/// Dataset location used when `ROADNET_DATA_PATH` is unset (container layout).
pub const DEFAULT_DATA_PATH: &str = "/data/roads.geojson";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_path: PathBuf,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Read `ROADNET_DATA_PATH` and `SERVICE_PORT`.
    ///
    /// An unparseable port falls back to the default with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup(DATA_PATH_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let port = match lookup("SERVICE_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "invalid SERVICE_PORT, using default");
                DEFAULT_PORT
            }),
        };

        Self { data_path, port }
    }
}
