//! Server configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_DATA_PATH: &str = "data/global_temp.csv";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file holding the temperature series (`DATA_PATH`).
    pub data_path: PathBuf,
    /// Bind host (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// OTLP collector endpoint (`OTEL_EXPORTER_OTLP_ENDPOINT`); export is
    /// disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, applying defaults for
    /// missing keys. Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            data_path: get("DATA_PATH").map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.data_path, PathBuf::from("data/global_temp.csv"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATA_PATH", "/srv/temps.csv"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ]))
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/srv/temps.csv"));
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(AppError::Config(message)) if message.contains("PORT")));
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "not a host")])).unwrap();

        assert!(matches!(config.socket_addr(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_blank_otlp_endpoint_disables_export() {
        let config = Config::from_lookup(lookup_from(&[("OTEL_EXPORTER_OTLP_ENDPOINT", "  ")])).unwrap();

        assert_eq!(config.otlp_endpoint, None);
    }
}
