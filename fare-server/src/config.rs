//! Server configuration.
//!
//! Read once at startup from `FARE_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Default path of the offline model file.
pub const DEFAULT_MODEL_FILE: &str = "data/model.json";

/// Default static assets directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where prices come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Remote scoring service
    Remote {
        url: String,
        api_key: Option<String>,
        timeout_secs: u64,
    },
    /// Linear model coefficients on disk
    File(PathBuf),
}

/// Configuration for the fare server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Price model to use.
    pub model: ModelSource,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Prediction cache settings.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset and empty variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(addr) = get("FARE_BIND_ADDR") {
            config.bind_addr = parse_var("FARE_BIND_ADDR", &addr)?;
        }

        if let Some(url) = get("FARE_MODEL_URL") {
            let timeout_secs = match get("FARE_MODEL_TIMEOUT_SECS") {
                Some(v) => parse_var("FARE_MODEL_TIMEOUT_SECS", &v)?,
                None => 10,
            };
            config.model = ModelSource::Remote {
                url,
                api_key: get("FARE_MODEL_API_KEY"),
                timeout_secs,
            };
        } else if let Some(path) = get("FARE_MODEL_FILE") {
            config.model = ModelSource::File(PathBuf::from(path));
        }

        if let Some(dir) = get("FARE_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(ttl) = get("FARE_CACHE_TTL_SECS") {
            config.cache.ttl = Duration::from_secs(parse_var("FARE_CACHE_TTL_SECS", &ttl)?);
        }

        if let Some(capacity) = get("FARE_CACHE_CAPACITY") {
            config.cache.max_capacity = parse_var("FARE_CACHE_CAPACITY", &capacity)?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            model: ModelSource::File(PathBuf::from(DEFAULT_MODEL_FILE)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cache: CacheConfig::default(),
        }
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(
            config.model,
            ModelSource::File(PathBuf::from(DEFAULT_MODEL_FILE))
        );
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.cache.max_capacity, CacheConfig::default().max_capacity);
    }

    #[test]
    fn remote_model_takes_precedence() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FARE_MODEL_URL", "http://scoring:8000"),
            ("FARE_MODEL_API_KEY", "secret"),
            ("FARE_MODEL_TIMEOUT_SECS", "3"),
            ("FARE_MODEL_FILE", "ignored.json"),
        ]))
        .unwrap();

        assert_eq!(
            config.model,
            ModelSource::Remote {
                url: "http://scoring:8000".into(),
                api_key: Some("secret".into()),
                timeout_secs: 3,
            }
        );
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FARE_BIND_ADDR", "0.0.0.0:8080"),
            ("FARE_MODEL_FILE", "/etc/fare/model.json"),
            ("FARE_STATIC_DIR", "/srv/static"),
            ("FARE_CACHE_TTL_SECS", "30"),
            ("FARE_CACHE_CAPACITY", "50"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.model,
            ModelSource::File(PathBuf::from("/etc/fare/model.json"))
        );
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.cache.ttl, Duration::from_secs(30));
        assert_eq!(config.cache.max_capacity, 50);
    }

    #[test]
    fn empty_values_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("FARE_MODEL_URL", "  ")])).unwrap();
        assert!(matches!(config.model, ModelSource::File(_)));
    }

    #[test]
    fn invalid_values_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("FARE_BIND_ADDR", "localhost")]))
            .unwrap_err();
        assert!(err.to_string().starts_with("FARE_BIND_ADDR: invalid value"));

        let err = ServerConfig::from_lookup(lookup(&[("FARE_CACHE_CAPACITY", "-1")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "FARE_CACHE_CAPACITY",
                ..
            }
        ));
    }
}
