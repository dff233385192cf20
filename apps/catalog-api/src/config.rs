//! Configuration for the catalog API

use core_config::{env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};

pub use core_config::Environment;

/// Default capacity of the in-process creation-event queue.
const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 256;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Bound of the creation-event queue; publishes beyond it are dropped.
    pub event_queue_capacity: usize,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_capacity = env_or_default(
            "EVENT_QUEUE_CAPACITY",
            &DEFAULT_EVENT_QUEUE_CAPACITY.to_string(),
        );
        let event_queue_capacity: usize =
            raw_capacity.parse().map_err(|e| ConfigError::ParseError {
                key: "EVENT_QUEUE_CAPACITY".to_string(),
                details: format!("{e}"),
            })?;

        Ok(Self {
            app: AppInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            event_queue_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(["EVENT_QUEUE_CAPACITY", "HOST", "PORT", "APP_ENV"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.event_queue_capacity, 256);
            assert_eq!(config.server.port, 8080);
            assert!(config.environment.is_development());
        });
    }

    #[test]
    fn test_event_queue_capacity_from_env() {
        temp_env::with_var("EVENT_QUEUE_CAPACITY", Some("32"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.event_queue_capacity, 32);
        });
    }

    #[test]
    fn test_event_queue_capacity_rejects_garbage() {
        temp_env::with_var("EVENT_QUEUE_CAPACITY", Some("lots"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
