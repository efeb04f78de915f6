use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};
use crate::events::DEFAULT_EVENT_CAPACITY;
use crate::status::StatusThresholds;

pub const ENV_CONFIG_PATH: &str = "LOAN_TRACKER_CONFIG";
pub const ENV_BIND_ADDRESS: &str = "LOAN_TRACKER_BIND";
pub const ENV_LOG_LEVEL: &str = "LOAN_TRACKER_LOG";

/// tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub status: StatusThresholds,
    pub server: ServerConfig,
    /// boot with the sample portfolio instead of an empty store
    pub seed_sample_data: bool,
    /// most recent payment events retained by the tracker
    pub event_capacity: usize,
}

/// server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// one of error, warn, info, debug, trace, off
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            status: StatusThresholds::default(),
            server: ServerConfig::default(),
            seed_sample_data: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// parse from json; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// file named by `LOAN_TRACKER_CONFIG` if set, defaults otherwise, then
    /// the bind and log level overrides
    pub fn load() -> Result<Self> {
        let config = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(
            std::env::var(ENV_BIND_ADDRESS).ok(),
            std::env::var(ENV_LOG_LEVEL).ok(),
        )
    }

    pub fn with_overrides(
        mut self,
        bind_address: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self> {
        if let Some(bind_address) = bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(log_level) = log_level {
            self.server.log_level = log_level;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.status.validate()?;
        if self.server.bind_address.trim().is_empty() {
            return Err(TrackerError::InvalidConfiguration {
                message: "bind_address must not be empty".to_string(),
            });
        }
        self.server.level_filter()?;
        Ok(())
    }
}

impl ServerConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| TrackerError::InvalidConfiguration {
                message: format!("unknown log level: {}", self.log_level),
            })
    }
}
