//! # sl-config
//!
//! Layered settings for the SuiLaughs binary: serde defaults, then an
//! optional `sui-laughs.toml`, then `SUILAUGHS__SECTION__KEY` environment
//! variables (a `.env` file is loaded into the environment first).

use std::time::Duration;

use serde::Deserialize;
use sl_core::ledger::Network;
use thiserror::Error;

pub const ENV_PREFIX: &str = "SUILAUGHS";
pub const CONFIG_FILE: &str = "sui-laughs";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Absolute URL placed in share payloads
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            public_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub network: Network,
    /// Replace with the package id after deployment
    pub package_id: String,
    pub submit_delay_ms: u64,
    pub estimated_gas_sui: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            package_id: "0x...".to_string(),
            submit_delay_ms: 2000,
            estimated_gas_sui: 0.001,
        }
    }
}

impl LedgerConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub seed_samples: bool,
    pub sync_on_startup: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            sync_on_startup: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        let settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        Self::from_builder(settings)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.ledger.package_id.trim().is_empty() {
            return Err(ConfigError::Invalid("ledger.package_id must not be empty".into()));
        }
        if !self.ledger.estimated_gas_sui.is_finite() || self.ledger.estimated_gas_sui < 0.0 {
            return Err(ConfigError::Invalid(
                "ledger.estimated_gas_sui must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn empty_source_gives_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ledger.network, Network::Testnet);
        assert_eq!(config.ledger.submit_delay(), Duration::from_millis(2000));
        assert!(config.feed.seed_samples);
        assert!(!config.feed.sync_on_startup);
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml(
            r#"
            [server]
            port = 9090

            [ledger]
            network = "mainnet"
            package_id = "0xcafe"
            submit_delay_ms = 0

            [feed]
            seed_samples = false
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.ledger.network, Network::Mainnet);
        assert_eq!(config.ledger.package_id, "0xcafe");
        assert_eq!(config.ledger.submit_delay(), Duration::ZERO);
        assert!(!config.feed.seed_samples);
    }

    #[test]
    fn zero_port_is_rejected() {
        let result = from_toml("[server]\nport = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn negative_gas_is_rejected() {
        let result = from_toml("[ledger]\nestimated_gas_sui = -1.0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
