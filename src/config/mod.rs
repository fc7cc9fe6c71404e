//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::order::Order;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Default `tracing` filter, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_filter: "info".to_string(),
        }
    }
}

/// Complete configuration for the order service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersConfig {
    pub server: ServerConfig,

    /// Orders loaded into the in-memory store at startup
    pub seed_orders: Vec<Order>,
}

impl OrdersConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.server.host, self.server.port);
        address
            .parse()
            .map_err(|_| ConfigError::InvalidAddress { address })
    }

    /// Check the seed orders against the order invariants
    ///
    /// Seed data bypasses the validator chain, so it is checked here instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address()?;

        let mut seen = HashSet::new();
        for (position, order) in self.seed_orders.iter().enumerate() {
            if order.id.is_empty() {
                return Err(ConfigError::EmptySeedId { position });
            }
            if !seen.insert(order.id.as_str()) {
                return Err(ConfigError::DuplicateSeedId {
                    id: order.id.clone(),
                });
            }

            let invalid = |message: &str| ConfigError::InvalidSeedOrder {
                id: order.id.clone(),
                message: message.to_string(),
            };
            if order.deliver_to.is_empty() {
                return Err(invalid("deliverTo is empty"));
            }
            if order.mobile_number.is_empty() {
                return Err(invalid("mobileNumber is empty"));
            }
            if order.dishes.is_empty() {
                return Err(invalid("no dishes"));
            }
            if let Some(index) = order.dishes.iter().position(|dish| !dish.has_valid_quantity()) {
                return Err(invalid(&format!("dish {} has an invalid quantity", index)));
            }
        }

        Ok(())
    }
}
