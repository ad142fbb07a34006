/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed dashboard configuration
[POS]:    Configuration layer - network and wallet setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use taskmarket_adapter::DEFAULT_WORKER_URL;

/// Top-level configuration for the dashboard. Chain id is not configured
/// here; it is fetched from the gateway at transaction time and threaded
/// through explicitly.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Chain gateway base URL
    pub gateway_url: String,
    /// Bech32 address of the task marketplace contract
    pub contract_address: String,
    /// Local worker process base URL
    #[serde(default = "default_worker_url")]
    pub worker_url: String,
    /// Wallet PEM file; required only for posting tasks
    #[serde(default)]
    pub wallet_pem: Option<PathBuf>,
    /// How many tasks one board refresh fetches
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Gas limit for postTask transactions
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
}

fn default_worker_url() -> String {
    DEFAULT_WORKER_URL.to_string()
}

fn default_page_size() -> u64 {
    10
}

fn default_gas_limit() -> u64 {
    20_000_000
}

impl DashboardConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config")?;
        Ok(config)
    }

    /// Resolve the config file location: explicit flag, then the working
    /// directory, then the user config directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        let local = PathBuf::from("taskmarket.yaml");
        if local.exists() {
            return Ok(local);
        }
        if let Some(dir) = dirs::config_dir() {
            let fallback = dir.join("taskmarket").join("config.yaml");
            if fallback.exists() {
                return Ok(fallback);
            }
        }
        bail!("no configuration found: pass --config or create taskmarket.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_in_defaults() {
        let config: DashboardConfig = serde_yaml::from_str(
            "gateway_url: https://devnet-gateway.example.com\n\
             contract_address: erd1qqqcontract\n",
        )
        .expect("config should parse");

        assert_eq!(config.worker_url, DEFAULT_WORKER_URL);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.gas_limit, 20_000_000);
        assert!(config.wallet_pem.is_none());
    }

    #[test]
    fn full_config_overrides_defaults() {
        let config: DashboardConfig = serde_yaml::from_str(
            "gateway_url: https://devnet-gateway.example.com\n\
             contract_address: erd1qqqcontract\n\
             worker_url: http://127.0.0.1:6006\n\
             wallet_pem: ./wallet.pem\n\
             page_size: 25\n\
             gas_limit: 30000000\n",
        )
        .expect("config should parse");

        assert_eq!(config.worker_url, "http://127.0.0.1:6006");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.gas_limit, 30_000_000);
        assert_eq!(config.wallet_pem, Some(PathBuf::from("./wallet.pem")));
    }
}
