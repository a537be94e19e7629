use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Replaces `eth_rpc_url` when set to a non-empty value
pub const ETH_RPC_URL_ENV: &str = "UNI_ASS_ETH_RPC_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("eth_rpc_url must not be empty")]
    MissingRpcUrl,
}

/// UniASS node config - the entry points the AVS bindings are resolved from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub eth_rpc_url: String,
    pub avs_registry_coordinator_addr: Address,
    pub operator_state_retriever_addr: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erc20_mock_addr: Option<Address>,
}

impl NodeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        let rpc_url = std::env::var(ETH_RPC_URL_ENV).ok();
        self.with_rpc_url_override(rpc_url)
    }

    fn with_rpc_url_override(mut self, rpc_url: Option<String>) -> Self {
        if let Some(url) = rpc_url.filter(|url| !url.trim().is_empty()) {
            self.eth_rpc_url = url;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.eth_rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingRpcUrl);
        }
        Ok(())
    }
}
