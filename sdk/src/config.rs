use crate::{
    access::MinBalance,
    client::EthClient,
    errors::ConfigError,
    gate::{DEFAULT_GATE_MIN_BALANCE, TokenGate},
};
use ethrex_common::Address;
use serde::Deserialize;
use url::Url;

/// Public RPC endpoint of Base mainnet, the network gates read from by default.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

pub const ENV_PREFIX: &str = "TOKEN_GATE_";

/// Gate settings read from `TOKEN_GATE_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    pub token_address: Option<Address>,
    pub min_balance: Option<MinBalance>,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_owned()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            token_address: None,
            min_balance: None,
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.rpc_url).map_err(|source| ConfigError::InvalidRpcUrl {
            url: self.rpc_url.clone(),
            source,
        })
    }

    pub fn eth_client(&self) -> Result<EthClient, ConfigError> {
        Ok(EthClient::new(self.rpc_url()?)?)
    }

    /// Builds a gate for the configured token, falling back to a minimum
    /// balance of one whole token.
    pub fn token_gate(&self) -> Result<TokenGate<EthClient>, ConfigError> {
        let token_address = self
            .token_address
            .ok_or(ConfigError::MissingTokenAddress)?;
        let min_balance = self
            .min_balance
            .clone()
            .unwrap_or_else(|| MinBalance::from(DEFAULT_GATE_MIN_BALANCE));
        Ok(TokenGate::new(self.eth_client()?, token_address, min_balance))
    }
}
