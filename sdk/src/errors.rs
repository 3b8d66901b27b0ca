use crate::client::EthClientError;
use ethrex_common::{Address, U256};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    EthClientError(#[from] EthClientError),
    #[error("{function} on {contract:#x} returned malformed data: {data:?}")]
    MalformedReturnData {
        contract: Address,
        function: &'static str,
        data: String,
    },
    #[error("decimals() on {contract:#x} returned {value}, which does not fit in a uint8")]
    DecimalsOutOfRange { contract: Address, value: U256 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MinBalanceError {
    #[error("Minimum balance is empty")]
    Empty,
    #[error("Invalid minimum balance {0:?}: expected a non-negative decimal number")]
    InvalidDecimal(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseUnitsError {
    #[error("Invalid decimal amount {0:?}")]
    InvalidDecimal(String),
    #[error("Amount {value} has more than {decimals} fractional digits")]
    TooManyDecimals { value: String, decimals: u8 },
    #[error("Amount {0} does not fit in a uint256")]
    Overflow(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from the environment: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid RPC URL {url:?}: {source}")]
    InvalidRpcUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("No token address configured")]
    MissingTokenAddress,
    #[error(transparent)]
    Client(#[from] EthClientError),
}
