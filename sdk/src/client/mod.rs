use crate::{abi::Erc20Call, errors::ReadError};
use async_trait::async_trait;
use ethrex_common::{Address, U256};
use std::sync::Arc;

pub mod eth;

pub use ethrex_rpc::{
    EthClient,
    clients::{EthClientError, Overrides},
};

/// Read-only access to token contracts.
///
/// Implementations must be safe to share between concurrent balance checks.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Executes `call` against `contract` and returns its uint256 result.
    async fn read(&self, contract: Address, call: &Erc20Call) -> Result<U256, ReadError>;
}

#[async_trait]
impl<'a, R: ContractReader + ?Sized> ContractReader for &'a R {
    async fn read(&self, contract: Address, call: &Erc20Call) -> Result<U256, ReadError> {
        (**self).read(contract, call).await
    }
}

#[async_trait]
impl<R: ContractReader + ?Sized> ContractReader for Arc<R> {
    async fn read(&self, contract: Address, call: &Erc20Call) -> Result<U256, ReadError> {
        (**self).read(contract, call).await
    }
}
