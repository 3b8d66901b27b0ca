use crate::{abi::Erc20Call, client::ContractReader, errors::ReadError};
use async_trait::async_trait;
use ethrex_common::{Address, U256};
use ethrex_rpc::{EthClient, clients::Overrides};
use tracing::debug;

#[async_trait]
impl ContractReader for EthClient {
    async fn read(&self, contract: Address, call: &Erc20Call) -> Result<U256, ReadError> {
        debug!(contract = ?contract, function = call.signature(), "eth_call");
        let output = self
            .call(contract, call.calldata(), Overrides::default())
            .await?;
        call.decode_output(contract, &output)
    }
}

pub async fn get_token_balance<R: ContractReader + ?Sized>(
    reader: &R,
    address: Address,
    token_address: Address,
) -> Result<U256, ReadError> {
    reader
        .read(token_address, &Erc20Call::BalanceOf(address))
        .await
}

pub async fn get_token_decimals<R: ContractReader + ?Sized>(
    reader: &R,
    token_address: Address,
) -> Result<u8, ReadError> {
    let value = reader.read(token_address, &Erc20Call::Decimals).await?;
    u8::try_from(value).map_err(|_| ReadError::DecimalsOutOfRange {
        contract: token_address,
        value,
    })
}
