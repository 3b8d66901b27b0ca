use clap::Parser;
use ethrex_common::Address;
use tokengate_sdk::{GateConfig, MinBalance};
use url::Url;

#[derive(Parser)]
pub struct CheckArgs {
    #[arg(help = "Address whose balance is checked.")]
    pub holder: Address,
    #[clap(
        long = "token",
        help = "ERC20 token address.",
        long_help = "ERC20 token address. Falls back to TOKEN_GATE_TOKEN_ADDRESS."
    )]
    pub token_address: Option<Address>,
    #[arg(
        long,
        help = "Minimum balance in whole tokens, decimals allowed (e.g. 0.5).",
        long_help = "Minimum balance in whole tokens, decimals allowed (e.g. 0.5). Falls back to TOKEN_GATE_MIN_BALANCE, then 0."
    )]
    pub min_balance: Option<MinBalance>,
    #[arg(
        long,
        required = false,
        default_value_t = false,
        help = "Print the decision as JSON."
    )]
    pub json: bool,
}

/// Check parameters after filling the gaps from the environment config.
#[derive(Debug, PartialEq)]
pub struct GateSettings {
    pub rpc_url: Url,
    pub token_address: Address,
    pub min_balance: MinBalance,
}

impl CheckArgs {
    pub fn resolve(&self, rpc_url: Option<Url>, config: &GateConfig) -> eyre::Result<GateSettings> {
        let token_address = self.token_address.or(config.token_address).ok_or_else(|| {
            eyre::eyre!("No token address given, pass --token or set TOKEN_GATE_TOKEN_ADDRESS")
        })?;
        let min_balance = self
            .min_balance
            .clone()
            .or_else(|| config.min_balance.clone())
            .unwrap_or_default();
        let rpc_url = match rpc_url {
            Some(rpc_url) => rpc_url,
            None => config.rpc_url()?,
        };

        Ok(GateSettings {
            rpc_url,
            token_address,
            min_balance,
        })
    }
}

#[derive(Parser)]
pub struct BalanceArgs {
    #[arg(help = "ERC20 token address.")]
    pub token_address: Address,
    #[arg(help = "Address whose balance is read.")]
    pub holder: Address,
    #[arg(
        long,
        required = false,
        default_value_t = false,
        help = "Display the raw balance, without applying the token decimals."
    )]
    pub raw: bool,
}
