use crate::{
    commands::autocomplete,
    common::{BalanceArgs, CheckArgs},
    utils::parse_u256,
};
use clap::{Parser, Subcommand};
use ethrex_common::{Address, U256};
use tokengate_sdk::{
    GateConfig, check_token_balance,
    client::{
        EthClient,
        eth::{get_token_balance, get_token_decimals},
    },
    config::DEFAULT_RPC_URL,
    format_units, parse_units,
};
use tracing::debug;
use url::Url;

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

pub async fn start() -> eyre::Result<()> {
    let CLI { command } = CLI::parse();
    command.run().await
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Parser)]
#[command(name="tokengate", author, version=VERSION_STRING, about, long_about = None)]
pub(crate) struct CLI {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[clap(subcommand, about = "Generate shell completion scripts.")]
    Autocomplete(autocomplete::Command),
    #[clap(about = "Get the holder's token balance.", visible_aliases = ["bal", "b"])]
    Balance {
        #[clap(flatten)]
        args: BalanceArgs,
        #[arg(default_value = DEFAULT_RPC_URL, env = "RPC_URL")]
        rpc_url: Url,
    },
    #[clap(
        about = "Check whether the holder owns at least the minimum token balance.",
        long_about = "Check whether the holder owns at least the minimum token balance. Fails closed: if the balance cannot be read, access is denied and the balance is reported as 0.",
        visible_alias = "c"
    )]
    Check {
        #[clap(flatten)]
        args: CheckArgs,
        #[arg(
            env = "RPC_URL",
            help = "RPC URL. Falls back to TOKEN_GATE_RPC_URL, then the Base mainnet endpoint."
        )]
        rpc_url: Option<Url>,
    },
    #[clap(about = "Get the token's decimals.", visible_alias = "d")]
    Decimals {
        token_address: Address,
        #[arg(default_value = DEFAULT_RPC_URL, env = "RPC_URL")]
        rpc_url: Url,
    },
    #[clap(about = "Convert a raw integer amount into whole token units.")]
    FormatUnits {
        #[arg(value_parser = parse_u256)]
        value: U256,
        #[arg(short, long, default_value_t = 18)]
        decimals: u8,
    },
    #[clap(about = "Convert an amount in whole token units into its raw integer value.")]
    ParseUnits {
        value: String,
        #[arg(short, long, default_value_t = 18)]
        decimals: u8,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Autocomplete(_) => "autocomplete",
            Command::Balance { .. } => "balance",
            Command::Check { .. } => "check",
            Command::Decimals { .. } => "decimals",
            Command::FormatUnits { .. } => "format-units",
            Command::ParseUnits { .. } => "parse-units",
        }
    }

    pub async fn run(self) -> eyre::Result<()> {
        debug!(command = self.name(), "Running command");
        match self {
            Command::Autocomplete(cmd) => cmd.run()?,
            Command::Balance { args, rpc_url } => {
                let eth_client = EthClient::new(rpc_url)?;

                let balance =
                    get_token_balance(&eth_client, args.holder, args.token_address).await?;

                if args.raw {
                    println!("{balance}");
                } else {
                    let decimals = get_token_decimals(&eth_client, args.token_address).await?;
                    println!("{}", format_units(balance, decimals));
                }
            }
            Command::Check { args, rpc_url } => {
                let config = GateConfig::from_env()?;
                let settings = args.resolve(rpc_url, &config)?;
                debug!(
                    rpc_url = %settings.rpc_url,
                    token = ?settings.token_address,
                    min_balance = %settings.min_balance,
                    "Resolved gate settings"
                );

                let eth_client = EthClient::new(settings.rpc_url)?;

                let decision = check_token_balance(
                    &eth_client,
                    settings.token_address,
                    args.holder,
                    &settings.min_balance,
                )
                .await;

                if args.json {
                    println!("{}", serde_json::to_string(&decision)?);
                } else {
                    println!("has access: {}", decision.has_access);
                    println!("balance:    {}", decision.balance);
                }
            }
            Command::Decimals {
                token_address,
                rpc_url,
            } => {
                let eth_client = EthClient::new(rpc_url)?;

                let decimals = get_token_decimals(&eth_client, token_address).await?;

                println!("{decimals}");
            }
            Command::FormatUnits { value, decimals } => {
                println!("{}", format_units(value, decimals));
            }
            Command::ParseUnits { value, decimals } => {
                println!("{}", parse_units(&value, decimals)?);
            }
        };
        Ok(())
    }
}
