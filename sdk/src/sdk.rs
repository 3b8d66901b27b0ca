pub mod abi;
pub mod access;
pub mod client;
pub mod config;
pub mod errors;
pub mod gate;
pub mod units;

pub use abi::Erc20Call;
pub use access::{AccessDecision, MinBalance, meets_min_balance};
pub use client::ContractReader;
pub use config::GateConfig;
pub use gate::{TokenGate, check_token_balance, try_check_token_balance};
pub use units::{format_units, parse_units};
