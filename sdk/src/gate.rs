use crate::{
    access::{AccessDecision, MinBalance, meets_min_balance},
    client::{
        ContractReader,
        eth::{get_token_balance, get_token_decimals},
    },
    errors::ReadError,
    units::format_units,
};
use ethrex_common::Address;
use tracing::{debug, error};

/// Minimum balance, in whole tokens, used by [`TokenGate::with_default_min_balance`].
pub const DEFAULT_GATE_MIN_BALANCE: u64 = 1;

/// Reads `holder`'s balance and the token decimals concurrently and compares
/// the normalized balance against `min_balance`.
pub async fn try_check_token_balance<R: ContractReader + ?Sized>(
    reader: &R,
    token_address: Address,
    holder: Address,
    min_balance: &MinBalance,
) -> Result<AccessDecision, ReadError> {
    let (raw_balance, decimals) = tokio::try_join!(
        get_token_balance(reader, holder, token_address),
        get_token_decimals(reader, token_address),
    )?;

    let balance = format_units(raw_balance, decimals);
    let has_access = meets_min_balance(&balance, min_balance);
    debug!(
        token = ?token_address,
        holder = ?holder,
        %raw_balance,
        decimals,
        %balance,
        %min_balance,
        has_access,
        "Checked token balance"
    );

    Ok(AccessDecision {
        has_access,
        balance,
    })
}

/// Fail-closed variant of [`try_check_token_balance`]: any read failure is
/// logged and reported as a denied decision with a zero balance.
pub async fn check_token_balance<R: ContractReader + ?Sized>(
    reader: &R,
    token_address: Address,
    holder: Address,
    min_balance: &MinBalance,
) -> AccessDecision {
    match try_check_token_balance(reader, token_address, holder, min_balance).await {
        Ok(decision) => decision,
        Err(err) => {
            error!(
                token = ?token_address,
                holder = ?holder,
                error = %err,
                "Error checking token balance, denying access"
            );
            AccessDecision::denied()
        }
    }
}

/// A balance check bound to one token and one minimum balance.
#[derive(Debug, Clone)]
pub struct TokenGate<R> {
    reader: R,
    token_address: Address,
    min_balance: MinBalance,
}

impl<R: ContractReader> TokenGate<R> {
    pub fn new(reader: R, token_address: Address, min_balance: impl Into<MinBalance>) -> Self {
        Self {
            reader,
            token_address,
            min_balance: min_balance.into(),
        }
    }

    pub fn with_default_min_balance(reader: R, token_address: Address) -> Self {
        Self::new(reader, token_address, DEFAULT_GATE_MIN_BALANCE)
    }

    pub fn token_address(&self) -> Address {
        self.token_address
    }

    pub fn min_balance(&self) -> &MinBalance {
        &self.min_balance
    }

    /// Re-reads the chain on every call.
    pub async fn check(&self, holder: Address) -> AccessDecision {
        check_token_balance(&self.reader, self.token_address, holder, &self.min_balance).await
    }
}
