use crate::{errors::MinBalanceError, units::split_decimal};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// Outcome of a balance check. `balance` is the normalized decimal balance,
/// `"0"` when it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub has_access: bool,
    pub balance: String,
}

impl AccessDecision {
    /// The decision returned whenever the balance cannot be determined.
    pub fn denied() -> Self {
        Self {
            has_access: false,
            balance: "0".to_owned(),
        }
    }
}

/// A non-negative decimal amount of whole tokens a holder must own.
///
/// Kept as normalized digit strings so that comparisons against formatted
/// balances are exact no matter how many digits either side has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MinBalance {
    integer: String,
    fraction: String,
}

impl MinBalance {
    pub fn zero() -> Self {
        Self::from(0u64)
    }

    fn from_parts(integer: &str, fraction: &str) -> Self {
        let integer = integer.trim_start_matches('0');
        Self {
            integer: if integer.is_empty() { "0" } else { integer }.to_owned(),
            fraction: fraction.trim_end_matches('0').to_owned(),
        }
    }
}

impl Default for MinBalance {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for MinBalance {
    fn from(value: u64) -> Self {
        Self {
            integer: value.to_string(),
            fraction: String::new(),
        }
    }
}

impl FromStr for MinBalance {
    type Err = MinBalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MinBalanceError::Empty);
        }
        let (integer, fraction) = split_decimal(trimmed)
            .ok_or_else(|| MinBalanceError::InvalidDecimal(s.to_owned()))?;
        Ok(Self::from_parts(integer, fraction))
    }
}

impl TryFrom<String> for MinBalance {
    type Error = MinBalanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MinBalance> for String {
    fn from(value: MinBalance) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MinBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}", self.integer)
        } else {
            write!(f, "{}.{}", self.integer, self.fraction)
        }
    }
}

/// Returns whether the decimal string `balance` is at least `min_balance`.
/// A balance that is not a plain non-negative decimal never meets it.
pub fn meets_min_balance(balance: &str, min_balance: &MinBalance) -> bool {
    let Some((integer, fraction)) = split_decimal(balance.trim()) else {
        return false;
    };
    let balance = MinBalance::from_parts(integer, fraction);
    compare(&balance, min_balance) != Ordering::Less
}

fn compare(a: &MinBalance, b: &MinBalance) -> Ordering {
    // Integer parts carry no leading zeros, so the longer one is larger.
    // Fractions carry no trailing zeros, so plain lexicographic order works.
    a.integer
        .len()
        .cmp(&b.integer.len())
        .then_with(|| a.integer.cmp(&b.integer))
        .then_with(|| a.fraction.cmp(&b.fraction))
}
