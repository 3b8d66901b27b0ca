use crate::errors::ParseUnitsError;
use ethrex_common::U256;

/// Renders `value / 10^decimals` as an exact decimal string.
///
/// Trailing fractional zeros are dropped and the decimal point is omitted
/// when nothing remains after it, so `1500000000000000000` with 18 decimals
/// is `"1.5"` and zero is always `"0"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = usize::from(decimals);
    if decimals == 0 {
        return digits;
    }

    // Make sure there is at least one integer digit.
    let padded = if digits.len() <= decimals {
        let zeros = "0".repeat(decimals.saturating_sub(digits.len()).saturating_add(1));
        format!("{zeros}{digits}")
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len().saturating_sub(decimals));
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Inverse of [`format_units`]: scales a decimal string up by `10^decimals`.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, ParseUnitsError> {
    let (integer, fraction) = split_decimal(value.trim())
        .ok_or_else(|| ParseUnitsError::InvalidDecimal(value.to_owned()))?;

    let fraction = fraction.trim_end_matches('0');
    let decimals_len = usize::from(decimals);
    if fraction.len() > decimals_len {
        return Err(ParseUnitsError::TooManyDecimals {
            value: value.to_owned(),
            decimals,
        });
    }

    let zeros = "0".repeat(decimals_len.saturating_sub(fraction.len()));
    let scaled = format!("{integer}{fraction}{zeros}");
    let scaled = scaled.trim_start_matches('0');
    if scaled.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_dec_str(scaled).map_err(|_| ParseUnitsError::Overflow(value.to_owned()))
}

/// Splits a plain non-negative decimal (`"12"`, `"1.5"`, `".5"`, `"3."`) into
/// its integer and fractional digits. Anything else, including signs and
/// exponents, yields `None`.
pub(crate) fn split_decimal(value: &str) -> Option<(&str, &str)> {
    let (integer, fraction) = value.split_once('.').unwrap_or((value, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return None;
    }
    Some((integer, fraction))
}
