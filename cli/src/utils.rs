use ethrex_common::U256;

/// Accepts either a decimal or a `0x` prefixed hex integer.
pub fn parse_u256(value: &str) -> Result<U256, String> {
    let value = value.trim();
    match value.strip_prefix("0x") {
        Some(hex) => U256::from_str_radix(hex, 16).map_err(|_| format!("Invalid hex value: {value}")),
        None => U256::from_dec_str(value).map_err(|_| format!("Invalid decimal value: {value}")),
    }
}
