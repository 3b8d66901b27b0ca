//! The two ERC-20 view functions a token gate needs, and the decoding of
//! their single-word return values.

use crate::errors::ReadError;
use ethrex_common::{Address, Bytes, U256};

// 0x70a08231 == balanceOf(address)
pub const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];
// 0x313ce567 == decimals()
pub const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];

const WORD_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Erc20Call {
    BalanceOf(Address),
    Decimals,
}

impl Erc20Call {
    pub fn signature(&self) -> &'static str {
        match self {
            Erc20Call::BalanceOf(_) => "balanceOf(address)",
            Erc20Call::Decimals => "decimals()",
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        match self {
            Erc20Call::BalanceOf(_) => BALANCE_OF_SELECTOR,
            Erc20Call::Decimals => DECIMALS_SELECTOR,
        }
    }

    /// Selector followed by the ABI-encoded arguments. The address argument of
    /// `balanceOf` is left-padded with zeros to a full 32 byte word.
    pub fn calldata(&self) -> Bytes {
        let mut calldata = Vec::from(self.selector());
        if let Erc20Call::BalanceOf(account) = self {
            calldata.resize(16, 0);
            calldata.extend(account.to_fixed_bytes());
        }
        calldata.into()
    }

    /// Decodes the hex encoded return data of an `eth_call` into the single
    /// uint256 word both functions return.
    pub fn decode_output(&self, contract: Address, data: &str) -> Result<U256, ReadError> {
        let malformed = || ReadError::MalformedReturnData {
            contract,
            function: self.signature(),
            data: data.to_owned(),
        };

        let bytes = hex::decode(data.trim().trim_start_matches("0x")).map_err(|_| malformed())?;
        let word = bytes.get(..WORD_SIZE).ok_or_else(malformed)?;
        Ok(U256::from_big_endian(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keccak_hash::keccak;

    fn selector_of(signature: &str) -> [u8; 4] {
        let hash = keccak(signature.as_bytes());
        let mut selector = [0; 4];
        selector.copy_from_slice(&hash.as_bytes()[..4]);
        selector
    }

    #[test]
    fn selectors_match_signatures() {
        for call in [Erc20Call::BalanceOf(Address::zero()), Erc20Call::Decimals] {
            assert_eq!(call.selector(), selector_of(call.signature()));
        }
    }

    #[test]
    fn balance_of_calldata_pads_address() {
        let holder: Address = "0x0007a881cd95b1484fca47615b64803dad620c8d".parse().unwrap();
        let calldata = Erc20Call::BalanceOf(holder).calldata();

        assert_eq!(calldata.len(), 4 + 32);
        assert_eq!(&calldata[..4], &BALANCE_OF_SELECTOR);
        assert!(calldata[4..16].iter().all(|b| *b == 0));
        assert_eq!(&calldata[16..], holder.as_bytes());
    }

    #[test]
    fn decimals_calldata_is_only_the_selector() {
        assert_eq!(Erc20Call::Decimals.calldata().as_ref(), &DECIMALS_SELECTOR);
    }

    #[test]
    fn decodes_single_word() {
        let data = format!("0x{}12", "0".repeat(62));
        let value = Erc20Call::Decimals
            .decode_output(Address::zero(), &data)
            .unwrap();
        assert_eq!(value, U256::from(18u64));
    }

    #[test]
    fn rejects_empty_return_data() {
        let err = Erc20Call::Decimals
            .decode_output(Address::zero(), "0x")
            .unwrap_err();
        assert!(matches!(
            err,
            ReadError::MalformedReturnData {
                function: "decimals()",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_hex_return_data() {
        let err = Erc20Call::BalanceOf(Address::zero())
            .decode_output(Address::zero(), "0xzz")
            .unwrap_err();
        assert!(matches!(err, ReadError::MalformedReturnData { .. }));
    }
}
