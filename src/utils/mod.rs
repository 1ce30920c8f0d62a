use alloy::{
    hex,
    primitives::{Address, Keccak256},
};

pub mod calldata;
pub mod display_proposal;
pub mod signature;

/// Hex-encoded 4-byte selector of a canonical signature such as `pause()`.
pub fn compute_selector(method_name: &str) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(method_name.as_bytes());
    let result = hasher.finalize();

    hex::encode(&result[..4])
}

/// Parses a hex address. Mixed-case input must carry a valid EIP-55 checksum;
/// all-lowercase and all-uppercase input is accepted as is.
pub fn parse_checked_address(input: &str) -> Result<Address, String> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let mixed_case = digits.chars().any(|c| c.is_ascii_uppercase())
        && digits.chars().any(|c| c.is_ascii_lowercase());

    if mixed_case {
        Address::parse_checksummed(input, None).map_err(|e| format!("{input}: {e}"))
    } else {
        input
            .parse::<Address>()
            .map_err(|e| format!("{input}: {e}"))
    }
}
