//! Address and amount aliases shared across the workspace.

/// Every address in this system is a raw 32-byte buffer (bech32 HRP "erd").
pub const ADDRESS_LEN: usize = 32;

/// Raw address bytes, decoded from (or destined for) a bech32 string.
pub type Address = Vec<u8>;

/// Arbitrary-precision on-chain amount (balances, tx value, ESDT amounts, fees).
pub type Amount = num_bigint::BigInt;

/// True when every byte of `addr` is zero — the deploy-target marker.
pub fn is_zero_address(addr: &[u8]) -> bool {
    addr.iter().all(|b| *b == 0)
}
