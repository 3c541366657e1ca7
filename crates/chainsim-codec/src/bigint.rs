//! Decimal and hex string to big-integer parsing.
//!
//! An empty string parses to zero in every slot the dispatcher reads one
//! from (tx value, bundled-transfer amount, ESDT nonce) — this mirrors the
//! reference implementation rather than treating an absent value as an
//! error.

use crate::errors::CodecError;
use num_bigint::BigInt;
use num_traits::Num;

/// Parse a base-10 decimal string into a `BigInt`. Empty string is zero.
pub fn decimal_to_bigint(value: &str) -> Result<BigInt, CodecError> {
    if value.is_empty() {
        return Ok(BigInt::from(0));
    }
    BigInt::from_str_radix(value, 10).map_err(|_| CodecError::NotABigInt)
}

/// Parse a hex string (no `0x` prefix) into a `BigInt`. Empty string is zero.
pub fn hex_to_bigint(value: &str) -> Result<BigInt, CodecError> {
    if value.is_empty() {
        return Ok(BigInt::from(0));
    }
    BigInt::from_str_radix(value, 16).map_err(|_| CodecError::NotABigInt)
}

/// Parse a hex string into a `u64`, truncating if the parsed value doesn't
/// fit (mirrors the reference implementation's `big.Int.Uint64()` call,
/// which silently truncates).
pub fn hex_to_u64(value: &str) -> Result<u64, CodecError> {
    let n = hex_to_bigint(value)?;
    let (_, digits) = n.to_u64_digits();
    Ok(digits.first().copied().unwrap_or(0))
}
