//! Bech32 address coding (HRP "erd"), the textual form used throughout the
//! gateway's JSON surface for addresses.

use crate::errors::CodecError;
use bech32::{FromBase32, ToBase32, Variant};

const HRP: &str = "erd";

/// Encode a raw address (any length, the chain simulator always passes 32
/// bytes) as its bech32 string form.
pub fn encode(raw: &[u8]) -> Result<String, CodecError> {
    let encoded = bech32::encode(HRP, raw.to_base32(), Variant::Bech32)?;
    Ok(encoded)
}

/// Decode a bech32 address string back into raw bytes.
pub fn decode(bech: &str) -> Result<Vec<u8>, CodecError> {
    let (_hrp, data, _variant) = bech32::decode(bech)?;
    let bytes = Vec::<u8>::from_base32(&data)?;
    Ok(bytes)
}
