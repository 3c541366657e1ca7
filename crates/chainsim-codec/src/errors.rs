//! Codec error types.
//!
//! Messages are literal where the gateway's error surface depends on them
//! (see the dispatcher's validation order), matching the reference
//! implementation's wording.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("not a bigint")]
    NotABigInt,

    #[error("invalid bech32 address: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
