//! Error kinds surfaced across the transaction-dispatch engine.
//!
//! Every variant's `Display` impl is the literal message the gateway's HTTP
//! layer puts in the `error` field of the `{error, code:"error"}` envelope —
//! these strings are part of the external contract, not incidental.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("invalid chain ID")]
    InvalidChainId,

    #[error("invalid version")]
    InvalidVersion,

    #[error("insufficient gas limit")]
    InsufficientGasLimit,

    #[error("invalid nonce")]
    InvalidNonce,

    /// Reported with the backwards-compatible wording the reference gateway
    /// uses, not the more literal "mismatched bundled-transfer endpoints".
    #[error("receiver and sender are not equal")]
    MismatchedBundleEndpoints,

    #[error("invalid withResults option")]
    InvalidWithResultsOption,

    #[error("not a bigint")]
    NotABigInt,

    #[error("invalid bech32 address: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Propagated verbatim from the VM host; the message is whatever the
    /// host reported, not something this crate composes.
    #[error("{0}")]
    Host(String),
}

impl From<chainsim_codec::CodecError> for ChainError {
    fn from(e: chainsim_codec::CodecError) -> Self {
        match e {
            chainsim_codec::CodecError::NotABigInt => ChainError::NotABigInt,
            chainsim_codec::CodecError::Bech32(e) => ChainError::Bech32(e),
            chainsim_codec::CodecError::Hex(e) => ChainError::Hex(e),
            chainsim_codec::CodecError::Base64(e) => ChainError::Base64(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_mismatch_uses_compat_wording() {
        assert_eq!(
            ChainError::MismatchedBundleEndpoints.to_string(),
            "receiver and sender are not equal"
        );
    }

    #[test]
    fn codec_not_a_bigint_maps_through() {
        let e: ChainError = chainsim_codec::CodecError::NotABigInt.into();
        assert_eq!(e.to_string(), "not a bigint");
    }
}
