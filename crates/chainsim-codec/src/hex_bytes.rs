//! Thin hex codec wrappers. An empty string decodes to an empty byte vector
//! rather than erroring, matching every hex-bearing slot in the tx-data
//! parser (codeMetadata, function, arguments may all be empty parts).

use crate::errors::CodecError;

pub fn decode(value: &str) -> Result<Vec<u8>, CodecError> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    Ok(hex::decode(value)?)
}

pub fn encode(value: &[u8]) -> String {
    hex::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_decodes_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn round_trips() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let encoded = encode(&bytes);
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn rejects_odd_length() {
        assert!(decode("abc").is_err());
    }
}
