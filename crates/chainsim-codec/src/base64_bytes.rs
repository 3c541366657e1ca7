//! Standard-alphabet base64 codec wrappers, used for the tx `data` payload
//! and for base64-carried `writeLog`/query-return byte strings.

use crate::errors::CodecError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub fn decode(value: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(value)?)
}

pub fn encode(value: &[u8]) -> String {
    STANDARD.encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let bytes = b"hello@world";
        let encoded = encode(bytes);
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode("not valid base64!!").is_err());
    }
}
