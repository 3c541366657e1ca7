//! The gateway's canonical response envelope.
//!
//! The deployed API has two historical dialects (a bare-body "light" shape
//! and a pre-enveloped "full-proxy" shape); this workspace standardizes on
//! the light shape and lets the HTTP layer apply the envelope uniformly.

use serde::Serialize;

/// `{data, code: "successful"}` on success, `{error, code: "error"}` on failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success {
        data: T,
        code: &'static str,
    },
    Failure {
        error: String,
        code: &'static str,
    },
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope::Success {
            data,
            code: "successful",
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Envelope::Failure {
            error: message.into(),
            code: "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_flat() {
        let env = Envelope::ok(serde_json::json!({"txHash": "1"}));
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["data"]["txHash"], "1");
        assert_eq!(v["code"], "successful");
    }

    #[test]
    fn failure_serializes_flat() {
        let env: Envelope<()> = Envelope::err("invalid nonce");
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["error"], "invalid nonce");
        assert_eq!(v["code"], "error");
    }
}
