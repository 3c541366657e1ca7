//! The VM host port: the driving interface the dispatcher and query
//! executor call into. Per spec.md §1 this is an external collaborator —
//! a real implementation wraps an embedded WASM contract VM — so this
//! crate only specifies the interface and ships a mock (see `mock_host`).

use crate::{TxStep, World};
use thiserror::Error;

/// A transport-level host failure. Propagated verbatim by the dispatcher
/// (spec.md §4.2 "Execution") — never recovered, never retried.
#[derive(Debug, Error, Clone)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// VM output, per spec.md §3 ("VM output (from Host)"). `return_code == 0`
/// is success; any other value is a VM-level failure, not a host failure.
#[derive(Debug, Clone)]
pub struct VmOutput {
    pub return_code: u32,
    pub return_message: String,
    pub return_data: Vec<Vec<u8>>,
    pub gas_remaining: u64,
}

impl VmOutput {
    pub fn is_ok(&self) -> bool {
        self.return_code == 0
    }

    /// The textual name the gateway embeds in condensed return data
    /// (spec.md §4.2: `hex(returnCode.ascii-name)`).
    pub fn return_code_name(&self) -> &'static str {
        match self.return_code {
            0 => "ok",
            1 => "function not found",
            2 => "wrong signature",
            3 => "contract not found",
            4 => "user error",
            5 => "out of gas",
            6 => "account collision",
            7 => "out of funds",
            8 => "call stack overflow",
            9 => "execution failed",
            10 => "upgrade failed",
            _ => "unknown error",
        }
    }
}

/// The driving port consumed by the dispatcher and query executor. A real
/// implementation executes `step` against an embedded contract VM wired to
/// `world`; mutations to `world.accounts`/storage are the VM's side effect.
pub trait VmHost: Send + Sync {
    fn execute(&self, world: &mut World, step: &TxStep) -> Result<VmOutput, HostError>;
}
