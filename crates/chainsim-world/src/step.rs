//! The transaction step: the parser's output and the VM host's input.

use chainsim_types::{Address, Amount};
use num_bigint::BigInt;

/// The classified shape of a transaction step, per spec.md §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Transfer,
    ScCall,
    ScDeploy,
}

/// A bundled ESDT transfer entry from a `MultiESDTNFTTransfer` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsdtTransfer {
    pub token_id: Vec<u8>,
    pub nonce: u64,
    pub amount: BigInt,
}

/// The internal, fully-classified transaction step (spec.md §3 "Transaction
/// step"). Produced by the tx-data parser, consumed by the VM host.
#[derive(Debug, Clone)]
pub struct TxStep {
    pub kind: TxKind,
    pub from: Address,
    pub to: Address,
    pub nonce: u64,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub value: Amount,
    pub code: Option<Vec<u8>>,
    pub code_metadata: Option<Vec<u8>>,
    pub function: Option<Vec<u8>>,
    pub arguments: Vec<Vec<u8>>,
    pub esdt_transfers: Vec<EsdtTransfer>,
}
