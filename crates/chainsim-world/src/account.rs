//! World account state.

use chainsim_types::Address;
use num_bigint::BigInt;
use std::collections::HashMap;

/// A single account in the mock world. Freshly auto-vivified accounts
/// (first reference by an unseen address) start at nonce 0, balance 0,
/// no code, no storage.
#[derive(Debug, Clone, Default)]
pub struct Account {
    pub address: Address,
    pub nonce: u64,
    pub balance: BigInt,
    pub storage: HashMap<Vec<u8>, Vec<u8>>,
    pub code: Vec<u8>,
    pub code_hash: Option<Vec<u8>>,
    pub code_metadata: Option<Vec<u8>>,
    pub owner_address: Option<Address>,
    pub is_smart_contract: bool,
}

impl Account {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            balance: BigInt::from(0),
            ..Default::default()
        }
    }

    /// A single byte with only the "readable" flag set — the default
    /// `codeMetadata` the reference gateway assigns to non-contract
    /// accounts that didn't have one set explicitly. `0x04` is
    /// `vmcommon.CodeMetadata{Readable: true}`'s byte form; `0x02` is the
    /// distinct Payable bit.
    pub fn readable_code_metadata() -> Vec<u8> {
        vec![0x04]
    }
}
