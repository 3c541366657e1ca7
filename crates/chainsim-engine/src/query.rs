//! The read-only query executor (spec.md §4.3).
//!
//! Snapshots the account map, runs a `ScCall` step through the host, then
//! restores the snapshot unconditionally — a query must never leave a
//! trace in world state, not even via a panic or host error.

use std::collections::HashMap;

use crate::dispatcher::Dispatcher;
use crate::dto::RawQuery;
use crate::response;
use chainsim_codec::{bech32_addr, bigint, hex_bytes};
use chainsim_types::{Address, ChainError};
use chainsim_world::{Account, TxKind, TxStep};
use serde_json::Value;

/// Query-executor gas limit. The reference implementation carries two
/// dialects (`math.MaxInt64` vs `math.MaxUint64`); SPEC_FULL.md §1 picks
/// the `i64::MAX` ("lightsimulnet") dialect.
const QUERY_GAS_LIMIT: u64 = i64::MAX as u64;

/// Restores a snapshotted account map into its dispatcher on drop — runs on
/// the normal return path, on an early `?` return, and during an unwinding
/// panic, so a query can never leave a trace in world state (spec.md §4.3,
/// §9 "guaranteed-restore scope").
struct RestoreOnDrop<'a> {
    dispatcher: &'a mut Dispatcher,
    snapshot: Option<HashMap<Address, Account>>,
}

impl<'a> Drop for RestoreOnDrop<'a> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.dispatcher.world_mut().restore_accounts(snapshot);
        }
    }
}

pub fn query(dispatcher: &mut Dispatcher, raw: RawQuery) -> Result<Value, ChainError> {
    let sc_address = bech32_addr::decode(&raw.sc_address)?;
    let from = match &raw.caller {
        Some(caller) => bech32_addr::decode(caller)?,
        None => sc_address.clone(),
    };
    let value = match &raw.value {
        Some(v) => bigint::decimal_to_bigint(v)?,
        None => num_bigint::BigInt::from(0),
    };
    let mut arguments = Vec::with_capacity(raw.args.len());
    for arg in &raw.args {
        arguments.push(hex_bytes::decode(arg)?);
    }

    let step = TxStep {
        kind: TxKind::ScCall,
        from,
        to: sc_address,
        nonce: 0,
        gas_price: 0,
        gas_limit: QUERY_GAS_LIMIT,
        value,
        code: None,
        code_metadata: None,
        function: Some(raw.func_name.into_bytes()),
        arguments,
        esdt_transfers: Vec::new(),
    };

    let snapshot = dispatcher.world_mut().snapshot_accounts();
    let mut guard = RestoreOnDrop {
        dispatcher,
        snapshot: Some(snapshot),
    };
    let result = guard.dispatcher.execute_step(&step);
    drop(guard);

    let output = result.map_err(|e| ChainError::Host(e.0))?;
    Ok(response::query_response(&output))
}
