//! A minimal in-process mock VM.
//!
//! Spec.md treats the contract VM as an external collaborator specified
//! only by the `VmHost` interface — a real deployment wires in the actual
//! WASM engine. This mock gives the workspace something end-to-end
//! runnable without that dependency: it moves EGLD value, installs deploy
//! code at the hinted address, and otherwise reports success with empty
//! return data. It does not interpret contract bytecode.

use crate::host::{HostError, VmHost, VmOutput};
use crate::{TxKind, TxStep, World};
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

/// Flat per-kind gas cost, plus one gas per argument/code byte — enough to
/// make `gasUsed` a function of the step without pretending to interpret
/// bytecode. Kept well under the dispatcher's 50_000 minimum gas limit so a
/// transaction sent at that minimum still has headroom for its data bytes.
const BASE_TRANSFER_GAS: u64 = 21_000;
const BASE_CALL_GAS: u64 = 21_000;
const BASE_DEPLOY_GAS: u64 = 21_000;

#[derive(Debug, Default)]
pub struct MockVmHost;

impl MockVmHost {
    pub fn new() -> Self {
        Self
    }

    fn move_value(world: &mut World, from: &[u8], to: &[u8], value: &BigInt) -> Result<(), ()> {
        if value.is_zero() {
            return Ok(());
        }
        let from_balance = world.get_account(from).balance.clone();
        if from_balance < *value {
            return Err(());
        }
        world.get_account_mut(from).balance -= value;
        world.get_account_mut(to).balance += value;
        Ok(())
    }

    fn data_cost(step: &TxStep) -> u64 {
        let arg_bytes: usize = step.arguments.iter().map(|a| a.len()).sum();
        let code_bytes = step.code.as_ref().map(|c| c.len()).unwrap_or(0);
        (arg_bytes + code_bytes) as u64
    }
}

impl VmHost for MockVmHost {
    fn execute(&self, world: &mut World, step: &TxStep) -> Result<VmOutput, HostError> {
        debug!(kind = ?step.kind, gas_limit = step.gas_limit, "executing step");
        let base = match step.kind {
            TxKind::Transfer => BASE_TRANSFER_GAS,
            TxKind::ScCall => BASE_CALL_GAS,
            TxKind::ScDeploy => BASE_DEPLOY_GAS,
        };
        let consumed = base.saturating_add(Self::data_cost(step));

        if consumed > step.gas_limit {
            return Ok(VmOutput {
                return_code: 5,
                return_message: "out of gas".to_string(),
                return_data: Vec::new(),
                gas_remaining: 0,
            });
        }
        let gas_remaining = step.gas_limit - consumed;

        if Self::move_value(world, &step.from, &step.to, &step.value).is_err() {
            return Ok(VmOutput {
                return_code: 7,
                return_message: "insufficient funds".to_string(),
                return_data: Vec::new(),
                gas_remaining,
            });
        }

        match step.kind {
            TxKind::ScDeploy => {
                let code = step.code.clone().unwrap_or_default();
                let code_metadata = step.code_metadata.clone();
                let account = world.get_account_mut(&step.to);
                account.code = code;
                account.code_metadata = code_metadata;
                account.is_smart_contract = true;
                account.owner_address = Some(step.from.clone());
            }
            TxKind::ScCall => {
                let target_exists_as_contract = world.get_account(&step.to).is_smart_contract;
                if !target_exists_as_contract {
                    return Ok(VmOutput {
                        return_code: 3,
                        return_message: "contract not found".to_string(),
                        return_data: Vec::new(),
                        gas_remaining,
                    });
                }
            }
            TxKind::Transfer => {}
        }

        Ok(VmOutput {
            return_code: 0,
            return_message: String::new(),
            return_data: Vec::new(),
            gas_remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn step(kind: TxKind, from: &[u8], to: &[u8], value: i64, gas_limit: u64) -> TxStep {
        TxStep {
            kind,
            from: from.to_vec(),
            to: to.to_vec(),
            nonce: 0,
            gas_price: 1,
            gas_limit,
            value: BigInt::from(value),
            code: None,
            code_metadata: None,
            function: None,
            arguments: Vec::new(),
            esdt_transfers: Vec::new(),
        }
    }

    #[test]
    fn transfer_moves_balance() {
        let mut world = World::new();
        world.get_account_mut(&[1u8; 32]).balance = BigInt::from(1000);
        let host = MockVmHost::new();
        let out = host
            .execute(&mut world, &step(TxKind::Transfer, &[1u8; 32], &[2u8; 32], 100, 60_000))
            .unwrap();
        assert!(out.is_ok());
        assert_eq!(world.get_account(&[1u8; 32]).balance, BigInt::from(900));
        assert_eq!(world.get_account(&[2u8; 32]).balance, BigInt::from(100));
    }

    #[test]
    fn transfer_rejects_insufficient_funds() {
        let mut world = World::new();
        let host = MockVmHost::new();
        let out = host
            .execute(&mut world, &step(TxKind::Transfer, &[1u8; 32], &[2u8; 32], 100, 60_000))
            .unwrap();
        assert_eq!(out.return_code, 7);
    }

    #[test]
    fn deploy_installs_code_at_target() {
        let mut world = World::new();
        let host = MockVmHost::new();
        let mut s = step(TxKind::ScDeploy, &[1u8; 32], &[0u8; 32], 0, 60_000);
        s.code = Some(vec![0xDE, 0xAD]);
        let out = host.execute(&mut world, &s).unwrap();
        assert!(out.is_ok());
        let acct = world.get_account(&[0u8; 32]);
        assert!(acct.is_smart_contract);
        assert_eq!(acct.code, vec![0xDE, 0xAD]);
    }

    #[test]
    fn call_against_non_contract_fails() {
        let mut world = World::new();
        let host = MockVmHost::new();
        let out = host
            .execute(
                &mut world,
                &{
                    let mut s = step(TxKind::ScCall, &[1u8; 32], &[2u8; 32], 0, 60_000);
                    s.function = Some(b"foo".to_vec());
                    s
                },
            )
            .unwrap();
        assert_eq!(out.return_code, 3);
    }
}
