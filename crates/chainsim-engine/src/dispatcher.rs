//! The tx dispatcher: validation, nonce enforcement, deploy-address
//! hinting, VM invocation and response translation (spec.md §4.2).

use crate::dto::RawTx;
use crate::parser;
use crate::response;
use crate::retention::RetentionRing;
use chainsim_codec::{bech32_addr, bigint};
use chainsim_types::ChainError;
use chainsim_world::{NewAddressMock, TxKind, VmHost, World};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

/// Validation constants pinned by spec.md (surfaced through config rather
/// than literals, per SPEC_FULL.md §3).
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub chain_id: String,
    pub version: u64,
    pub min_gas_limit: u64,
    pub number_of_txs_to_keep: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            chain_id: "S".to_string(),
            version: 1,
            min_gas_limit: 50_000,
            number_of_txs_to_keep: 200,
        }
    }
}

pub struct Dispatcher {
    config: DispatcherConfig,
    world: World,
    host: Box<dyn VmHost>,
    tx_counter: u64,
    sc_counter: u64,
    retention: RetentionRing,
    tx_resps: HashMap<String, Value>,
    tx_process_status: HashMap<String, Value>,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig, host: Box<dyn VmHost>) -> Self {
        let retention = RetentionRing::new(config.number_of_txs_to_keep);
        Self {
            config,
            world: World::new(),
            host,
            tx_counter: 0,
            sc_counter: 0,
            retention,
            tx_resps: HashMap::new(),
            tx_process_status: HashMap::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run `step` through the host against the live world. Shared by
    /// `send` and the read-only query executor, since splitting `host`
    /// and `world` borrows only works from inside a `Dispatcher` method.
    pub fn execute_step(
        &mut self,
        step: &chainsim_world::TxStep,
    ) -> Result<chainsim_world::VmOutput, chainsim_world::HostError> {
        self.host.execute(&mut self.world, step)
    }

    /// Validate the envelope only, earliest failure wins (spec.md §4.2
    /// "Validation"). Returns the decoded `(sender, receiver)` bytes.
    fn validate(&mut self, raw: &RawTx) -> Result<(Vec<u8>, Vec<u8>), ChainError> {
        if raw.chain_id != self.config.chain_id {
            return Err(ChainError::InvalidChainId);
        }
        if raw.version != self.config.version {
            return Err(ChainError::InvalidVersion);
        }
        if raw.gas_limit < self.config.min_gas_limit {
            return Err(ChainError::InsufficientGasLimit);
        }
        let sender = bech32_addr::decode(&raw.sender)?;
        let receiver = bech32_addr::decode(&raw.receiver)?;
        let sender_nonce = self.world.get_account(&sender).nonce;
        if sender_nonce != raw.nonce {
            return Err(ChainError::InvalidNonce);
        }
        Ok((sender, receiver))
    }

    /// Accept, execute and store one transaction. On success returns the
    /// tx hash; the stored response/process-status are available via
    /// `get`/`get_process_status` afterward.
    pub fn send(&mut self, raw: RawTx) -> Result<String, ChainError> {
        let (sender, receiver) = self.validate(&raw)?;
        let value = bigint::decimal_to_bigint(&raw.value)?;
        let mut step = parser::parse(raw.data.as_deref(), &sender, &receiver, value)?;
        step.nonce = raw.nonce;
        step.gas_price = raw.gas_price;
        step.gas_limit = raw.gas_limit;

        if step.kind == TxKind::ScDeploy {
            self.sc_counter += 1;
            let new_address = chainsim_codec::address::contract_address(self.sc_counter);
            self.world.new_address_mocks.push(NewAddressMock {
                creator_address: sender.clone(),
                creator_nonce: raw.nonce,
                new_address: new_address.to_vec(),
            });
        }

        // Acceptance: the tx counter is consumed here, before execution —
        // a host failure below does not roll this back (spec.md §4.2,
        // §7 propagation policy).
        self.tx_counter += 1;
        let hash = self.tx_counter.to_string();

        let output = self
            .execute_step(&step)
            .map_err(|e| ChainError::Host(e.0))?;

        let deploy_bech = if step.kind == TxKind::ScDeploy {
            Some(bech32_addr::encode(&chainsim_codec::address::contract_address(
                self.sc_counter,
            ))?)
        } else {
            None
        };

        let transaction = response::build_transaction(
            &hash,
            step.kind,
            &output,
            step.gas_limit,
            step.gas_price,
            deploy_bech.as_deref(),
        );
        let process_status = response::process_status(&output);

        self.tx_resps
            .insert(hash.clone(), serde_json::json!({ "transaction": transaction }));
        self.tx_process_status
            .insert(hash.clone(), process_status);

        if let Some(evicted) = self.retention.push(hash.clone()) {
            debug!(evicted_hash = %evicted, "evicting oldest retained transaction");
            self.tx_resps.remove(&evicted);
            self.tx_process_status.remove(&evicted);
        }

        info!(tx_hash = %hash, return_code = output.return_code, "transaction accepted");
        Ok(hash)
    }

    /// Run each element independently; a failing element is silently
    /// omitted from the result map. Index is the element's 0-based
    /// position in the input list.
    pub fn send_multiple(&mut self, raws: Vec<RawTx>) -> HashMap<usize, String> {
        let mut out = HashMap::new();
        for (index, raw) in raws.into_iter().enumerate() {
            match self.send(raw) {
                Ok(hash) => {
                    out.insert(index, hash);
                }
                Err(e) => {
                    debug!(index, error = %e, "sendMultiple: element rejected, omitting from result");
                }
            }
        }
        out
    }

    pub fn get(&self, hash: &str, with_results: bool) -> Option<Value> {
        let stored = self.tx_resps.get(hash)?.clone();
        if with_results {
            return Some(stored);
        }
        let mut stored = stored;
        if let Some(transaction) = stored.get_mut("transaction") {
            response::strip_results(transaction);
        }
        Some(stored)
    }

    pub fn get_process_status(&self, hash: &str) -> Option<Value> {
        self.tx_process_status.get(hash).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainsim_world::MockVmHost;
    use num_bigint::BigInt;

    fn new_dispatcher() -> Dispatcher {
        Dispatcher::new(DispatcherConfig::default(), Box::new(MockVmHost::new()))
    }

    fn raw(sender: &str, receiver: &str, nonce: u64) -> RawTx {
        RawTx {
            nonce,
            value: "0".to_string(),
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            gas_price: 1_000_000_000,
            gas_limit: 50_000,
            data: None,
            signature: String::new(),
            chain_id: "S".to_string(),
            version: 1,
        }
    }

    fn addr(byte: u8) -> String {
        bech32_addr::encode(&[byte; 32]).unwrap()
    }

    #[test]
    fn accepted_send_gets_sequential_decimal_hash() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        let hash = d.send(raw(&a, &b, 0)).unwrap();
        assert_eq!(hash, "1");
        assert_eq!(
            d.get_process_status(&hash).unwrap()["status"],
            "success"
        );
    }

    #[test]
    fn wrong_chain_id_is_rejected_without_consuming_counter() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        let mut tx = raw(&a, &b, 0);
        tx.chain_id = "T".to_string();
        let err = d.send(tx).unwrap_err();
        assert_eq!(err.to_string(), "invalid chain ID");
        let hash = d.send(raw(&a, &b, 0)).unwrap();
        assert_eq!(hash, "1");
    }

    #[test]
    fn nonce_mismatch_is_rejected() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        let err = d.send(raw(&a, &b, 5)).unwrap_err();
        assert_eq!(err.to_string(), "invalid nonce");
    }

    #[test]
    fn deploy_produces_hinted_contract_address() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let zero = bech32_addr::encode(&[0u8; 32]).unwrap();
        let data = chainsim_codec::base64_bytes::encode(b"aabbcc@0500@0100");
        let mut tx = raw(&a, &zero, 0);
        tx.data = Some(data);
        let hash = d.send(tx).unwrap();
        let stored = d.get(&hash, true).unwrap();
        let expected_addr =
            bech32_addr::encode(&chainsim_codec::address::contract_address(1)).unwrap();
        assert_eq!(
            stored["transaction"]["logs"]["events"][0]["address"],
            expected_addr
        );
    }

    #[test]
    fn retention_evicts_first_hash_over_capacity() {
        let mut config = DispatcherConfig::default();
        config.number_of_txs_to_keep = 2;
        let mut d = Dispatcher::new(config, Box::new(MockVmHost::new()));
        let a = addr(1);
        let b = addr(2);
        let h1 = d.send(raw(&a, &b, 0)).unwrap();
        let h2 = d.send(raw(&a, &b, 1)).unwrap();
        let h3 = d.send(raw(&a, &b, 2)).unwrap();
        assert!(d.get(&h1, true).is_none());
        assert!(d.get(&h2, true).is_some());
        assert!(d.get(&h3, true).is_some());
    }

    #[test]
    fn get_without_results_strips_inner_fields() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        let hash = d.send(raw(&a, &b, 0)).unwrap();
        let stripped = d.get(&hash, false).unwrap();
        let tx = &stripped["transaction"];
        assert!(tx.get("logs").is_none());
        assert!(tx.get("fee").is_none());
        assert_eq!(tx["hash"], hash);
    }

    #[test]
    fn send_multiple_omits_failing_elements_but_consumes_counters() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        let mut bad = raw(&a, &b, 0);
        bad.chain_id = "T".to_string();
        let good = raw(&a, &b, 0);
        let results = d.send_multiple(vec![bad, good]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.get(&1).unwrap(), "1");
    }

    #[test]
    fn unseen_sender_is_autovivified_at_nonce_zero() {
        let mut d = new_dispatcher();
        let a = addr(7);
        let b = addr(8);
        assert_eq!(d.send(raw(&a, &b, 0)).unwrap(), "1");
    }

    #[test]
    fn insufficient_gas_limit_rejected() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        let mut tx = raw(&a, &b, 0);
        tx.gas_limit = 100;
        let err = d.send(tx).unwrap_err();
        assert_eq!(err.to_string(), "insufficient gas limit");
    }

    #[test]
    fn value_is_parsed_and_moved_by_the_host() {
        let mut d = new_dispatcher();
        let a = addr(1);
        let b = addr(2);
        d.world_mut().get_account_mut(&bech32_addr::decode(&a).unwrap()).balance = BigInt::from(1000);
        let mut tx = raw(&a, &b, 0);
        tx.value = "100".to_string();
        d.send(tx).unwrap();
        assert_eq!(
            d.world().peek_account(&bech32_addr::decode(&b).unwrap()).unwrap().balance,
            BigInt::from(100)
        );
    }
}
