//! Account JSON shaping and `RawAccount` ingestion (spec.md §6 "Account data
//! shape" / "RawAccount").
//!
//! Both directions are pure projections over `chainsim_world::Account` — no
//! state lives here, the handlers own the world lock.

use chainsim_codec::{base64_bytes, bech32_addr, bigint, hex_bytes};
use chainsim_types::ChainError;
use chainsim_world::Account;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// `RawAccount`, as accepted by `/admin/set-accounts` (spec.md §6).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccount {
    pub address: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub kvs: HashMap<String, String>,
    pub code: Option<String>,
    pub code_metadata: Option<String>,
    pub owner: Option<String>,
}

/// Turn a `RawAccount` into a world `Account`. Setting a non-empty `code`
/// marks the account as a contract; when `code` is absent or empty and the
/// account isn't a contract, `codeMetadata` defaults to the single
/// "readable" byte (spec.md §6).
pub fn account_from_raw(raw: &RawAccount) -> Result<Account, ChainError> {
    let address = bech32_addr::decode(&raw.address)?;
    let balance = bigint::decimal_to_bigint(&raw.balance)?;

    let mut storage = HashMap::with_capacity(raw.kvs.len());
    for (k, v) in &raw.kvs {
        storage.insert(hex_bytes::decode(k)?, hex_bytes::decode(v)?);
    }

    let is_smart_contract = raw.code.as_deref().is_some_and(|c| !c.is_empty());
    let code = match &raw.code {
        Some(c) => hex_bytes::decode(c)?,
        None => Vec::new(),
    };
    let code_metadata = match &raw.code_metadata {
        Some(m) => Some(hex_bytes::decode(m)?),
        None if !is_smart_contract => Some(Account::readable_code_metadata()),
        None => None,
    };
    let owner_address = raw
        .owner
        .as_deref()
        .map(bech32_addr::decode)
        .transpose()?;

    Ok(Account {
        address,
        nonce: raw.nonce,
        balance,
        storage,
        code,
        code_hash: None,
        code_metadata,
        owner_address,
        is_smart_contract,
    })
}

/// Project an `Account` into the gateway's JSON shape. `with_pairs`
/// controls whether `pairs` is included — driven by `?withKeys=` on the
/// single-account read, always-on for `/admin/get-all-accounts`.
pub fn account_to_json(account: &Account, with_pairs: bool) -> Result<Value, ChainError> {
    let mut obj = Map::new();
    obj.insert(
        "address".into(),
        json!(bech32_addr::encode(&account.address)?),
    );
    obj.insert("nonce".into(), json!(account.nonce));
    obj.insert("balance".into(), json!(account.balance.to_string()));
    obj.insert("code".into(), json!(hex_bytes::encode(&account.code)));
    if let Some(hash) = &account.code_hash {
        obj.insert("codeHash".into(), json!(base64_bytes::encode(hash)));
    }
    if let Some(meta) = &account.code_metadata {
        obj.insert("codeMetadata".into(), json!(base64_bytes::encode(meta)));
    }
    obj.insert(
        "ownerAddress".into(),
        json!(match &account.owner_address {
            Some(addr) => bech32_addr::encode(addr)?,
            None => String::new(),
        }),
    );
    if with_pairs {
        let mut pairs = Map::new();
        for (k, v) in &account.storage {
            pairs.insert(hex_bytes::encode(k), json!(hex_bytes::encode(v)));
        }
        obj.insert("pairs".into(), Value::Object(pairs));
    }
    Ok(Value::Object(obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn raw_without_code_gets_readable_metadata() {
        let raw = RawAccount {
            address: bech32_addr::encode(&[1u8; 32]).unwrap(),
            nonce: 0,
            balance: "0".into(),
            kvs: HashMap::new(),
            code: None,
            code_metadata: None,
            owner: None,
        };
        let account = account_from_raw(&raw).unwrap();
        assert!(!account.is_smart_contract);
        assert_eq!(account.code_metadata, Some(Account::readable_code_metadata()));
    }

    #[test]
    fn raw_with_code_marks_contract_and_keeps_no_default_metadata() {
        let raw = RawAccount {
            address: bech32_addr::encode(&[1u8; 32]).unwrap(),
            nonce: 0,
            balance: "0".into(),
            kvs: HashMap::new(),
            code: Some("deadbeef".into()),
            code_metadata: None,
            owner: None,
        };
        let account = account_from_raw(&raw).unwrap();
        assert!(account.is_smart_contract);
        assert!(account.code_metadata.is_none());
    }

    #[test]
    fn raw_with_empty_code_string_is_not_a_contract() {
        let raw = RawAccount {
            address: bech32_addr::encode(&[1u8; 32]).unwrap(),
            nonce: 0,
            balance: "0".into(),
            kvs: HashMap::new(),
            code: Some("".into()),
            code_metadata: None,
            owner: None,
        };
        let account = account_from_raw(&raw).unwrap();
        assert!(!account.is_smart_contract);
        assert_eq!(account.code_metadata, Some(Account::readable_code_metadata()));
    }

    #[test]
    fn to_json_omits_pairs_unless_requested() {
        let account = Account {
            balance: BigInt::from(0),
            ..Account::new(vec![1u8; 32])
        };
        let without = account_to_json(&account, false).unwrap();
        assert!(without.get("pairs").is_none());
        let with = account_to_json(&account, true).unwrap();
        assert!(with.get("pairs").is_some());
    }
}
