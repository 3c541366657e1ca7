//! Wire-shape input types the dispatcher and query executor consume.
//! Field names are literal and case-sensitive, matching the gateway's JSON
//! contract (spec.md §3, §6).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTx {
    pub nonce: u64,
    #[serde(default)]
    pub value: String,
    pub sender: String,
    pub receiver: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub data: Option<String>,
    #[serde(default)]
    pub signature: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
    pub sc_address: String,
    pub func_name: String,
    #[serde(default)]
    pub args: Vec<String>,
    pub caller: Option<String>,
    pub value: Option<String>,
}
