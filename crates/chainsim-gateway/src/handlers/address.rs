//! `/address/**` handlers (spec.md §6) — read-only projections over
//! `world.accounts`. Reads auto-vivify an unseen address at nonce 0 /
//! balance 0, the same resolution the dispatcher's nonce check uses
//! (SPEC_FULL.md §1).

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use chainsim_codec::{bech32_addr, hex_bytes};
use chainsim_types::Envelope;

use crate::accounts::account_to_json;
use crate::error_response::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WithKeysQuery {
    #[serde(default, rename = "withKeys")]
    with_keys: Option<String>,
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(bech): Path<String>,
    Query(q): Query<WithKeysQuery>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let with_keys = q.with_keys.as_deref() == Some("true");
    let address = bech32_addr::decode(&bech)?;
    let mut dispatcher = state.dispatcher.lock().await;
    let account = dispatcher.world_mut().get_account(&address).clone();
    let account_json = account_to_json(&account, with_keys)?;
    Ok(Json(Envelope::ok(json!({ "account": account_json }))))
}

pub async fn get_nonce(
    State(state): State<AppState>,
    Path(bech): Path<String>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let address = bech32_addr::decode(&bech)?;
    let mut dispatcher = state.dispatcher.lock().await;
    let nonce = dispatcher.world_mut().get_account(&address).nonce;
    Ok(Json(Envelope::ok(json!({ "nonce": nonce }))))
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(bech): Path<String>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let address = bech32_addr::decode(&bech)?;
    let mut dispatcher = state.dispatcher.lock().await;
    let balance = dispatcher.world_mut().get_account(&address).balance.to_string();
    Ok(Json(Envelope::ok(json!({ "balance": balance }))))
}

pub async fn get_keys(
    State(state): State<AppState>,
    Path(bech): Path<String>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let address = bech32_addr::decode(&bech)?;
    let mut dispatcher = state.dispatcher.lock().await;
    let account = dispatcher.world_mut().get_account(&address).clone();
    let mut pairs = Map::new();
    for (k, v) in &account.storage {
        pairs.insert(hex_bytes::encode(k), json!(hex_bytes::encode(v)));
    }
    Ok(Json(Envelope::ok(json!({ "pairs": pairs }))))
}

pub async fn get_key(
    State(state): State<AppState>,
    Path((bech, hex_key)): Path<(String, String)>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let address = bech32_addr::decode(&bech)?;
    let key = hex_bytes::decode(&hex_key)?;
    let mut dispatcher = state.dispatcher.lock().await;
    let account = dispatcher.world_mut().get_account(&address).clone();
    let value = account.storage.get(&key).cloned().unwrap_or_default();
    Ok(Json(Envelope::ok(json!({ "value": hex_bytes::encode(&value) }))))
}
