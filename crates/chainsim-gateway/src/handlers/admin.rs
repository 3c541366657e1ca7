//! `/admin/**` handlers (spec.md §6) — the admin glue component. Thin
//! projections and mutations over `world.accounts`/block info.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use chainsim_codec::bech32_addr;
use chainsim_types::{ChainError, Envelope};
use tracing::debug;

use crate::accounts::{account_from_raw, account_to_json, RawAccount};
use crate::block::RawBlockInfo;
use crate::error_response::ApiError;
use crate::state::AppState;

/// `{accounts: [accountWithPairs]}`, sorted by bech32 address ascending
/// (spec.md §6).
pub async fn get_all_accounts(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let dispatcher = state.dispatcher.lock().await;
    let mut encoded: Vec<(String, Value)> = dispatcher
        .world()
        .all_accounts()
        .map(|account| {
            let bech = bech32_addr::encode(&account.address).map_err(ChainError::from)?;
            let json_account = account_to_json(account, true)?;
            Ok::<_, ChainError>((bech, json_account))
        })
        .collect::<Result<_, ChainError>>()?;
    encoded.sort_by(|a, b| a.0.cmp(&b.0));
    let accounts: Vec<Value> = encoded.into_iter().map(|(_, v)| v).collect();
    Ok(Json(Envelope::ok(json!({ "accounts": accounts }))))
}

pub async fn set_accounts(
    State(state): State<AppState>,
    Json(raws): Json<Vec<RawAccount>>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let mut dispatcher = state.dispatcher.lock().await;
    debug!(count = raws.len(), "admin: overwriting accounts");
    for raw in &raws {
        let account = account_from_raw(raw)?;
        dispatcher.world_mut().put_account(account);
    }
    Ok(Json(Envelope::ok(json!({}))))
}

pub async fn set_current_block_info(
    State(state): State<AppState>,
    Json(raw): Json<RawBlockInfo>,
) -> Json<Envelope<Value>> {
    let mut dispatcher = state.dispatcher.lock().await;
    debug!("admin: setting current block info");
    dispatcher.world_mut().current_block_info = raw.into();
    Json(Envelope::ok(json!({})))
}

pub async fn set_previous_block_info(
    State(state): State<AppState>,
    Json(raw): Json<RawBlockInfo>,
) -> Json<Envelope<Value>> {
    let mut dispatcher = state.dispatcher.lock().await;
    debug!("admin: setting previous block info");
    dispatcher.world_mut().previous_block_info = raw.into();
    Json(Envelope::ok(json!({})))
}
