//! `/transaction/**` and `/vm-values/query` handlers (spec.md §6).
//!
//! Thin shape-mapping over the dispatcher/query executor — every handler
//! body is lock, call, envelope.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use chainsim_engine::{query as query_executor, RawQuery, RawTx};
use chainsim_types::{ChainError, Envelope};

use crate::error_response::ApiError;
use crate::state::AppState;

pub async fn send(
    State(state): State<AppState>,
    Json(raw): Json<RawTx>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let mut dispatcher = state.dispatcher.lock().await;
    let hash = dispatcher.send(raw)?;
    Ok(Json(Envelope::ok(json!({ "txHash": hash }))))
}

pub async fn send_multiple(
    State(state): State<AppState>,
    Json(raws): Json<Vec<RawTx>>,
) -> Json<Envelope<Value>> {
    let mut dispatcher = state.dispatcher.lock().await;
    let hashes = dispatcher.send_multiple(raws);
    let by_index: HashMap<String, String> = hashes
        .into_iter()
        .map(|(index, hash)| (index.to_string(), hash))
        .collect();
    Json(Envelope::ok(json!({ "txsHashes": by_index })))
}

#[derive(Debug, Default, Deserialize)]
pub struct WithResultsQuery {
    #[serde(default, rename = "withResults")]
    with_results: Option<String>,
}

pub async fn get(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    Query(q): Query<WithResultsQuery>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let with_results = parse_bool_flag(q.with_results.as_deref())?;
    let dispatcher = state.dispatcher.lock().await;
    let stored = dispatcher.get(&hash, with_results).unwrap_or(Value::Null);
    Ok(Json(Envelope::ok(stored)))
}

pub async fn process_status(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Json<Envelope<Value>> {
    let dispatcher = state.dispatcher.lock().await;
    let stored = dispatcher.get_process_status(&hash).unwrap_or(Value::Null);
    Json(Envelope::ok(stored))
}

pub async fn vm_query(
    State(state): State<AppState>,
    Json(raw): Json<RawQuery>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let mut dispatcher = state.dispatcher.lock().await;
    let result = query_executor::query(&mut dispatcher, raw)?;
    Ok(Json(Envelope::ok(result)))
}

/// `?withResults=true|false`, absent means `false`.
fn parse_bool_flag(value: Option<&str>) -> Result<bool, ApiError> {
    match value {
        None => Ok(false),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(_) => Err(ApiError(ChainError::InvalidWithResultsOption)),
    }
}
