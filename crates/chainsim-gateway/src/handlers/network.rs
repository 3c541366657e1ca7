//! `/network/status/{shard}` (spec.md §6). The `shard` path parameter is
//! accepted but ignored (spec.md §1: "multi-shard routing is ignored").
//!
//! Only `erd_block_timestamp`, `erd_current_round`, `erd_epoch_number` and
//! `erd_nonce` are live, sourced from the current block info; every other
//! field is the literal `-1`, nested under a `status` key (verbatim from
//! `handleNetwork.go`'s `HandleNetworkStatus` — `erd_cross_check_block_height`
//! is the one field carried as a string `"-1"` there, every other `-1` is a
//! JSON number).

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use chainsim_types::Envelope;

use crate::state::AppState;

pub async fn status(State(state): State<AppState>, Path(_shard): Path<String>) -> Json<Envelope<Value>> {
    let dispatcher = state.dispatcher.lock().await;
    let block = dispatcher.world().current_block_info;

    Json(Envelope::ok(json!({
        "status": {
            "erd_block_timestamp": block.timestamp,
            "erd_cross_check_block_height": "-1",
            "erd_current_round": block.round,
            "erd_epoch_number": block.epoch,
            "erd_highest_final_nonce": -1,
            "erd_nonce": block.nonce,
            "erd_nonce_at_epoch_start": -1,
            "erd_nonces_passed_in_current_epoch": -1,
            "erd_round_at_epoch_start": -1,
            "erd_rounds_passed_in_current_epoch": -1,
            "erd_rounds_per_epoch": -1,
        },
    })))
}
