//! Route table: the HTTP surface from spec.md §6, wired onto axum.
//!
//! `/health` is ambient (SPEC_FULL.md §6) and deliberately outside the
//! `{data, code}` envelope, since it's an operational check, not a
//! protocol response.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::handlers::{address, admin, network, transaction};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/address/:bech", get(address::get_account))
        .route("/address/:bech/nonce", get(address::get_nonce))
        .route("/address/:bech/balance", get(address::get_balance))
        .route("/address/:bech/keys", get(address::get_keys))
        .route("/address/:bech/key/:hex_key", get(address::get_key))
        .route("/transaction/send", post(transaction::send))
        .route(
            "/transaction/send-multiple",
            post(transaction::send_multiple),
        )
        .route("/transaction/:hash", get(transaction::get))
        .route(
            "/transaction/:hash/process-status",
            get(transaction::process_status),
        )
        .route("/vm-values/query", post(transaction::vm_query))
        .route("/network/status/:shard", get(network::status))
        .route("/admin/get-all-accounts", get(admin::get_all_accounts))
        .route("/admin/set-accounts", post(admin::set_accounts))
        .route(
            "/admin/set-current-block-info",
            post(admin::set_current_block_info),
        )
        .route(
            "/admin/set-previous-block-info",
            post(admin::set_previous_block_info),
        )
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
