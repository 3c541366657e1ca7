//! The HTTP surface: transaction/address/network/admin routes and the
//! `{data, code}` response envelope (spec.md §6).
//!
//! Handlers are a thin shape-mapping layer over `chainsim-engine`'s
//! dispatcher and query executor; all state-mutating and Host-invoking work
//! funnels through the single `AppState` mutex (spec.md §5).

pub mod accounts;
pub mod block;
pub mod config;
pub mod error_response;
mod handlers;
pub mod routes;
pub mod state;

pub use accounts::{account_from_raw, account_to_json, RawAccount};
pub use block::RawBlockInfo;
pub use config::NodeConfig;
pub use error_response::ApiError;
pub use routes::build_router;
pub use state::AppState;
