//! Maps `ChainError` onto the gateway's HTTP error contract: every failure
//! is HTTP 400 with body `{error, code:"error"}` (spec.md §6, §7).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chainsim_types::{ChainError, Envelope};

pub struct ApiError(pub ChainError);

impl From<ChainError> for ApiError {
    fn from(e: ChainError) -> Self {
        ApiError(e)
    }
}

/// Lets handlers use `?` directly on codec calls (`bech32_addr::decode`,
/// `hex_bytes::decode`, ...) without an explicit `ChainError::from` step.
impl From<chainsim_codec::CodecError> for ApiError {
    fn from(e: chainsim_codec::CodecError) -> Self {
        ApiError(ChainError::from(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: Envelope<()> = Envelope::err(self.0.to_string());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
