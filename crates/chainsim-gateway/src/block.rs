//! Wire shape for the admin block-info setters (spec.md §6
//! `/admin/set-current-block-info`, `/admin/set-previous-block-info`).

use chainsim_world::BlockInfo;
use serde::Deserialize;

/// `Block`, as accepted by the admin block-info endpoints. `randomSeed` is
/// not settable in this workspace and stays absent (SPEC_FULL.md §1).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlockInfo {
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub round: u64,
    #[serde(default)]
    pub epoch: u32,
}

impl From<RawBlockInfo> for BlockInfo {
    fn from(raw: RawBlockInfo) -> Self {
        BlockInfo {
            timestamp: raw.timestamp,
            nonce: raw.nonce,
            round: raw.round,
            epoch: raw.epoch,
        }
    }
}
