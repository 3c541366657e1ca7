//! Current/previous block info, as set via the admin block-info endpoints.

/// Block metadata tracked per spec.md §3 ("World (external)"). Defaults to
/// all-zero until an admin call sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockInfo {
    pub timestamp: u64,
    pub nonce: u64,
    pub round: u64,
    pub epoch: u32,
}
