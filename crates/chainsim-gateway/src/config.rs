//! Node-wide configuration, pinned to the values spec.md treats as
//! constants but surfaced as fields so a caller can override them (the CLI
//! binary wires `--server-port`/`--txs-to-keep` through here).

use chainsim_engine::DispatcherConfig;

/// Binds the HTTP server and seeds the dispatcher's validation constants.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub server_port: u16,
    pub number_of_txs_to_keep: usize,
    pub chain_id: String,
    pub version: u64,
    pub min_gas_limit: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            server_port: 8085,
            number_of_txs_to_keep: 200,
            chain_id: "S".to_string(),
            version: 1,
            min_gas_limit: 50_000,
        }
    }
}

impl NodeConfig {
    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            chain_id: self.chain_id.clone(),
            version: self.version,
            min_gas_limit: self.min_gas_limit,
            number_of_txs_to_keep: self.number_of_txs_to_keep,
        }
    }
}
