//! Tx-data parser: turns the base64, `@`-delimited `data` payload into a
//! classified `TxStep` (spec.md §4.1).

use chainsim_codec::{base64_bytes, bigint, hex_bytes};
use chainsim_types::{is_zero_address, Address, ChainError};
use chainsim_world::{EsdtTransfer, TxKind, TxStep};
use num_bigint::BigInt;

const MULTI_ESDT_MARKER: &str = "MultiESDTNFTTransfer";

/// Parse `data` (already base64-encoded, as received over HTTP) against the
/// decoded `sender`/`receiver` into a fully classified step. `value` is the
/// already-parsed EGLD value carried by the raw transaction envelope.
pub fn parse(
    data: Option<&str>,
    sender: &Address,
    receiver: &Address,
    value: BigInt,
) -> Result<TxStep, ChainError> {
    let mut to = receiver.clone();
    let mut code = None;
    let mut code_metadata = None;
    let mut function = None;
    let mut arguments = Vec::new();
    let mut esdt_transfers = Vec::new();

    if let Some(data) = data {
        let decoded = base64_bytes::decode(data)?;
        let text = String::from_utf8_lossy(&decoded);
        let parts: Vec<&str> = text.split('@').collect();
        let mut i = 0usize;

        if is_zero_address(receiver) {
            code = Some(hex_bytes::decode(parts.get(i).copied().unwrap_or(""))?);
            i += 2; // parts[1] is the ignored VM/language tag
            code_metadata = Some(hex_bytes::decode(parts.get(i).copied().unwrap_or(""))?);
            i += 1;
        } else if parts.first().copied() == Some(MULTI_ESDT_MARKER) {
            if sender != receiver {
                return Err(ChainError::MismatchedBundleEndpoints);
            }
            i += 1;
            let real_receiver = hex_bytes::decode(parts.get(i).copied().unwrap_or(""))?;
            to = real_receiver;
            i += 1;
            let count = bigint::hex_to_u64(parts.get(i).copied().unwrap_or(""))?;
            i += 1;
            for _ in 0..count {
                let token_id = hex_bytes::decode(parts.get(i).copied().unwrap_or(""))?;
                i += 1;
                let nonce = bigint::hex_to_u64(parts.get(i).copied().unwrap_or(""))?;
                i += 1;
                let amount = bigint::hex_to_bigint(parts.get(i).copied().unwrap_or(""))?;
                i += 1;
                esdt_transfers.push(EsdtTransfer {
                    token_id,
                    nonce,
                    amount,
                });
            }
            if i < parts.len() {
                let func = hex_bytes::decode(parts[i])?;
                function = Some(func);
                i += 1;
            }
        } else if let Some(first) = parts.first() {
            if !first.is_empty() {
                // Plain-call function name is used literally, not hex-decoded
                // — this asymmetry with the bundled case is intentional.
                function = Some(first.as_bytes().to_vec());
            }
            i += 1;
        }

        while i < parts.len() {
            arguments.push(hex_bytes::decode(parts[i])?);
            i += 1;
        }
    }

    let kind = if is_zero_address(receiver) {
        TxKind::ScDeploy
    } else if function.as_ref().is_some_and(|f| !f.is_empty()) {
        TxKind::ScCall
    } else {
        TxKind::Transfer
    };

    Ok(TxStep {
        kind,
        from: sender.clone(),
        to,
        nonce: 0,
        gas_price: 0,
        gas_limit: 0,
        value,
        code,
        code_metadata,
        function,
        arguments,
        esdt_transfers,
    })
}
