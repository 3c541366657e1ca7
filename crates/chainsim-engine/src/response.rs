//! Response shaping: assembling the gateway-compatible JSON trees for a
//! stored transaction, its process status, and a VM query (spec.md §4.5).

use chainsim_codec::{base64_bytes, hex_bytes};
use chainsim_world::{TxKind, VmOutput};
use num_bigint::BigInt;
use serde_json::{json, Value};

/// `"@" + hex(returnCode name) + "@" + hex(data[0]) + ...` — the glossary's
/// "condensed return data".
pub fn condense_return_data(output: &VmOutput) -> String {
    let mut out = String::from("@");
    out.push_str(&hex_bytes::encode(output.return_code_name().as_bytes()));
    for data in &output.return_data {
        out.push('@');
        out.push_str(&hex_bytes::encode(data));
    }
    out
}

/// Build the inner `transaction` object stored under a tx hash. Always
/// carries `status: "success"` at this level regardless of VM outcome —
/// only the process-status channel reports failure (spec.md §4.2).
#[allow(clippy::too_many_arguments)]
pub fn build_transaction(
    hash: &str,
    kind: TxKind,
    output: &VmOutput,
    gas_limit: u64,
    gas_price: u64,
    deploy_bech_address: Option<&str>,
) -> Value {
    let condensed = condense_return_data(output);
    let gas_used = gas_limit.saturating_sub(output.gas_remaining);
    let fee = BigInt::from(gas_used) * BigInt::from(gas_price);

    let (logs, smart_contract_results) = if output.is_ok() {
        if kind == TxKind::ScDeploy {
            let events = vec![
                json!({
                    "identifier": "SCDeploy",
                    "address": deploy_bech_address.unwrap_or_default(),
                }),
                json!({
                    "identifier": "writeLog",
                    "data": base64_bytes::encode(condensed.as_bytes()),
                }),
            ];
            (json!({ "events": events }), Value::Null)
        } else {
            let events = vec![json!({ "identifier": "completedTxEvent" })];
            let scr = vec![json!({ "data": condensed })];
            (json!({ "events": events }), Value::Array(scr))
        }
    } else {
        let events = vec![json!({ "identifier": "signalError" })];
        (json!({ "events": events }), Value::Null)
    };

    json!({
        "hash": hash,
        "status": "success",
        "logs": logs,
        "smartContractResults": smart_contract_results,
        "executionReceipt": {
            "returnCode": output.return_code,
            "returnMessage": output.return_message,
        },
        "executionLogs": Value::Array(Vec::new()),
        "fee": fee.to_string(),
        "gasUsed": gas_used,
    })
}

pub fn process_status(output: &VmOutput) -> Value {
    let status = if output.is_ok() { "success" } else { "failed" };
    json!({ "status": status })
}

/// `get(hash, withResults=false)` strips `logs`, `smartContractResults`,
/// `fee` and `gasUsed` from the inner transaction object, leaving everything
/// else untouched (spec.md §4.2).
pub fn strip_results(transaction: &mut Value) {
    if let Value::Object(map) = transaction {
        map.remove("logs");
        map.remove("smartContractResults");
        map.remove("fee");
        map.remove("gasUsed");
    }
}

/// The `vm-values/query` response body (spec.md §4.3).
pub fn query_response(output: &VmOutput) -> Value {
    let return_data: Vec<String> = output
        .return_data
        .iter()
        .map(|d| base64_bytes::encode(d))
        .collect();
    json!({
        "returnData": return_data,
        "returnCode": output.return_code,
        "returnMessage": output.return_message,
        "executionLogs": Value::Array(Vec::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_output() -> VmOutput {
        VmOutput {
            return_code: 0,
            return_message: String::new(),
            return_data: vec![vec![0x01]],
            gas_remaining: 10_000,
        }
    }

    #[test]
    fn transfer_success_has_completed_event_and_scr() {
        let tx = build_transaction("1", TxKind::Transfer, &ok_output(), 60_000, 1_000_000_000, None);
        assert_eq!(tx["logs"]["events"][0]["identifier"], "completedTxEvent");
        assert_eq!(tx["smartContractResults"][0]["data"], condense_return_data(&ok_output()));
        assert_eq!(tx["status"], "success");
        assert_eq!(tx["gasUsed"], 50_000);
    }

    #[test]
    fn deploy_success_has_scdeploy_event_no_scr() {
        let tx = build_transaction(
            "1",
            TxKind::ScDeploy,
            &ok_output(),
            60_000,
            1_000_000_000,
            Some("erd1abc"),
        );
        assert_eq!(tx["logs"]["events"][0]["identifier"], "SCDeploy");
        assert_eq!(tx["logs"]["events"][0]["address"], "erd1abc");
        assert_eq!(tx["logs"]["events"][1]["identifier"], "writeLog");
        assert!(tx["smartContractResults"].is_null());
    }

    #[test]
    fn failure_has_signal_error_and_failed_status() {
        let output = VmOutput {
            return_code: 4,
            return_message: "user error".into(),
            return_data: Vec::new(),
            gas_remaining: 0,
        };
        let tx = build_transaction("1", TxKind::ScCall, &output, 60_000, 1_000_000_000, None);
        assert_eq!(tx["logs"]["events"][0]["identifier"], "signalError");
        assert_eq!(tx["status"], "success"); // tx-level status is always success
        assert_eq!(process_status(&output)["status"], "failed");
    }

    #[test]
    fn strip_removes_result_fields_only() {
        let mut tx = build_transaction("1", TxKind::Transfer, &ok_output(), 60_000, 1_000_000_000, None);
        strip_results(&mut tx);
        assert!(tx.get("logs").is_none());
        assert!(tx.get("smartContractResults").is_none());
        assert!(tx.get("fee").is_none());
        assert!(tx.get("gasUsed").is_none());
        assert_eq!(tx["hash"], "1");
        assert_eq!(tx["status"], "success");
    }
}
