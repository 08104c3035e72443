use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /v1/utils/encode-calldata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeCalldataRequest {
    /// ABI fragment array.
    pub abi: Vec<Map<String, Value>>,
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeCalldataResponse {
    /// 0x-prefixed hex calldata.
    pub calldata: String,
    /// First four bytes of the calldata.
    pub selector: String,
    pub function_name: String,
}

/// Body of `POST /v1/transactions/sign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransactionRequest {
    /// Base64 for Solana, hex for EVM.
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionOperation {
    #[serde(rename = "type")]
    pub op_type: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResult {
    pub tier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionResponse {
    pub id: String,
    pub signed_transaction: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
    pub operations: Vec<SignTransactionOperation>,
    pub policy_result: PolicyResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_request_wire_shape() {
        let abi = json!({"type": "function", "name": "transfer"}).as_object().cloned().unwrap();
        let req = EncodeCalldataRequest {
            abi: vec![abi],
            function_name: "transfer".into(),
            args: vec![json!("0xabc"), json!("1000")],
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["functionName"], "transfer");
        assert_eq!(v["args"][1], "1000");
    }

    #[test]
    fn sign_request_omits_hints() {
        let req = SignTransactionRequest {
            transaction: "0xdead".into(),
            chain: None,
            network: Some("polygon-mainnet".into()),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"transaction": "0xdead", "network": "polygon-mainnet"})
        );
    }

    #[test]
    fn sign_response() {
        let r: SignTransactionResponse = serde_json::from_value(json!({
            "id": "tx-9",
            "signedTransaction": "0xsigned",
            "operations": [{"type": "NATIVE_TRANSFER", "to": "0xabc", "amount": "1", "programId": null}],
            "policyResult": {"tier": "INSTANT"}
        }))
        .unwrap();
        assert_eq!(r.signed_transaction, "0xsigned");
        assert!(r.tx_hash.is_none());
        assert_eq!(r.operations[0].op_type, "NATIVE_TRANSFER");
        assert_eq!(r.policy_result.tier, "INSTANT");
    }
}
