use reqwest::Method;
use serde_json::{Map, Value};

use super::WaiaasClient;
use crate::error::WaiaasError;
use crate::models::{
    EncodeCalldataRequest, EncodeCalldataResponse, SignTransactionRequest,
    SignTransactionResponse,
};

impl WaiaasClient {
    /// `POST /v1/utils/encode-calldata`: ABI-encode an EVM function call.
    pub async fn encode_calldata(
        &self,
        abi: Vec<Map<String, Value>>,
        function_name: &str,
        args: Vec<Value>,
    ) -> Result<EncodeCalldataResponse, WaiaasError> {
        let body = EncodeCalldataRequest {
            abi,
            function_name: function_name.to_string(),
            args,
        };
        self.request(
            Method::POST,
            "/v1/utils/encode-calldata",
            &[],
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    /// `POST /v1/transactions/sign`: sign without broadcasting.
    pub async fn sign_transaction(
        &self,
        transaction: &str,
        chain: Option<&str>,
        network: Option<&str>,
    ) -> Result<SignTransactionResponse, WaiaasError> {
        let body = SignTransactionRequest {
            transaction: transaction.to_string(),
            chain: chain.map(str::to_string),
            network: network.map(str::to_string),
        };
        self.request(
            Method::POST,
            "/v1/transactions/sign",
            &[],
            Some(serde_json::to_value(body)?),
        )
        .await
    }
}
