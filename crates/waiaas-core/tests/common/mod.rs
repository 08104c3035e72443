//! Shared fixtures for client integration tests against a wiremock daemon.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use waiaas_core::{RetryPolicy, WaiaasClient};
use wiremock::MockServer;

pub const WALLET_ID: &str = "01935a2b-0000-7000-8000-000000000001";
pub const SESSION_ID: &str = "01935a2b-0000-7000-8000-0000000000aa";
pub const TX_ID: &str = "01935a2b-0000-7000-8000-0000000000f1";
pub const TOKEN: &str = "wai_sess_test_token";

/// Client pointed at `server` with retries disabled.
pub fn client(server: &MockServer) -> WaiaasClient {
    client_with_policy(server, RetryPolicy::no_retry())
}

pub fn client_with_policy(server: &MockServer, policy: RetryPolicy) -> WaiaasClient {
    WaiaasClient::builder(&server.uri(), TOKEN)
        .retry_policy(policy)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client")
}

/// Fast backoff so retry tests finish quickly.
pub fn fast_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new(
        max_retries,
        Duration::from_millis(1),
        Duration::from_millis(5),
    )
}

pub fn balance_body(balance: &str) -> Value {
    json!({
        "walletId": WALLET_ID,
        "chain": "solana",
        "network": "devnet",
        "address": "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
        "balance": balance,
        "decimals": 9,
        "symbol": "SOL"
    })
}

pub fn address_body() -> Value {
    json!({
        "walletId": WALLET_ID,
        "chain": "evm",
        "network": "ethereum-sepolia",
        "address": "0xabc"
    })
}

pub fn error_body(code: &str, message: &str, retryable: bool) -> Value {
    json!({"code": code, "message": message, "retryable": retryable})
}

pub fn tx_detail(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "walletId": WALLET_ID,
        "type": "TRANSFER",
        "status": status,
        "tier": "INSTANT",
        "chain": "solana",
        "toAddress": "addr",
        "amount": "1000",
        "txHash": null,
        "createdAt": 1700000000
    })
}
