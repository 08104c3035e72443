//! `waiaas encode|sign`

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use waiaas_core::WaiaasClient;

use super::print_json;

/// Parse the `--abi` and `--args` JSON strings.
pub fn parse_encode_input(abi: &str, args: &str) -> Result<(Vec<Map<String, Value>>, Vec<Value>)> {
    let abi: Vec<Map<String, Value>> =
        serde_json::from_str(abi).context("--abi must be a JSON array of ABI fragments")?;
    let args: Vec<Value> = serde_json::from_str(args).context("--args must be a JSON array")?;
    Ok((abi, args))
}

pub async fn run_encode(
    client: &WaiaasClient,
    abi: &str,
    function_name: &str,
    args: &str,
) -> Result<()> {
    let (abi, args) = parse_encode_input(abi, args)?;
    print_json(&client.encode_calldata(abi, function_name, args).await?)
}

pub async fn run_sign(
    client: &WaiaasClient,
    transaction: &str,
    chain: Option<&str>,
    network: Option<&str>,
) -> Result<()> {
    print_json(&client.sign_transaction(transaction, chain, network).await?)
}
