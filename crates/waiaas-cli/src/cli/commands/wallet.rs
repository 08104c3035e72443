//! `waiaas address|balance|assets|info|set-network`

use anyhow::Result;
use waiaas_core::WaiaasClient;

use super::print_json;

pub async fn run_address(client: &WaiaasClient) -> Result<()> {
    print_json(&client.get_address().await?)
}

pub async fn run_balance(client: &WaiaasClient, network: Option<&str>, all: bool) -> Result<()> {
    if all {
        print_json(&client.get_all_balances().await?)
    } else {
        print_json(&client.get_balance(network).await?)
    }
}

pub async fn run_assets(client: &WaiaasClient, network: Option<&str>, all: bool) -> Result<()> {
    if all {
        print_json(&client.get_all_assets().await?)
    } else {
        print_json(&client.get_assets(network).await?)
    }
}

pub async fn run_info(client: &WaiaasClient) -> Result<()> {
    print_json(&client.get_wallet_info().await?)
}

pub async fn run_set_network(client: &WaiaasClient, network: &str) -> Result<()> {
    let resp = client.set_default_network(network).await?;
    tracing::info!(network = %resp.default_network, "default network changed");
    print_json(&resp)
}
