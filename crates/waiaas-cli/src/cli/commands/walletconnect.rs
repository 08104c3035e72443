//! `waiaas wc-connect|wc-status|wc-disconnect`

use anyhow::Result;
use waiaas_core::WaiaasClient;

use super::print_json;

pub async fn run_wc_connect(client: &WaiaasClient) -> Result<()> {
    let pairing = client.wc_connect().await?;
    eprintln!("Open this URI in the owner's wallet: {}", pairing.uri);
    print_json(&pairing)
}

pub async fn run_wc_status(client: &WaiaasClient) -> Result<()> {
    print_json(&client.wc_status().await?)
}

pub async fn run_wc_disconnect(client: &WaiaasClient) -> Result<()> {
    print_json(&client.wc_disconnect().await?)
}
