//! `waiaas renew|connect-info`

use anyhow::Result;
use waiaas_core::WaiaasClient;

use super::print_json;

/// The new token is printed; the config file is left untouched.
pub async fn run_renew(client: &WaiaasClient, session_id: &str) -> Result<()> {
    print_json(&client.renew_session(session_id).await?)
}

pub async fn run_connect_info(client: &WaiaasClient) -> Result<()> {
    print_json(&client.get_connect_info().await?)
}
