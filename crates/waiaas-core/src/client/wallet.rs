use reqwest::Method;

use super::WaiaasClient;
use crate::error::WaiaasError;
use crate::models::{
    MultiNetworkAssetsResponse, MultiNetworkBalanceResponse, SetDefaultNetworkRequest,
    SetDefaultNetworkResponse, WalletAddress, WalletAssets, WalletBalance, WalletInfo,
    WalletNetworksResponse,
};

/// Query value that asks the daemon for every network of the wallet's environment.
const ALL_NETWORKS: &str = "all";

fn network_query(network: Option<&str>) -> Vec<(&'static str, String)> {
    network
        .map(|n| vec![("network", n.to_string())])
        .unwrap_or_default()
}

impl WaiaasClient {
    /// `GET /v1/wallet/address`
    pub async fn get_address(&self) -> Result<WalletAddress, WaiaasError> {
        self.request(Method::GET, "/v1/wallet/address", &[], None)
            .await
    }

    /// `GET /v1/wallet/balance`, optionally for one network (e.g. `polygon-mainnet`).
    pub async fn get_balance(&self, network: Option<&str>) -> Result<WalletBalance, WaiaasError> {
        self.request(Method::GET, "/v1/wallet/balance", &network_query(network), None)
            .await
    }

    /// `GET /v1/wallet/assets`, optionally for one network.
    pub async fn get_assets(&self, network: Option<&str>) -> Result<WalletAssets, WaiaasError> {
        self.request(Method::GET, "/v1/wallet/assets", &network_query(network), None)
            .await
    }

    /// Native balances on every network; failed networks carry an `error`.
    pub async fn get_all_balances(&self) -> Result<MultiNetworkBalanceResponse, WaiaasError> {
        self.request(
            Method::GET,
            "/v1/wallet/balance",
            &network_query(Some(ALL_NETWORKS)),
            None,
        )
        .await
    }

    /// Token assets on every network; failed networks carry an `error`.
    pub async fn get_all_assets(&self) -> Result<MultiNetworkAssetsResponse, WaiaasError> {
        self.request(
            Method::GET,
            "/v1/wallet/assets",
            &network_query(Some(ALL_NETWORKS)),
            None,
        )
        .await
    }

    /// Address plus `GET /v1/wallets/{id}/networks`, combined.
    pub async fn get_wallet_info(&self) -> Result<WalletInfo, WaiaasError> {
        let address = self.get_address().await?;
        let path = format!("/v1/wallets/{}/networks", address.wallet_id);
        let networks: WalletNetworksResponse = self.request(Method::GET, &path, &[], None).await?;
        Ok(WalletInfo::from_parts(address, networks))
    }

    /// `PUT /v1/wallet/default-network`
    pub async fn set_default_network(
        &self,
        network: &str,
    ) -> Result<SetDefaultNetworkResponse, WaiaasError> {
        let body = SetDefaultNetworkRequest {
            network: network.to_string(),
        };
        self.request(
            Method::PUT,
            "/v1/wallet/default-network",
            &[],
            Some(serde_json::to_value(body)?),
        )
        .await
    }
}
