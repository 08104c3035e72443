use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddress {
    pub wallet_id: String,
    pub chain: String,
    pub network: String,
    pub address: String,
}

/// Native balance in base units (lamports, wei) as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub wallet_id: String,
    pub chain: String,
    pub network: String,
    pub address: String,
    pub balance: String,
    pub decimals: u32,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub mint: String,
    pub symbol: String,
    pub name: String,
    pub balance: String,
    pub decimals: u32,
    pub is_native: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAssets {
    pub wallet_id: String,
    pub chain: String,
    pub network: String,
    pub assets: Vec<AssetInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletNetworkInfo {
    pub network: String,
    pub is_default: bool,
}

/// Body of `GET /v1/wallets/{id}/networks`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletNetworksResponse {
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub available_networks: Vec<WalletNetworkInfo>,
}

/// Address and network list combined by [`get_wallet_info`](crate::client::WaiaasClient::get_wallet_info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    pub wallet_id: String,
    pub chain: String,
    pub network: String,
    pub environment: String,
    pub address: String,
    pub networks: Vec<WalletNetworkInfo>,
}

impl WalletInfo {
    pub fn from_parts(address: WalletAddress, networks: WalletNetworksResponse) -> Self {
        Self {
            wallet_id: address.wallet_id,
            chain: address.chain,
            network: address.network,
            environment: networks.environment,
            address: address.address,
            networks: networks.available_networks,
        }
    }

    /// The network flagged as default, if the daemon reported one.
    pub fn default_network(&self) -> Option<&str> {
        self.networks
            .iter()
            .find(|n| n.is_default)
            .map(|n| n.network.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetDefaultNetworkRequest {
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultNetworkResponse {
    pub id: String,
    pub default_network: String,
    #[serde(default)]
    pub previous_network: Option<String>,
}

/// One network in a `network=all` balance query; failed networks carry `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiNetworkBalance {
    pub network: String,
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiNetworkBalanceResponse {
    pub wallet_id: String,
    pub chain: String,
    pub environment: String,
    pub balances: Vec<MultiNetworkBalance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiNetworkAssets {
    pub network: String,
    #[serde(default)]
    pub assets: Option<Vec<AssetInfo>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiNetworkAssetsResponse {
    pub wallet_id: String,
    pub chain: String,
    pub environment: String,
    pub network_assets: Vec<MultiNetworkAssets>,
}
