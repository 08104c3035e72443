use serde::{Deserialize, Serialize};

/// Response of `POST /v1/wallet/wc/pair`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcPairingResponse {
    /// `wc:` URI for the owner's external wallet.
    pub uri: String,
    /// `data:image/png;base64,...` QR code of `uri`.
    pub qr_code: String,
    pub expires_at: i64,
}

/// Active WalletConnect session (`GET /v1/wallet/wc/session`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcSessionInfo {
    pub wallet_id: String,
    pub topic: String,
    #[serde(default)]
    pub peer_name: Option<String>,
    #[serde(default)]
    pub peer_url: Option<String>,
    pub chain_id: String,
    pub owner_address: String,
    pub expiry: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcDisconnectResponse {
    pub disconnected: bool,
}
