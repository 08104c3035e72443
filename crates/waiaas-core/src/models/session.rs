use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Response of `PUT /v1/sessions/{id}/renew`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRenewResponse {
    pub id: String,
    /// Replacement session token.
    pub token: String,
    pub expires_at: i64,
    pub renewal_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectSession {
    pub id: String,
    pub expires_at: i64,
    /// `api` or `mcp`.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectWallet {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub environment: String,
    #[serde(default)]
    pub default_network: Option<String>,
    pub address: String,
    pub is_default: bool,
    #[serde(default)]
    pub available_networks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectPolicy {
    #[serde(rename = "type")]
    pub policy_type: String,
    #[serde(default)]
    pub rules: Map<String, Value>,
    pub priority: i64,
    #[serde(default)]
    pub network: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaemonInfo {
    pub version: String,
    pub base_url: String,
}

/// Self-discovery response of `GET /v1/connect-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectInfo {
    pub session: ConnectSession,
    pub wallets: Vec<ConnectWallet>,
    /// Policies keyed by wallet id.
    #[serde(default)]
    pub policies: BTreeMap<String, Vec<ConnectPolicy>>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub daemon: DaemonInfo,
    /// Ready-made prompt describing the session for an AI agent.
    #[serde(default)]
    pub prompt: String,
}

impl ConnectInfo {
    pub fn default_wallet(&self) -> Option<&ConnectWallet> {
        self.wallets.iter().find(|w| w.is_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renew_response() {
        let r: SessionRenewResponse = serde_json::from_value(json!({
            "id": "s-1",
            "token": "wai_sess_new",
            "expiresAt": 1700003600,
            "renewalCount": 2
        }))
        .unwrap();
        assert_eq!(r.token, "wai_sess_new");
        assert_eq!(r.renewal_count, 2);
    }

    #[test]
    fn connect_info_with_policies() {
        let info: ConnectInfo = serde_json::from_value(json!({
            "session": {"id": "s-1", "expiresAt": 1, "source": "api"},
            "wallets": [{
                "id": "w-1", "name": "main", "chain": "solana", "environment": "testnet",
                "defaultNetwork": "devnet", "address": "addr", "isDefault": true,
                "availableNetworks": ["devnet", "testnet"]
            }],
            "policies": {"w-1": [{"type": "SPENDING_LIMIT", "rules": {"instant_max": "100"}, "priority": 0, "network": null}]},
            "capabilities": ["transfer", "sign"],
            "daemon": {"version": "1.2.3", "baseUrl": "http://localhost:3100"},
            "prompt": "You can use wallet w-1"
        }))
        .unwrap();
        assert_eq!(info.default_wallet().map(|w| w.id.as_str()), Some("w-1"));
        assert_eq!(info.policies["w-1"][0].policy_type, "SPENDING_LIMIT");
        assert_eq!(info.daemon.base_url, "http://localhost:3100");
    }
}
