use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Transaction kinds accepted by `POST /v1/transactions/send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Transfer,
    TokenTransfer,
    ContractCall,
    Approve,
    Batch,
}

/// Token identification for TOKEN_TRANSFER and APPROVE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    pub decimals: u32,
    pub symbol: String,
}

/// Body of `POST /v1/transactions/send`.
///
/// Unset fields are left out of the JSON body. Use the constructors for the
/// five transaction kinds, then the `with_*` methods for optional fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Amount in base units (lamports, wei).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenInfo>,
    // CONTRACT_CALL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calldata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Map<String, Value>>>,
    // APPROVE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spender: Option<String>,
    // BATCH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl SendTokenRequest {
    /// Legacy native transfer; the daemon treats a missing type as TRANSFER.
    pub fn transfer(to: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    pub fn token_transfer(to: impl Into<String>, amount: impl Into<String>, token: TokenInfo) -> Self {
        Self {
            tx_type: Some(TransactionType::TokenTransfer),
            token: Some(token),
            ..Self::transfer(to, amount)
        }
    }

    pub fn contract_call(to: impl Into<String>, calldata: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            tx_type: Some(TransactionType::ContractCall),
            calldata: Some(calldata.into()),
            ..Self::default()
        }
    }

    pub fn approve(spender: impl Into<String>, token: TokenInfo, amount: impl Into<String>) -> Self {
        Self {
            tx_type: Some(TransactionType::Approve),
            spender: Some(spender.into()),
            token: Some(token),
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    pub fn batch(instructions: Vec<Map<String, Value>>) -> Self {
        Self {
            tx_type: Some(TransactionType::Batch),
            instructions: Some(instructions),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, tx_type: TransactionType) -> Self {
        self.tx_type = Some(tx_type);
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    /// Native value attached to a CONTRACT_CALL.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Response of `POST /v1/transactions/send` (201).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub id: String,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub status: String,
    #[serde(default)]
    pub tier: Option<String>,
    pub chain: String,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// One page of `GET /v1/transactions`; `cursor` feeds the next call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionList {
    pub items: Vec<TransactionDetail>,
    #[serde(default)]
    pub cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransactionList {
    pub items: Vec<TransactionDetail>,
}
