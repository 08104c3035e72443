use reqwest::Method;

use super::WaiaasClient;
use crate::error::WaiaasError;
use crate::models::{
    PendingTransactionList, SendTokenRequest, TransactionDetail, TransactionList,
    TransactionResponse,
};

/// Page size used by `list_transactions` when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

impl WaiaasClient {
    /// `POST /v1/transactions/send`
    ///
    /// The daemon may hold the transaction for approval; `status` tells.
    pub async fn send_token(
        &self,
        request: &SendTokenRequest,
    ) -> Result<TransactionResponse, WaiaasError> {
        self.request(
            Method::POST,
            "/v1/transactions/send",
            &[],
            Some(serde_json::to_value(request)?),
        )
        .await
    }

    /// `GET /v1/transactions/{id}`
    pub async fn get_transaction(&self, tx_id: &str) -> Result<TransactionDetail, WaiaasError> {
        let path = format!("/v1/transactions/{}", tx_id);
        self.request(Method::GET, &path, &[], None).await
    }

    /// `GET /v1/transactions`, cursor-paginated (`limit` 1..=100 on the daemon side).
    pub async fn list_transactions(
        &self,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<TransactionList, WaiaasError> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
            query.push(("cursor", cursor.to_string()));
        }
        self.request(Method::GET, "/v1/transactions", &query, None)
            .await
    }

    /// `GET /v1/transactions/pending`
    pub async fn list_pending_transactions(&self) -> Result<PendingTransactionList, WaiaasError> {
        self.request(Method::GET, "/v1/transactions/pending", &[], None)
            .await
    }
}
