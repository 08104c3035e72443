use reqwest::Method;

use super::WaiaasClient;
use crate::error::WaiaasError;
use crate::models::{X402FetchRequest, X402FetchResponse};

impl WaiaasClient {
    /// `POST /v1/x402/fetch`: fetch a URL, paying automatically on HTTP 402.
    pub async fn x402_fetch(
        &self,
        request: &X402FetchRequest,
    ) -> Result<X402FetchResponse, WaiaasError> {
        let body = serde_json::to_value(request)?;
        let resp: X402FetchResponse = self
            .request(Method::POST, "/v1/x402/fetch", &[], Some(body))
            .await?;
        if let Some(payment) = &resp.payment {
            tracing::info!(
                url = %request.url,
                amount = %payment.amount,
                asset = %payment.asset,
                network = %payment.network,
                "x402 payment made"
            );
        }
        Ok(resp)
    }
}
