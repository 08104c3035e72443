use reqwest::Method;

use super::WaiaasClient;
use crate::error::WaiaasError;
use crate::models::{ConnectInfo, SessionRenewResponse};

impl WaiaasClient {
    /// `PUT /v1/sessions/{id}/renew`; the returned token replaces the client's.
    pub async fn renew_session(
        &self,
        session_id: &str,
    ) -> Result<SessionRenewResponse, WaiaasError> {
        let path = format!("/v1/sessions/{}/renew", session_id);
        let renewed: SessionRenewResponse = self.request(Method::PUT, &path, &[], None).await?;
        self.set_session_token(&renewed.token);
        tracing::info!(
            session_id = %renewed.id,
            renewal_count = renewed.renewal_count,
            "session renewed"
        );
        Ok(renewed)
    }

    /// `GET /v1/connect-info`: wallets, policies and capabilities of this session.
    pub async fn get_connect_info(&self) -> Result<ConnectInfo, WaiaasError> {
        self.request(Method::GET, "/v1/connect-info", &[], None)
            .await
    }
}
