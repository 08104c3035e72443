use reqwest::Method;

use super::WaiaasClient;
use crate::error::WaiaasError;
use crate::models::{WcDisconnectResponse, WcPairingResponse, WcSessionInfo};

impl WaiaasClient {
    /// `POST /v1/wallet/wc/pair`: start pairing; show the URI or QR code to the owner.
    pub async fn wc_connect(&self) -> Result<WcPairingResponse, WaiaasError> {
        self.request(Method::POST, "/v1/wallet/wc/pair", &[], None)
            .await
    }

    /// `GET /v1/wallet/wc/session`; the daemon answers with an error when no session is active.
    pub async fn wc_status(&self) -> Result<WcSessionInfo, WaiaasError> {
        self.request(Method::GET, "/v1/wallet/wc/session", &[], None)
            .await
    }

    /// `DELETE /v1/wallet/wc/session`; a new pairing is needed afterwards.
    pub async fn wc_disconnect(&self) -> Result<WcDisconnectResponse, WaiaasError> {
        self.request(Method::DELETE, "/v1/wallet/wc/session", &[], None)
            .await
    }
}
