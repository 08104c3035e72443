use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum X402Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// Body of `POST /v1/x402/fetch`.
///
/// When the target answers 402, the daemon signs a payment (subject to
/// domain and spending policies) and repeats the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct X402FetchRequest {
    /// Target URL; the daemon requires HTTPS.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<X402Method>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl X402FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
            headers: None,
            body: None,
        }
    }

    pub fn with_method(mut self, method: X402Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Payment the daemon made to get the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X402Payment {
    pub amount: String,
    pub asset: String,
    pub network: String,
    pub pay_to: String,
    pub tx_id: String,
}

/// The external server's response, plus payment details when one was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct X402FetchResponse {
    pub status: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<X402Payment>,
}
