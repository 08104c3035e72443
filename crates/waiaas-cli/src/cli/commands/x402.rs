//! `waiaas x402 <url>`

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use waiaas_core::models::{X402FetchRequest, X402Method};
use waiaas_core::WaiaasClient;

use super::print_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl From<HttpMethod> for X402Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => X402Method::Get,
            HttpMethod::Post => X402Method::Post,
            HttpMethod::Put => X402Method::Put,
            HttpMethod::Delete => X402Method::Delete,
            HttpMethod::Patch => X402Method::Patch,
        }
    }
}

#[derive(Debug, Args)]
pub struct X402Args {
    /// HTTPS URL to fetch.
    pub url: String,
    #[arg(long, value_enum)]
    pub method: Option<HttpMethod>,
    /// Request header as `Name: value`; repeatable.
    #[arg(long = "header", short = 'H', value_name = "NAME: VALUE")]
    pub headers: Vec<String>,
    /// Request body sent as-is.
    #[arg(long)]
    pub body: Option<String>,
}

impl X402Args {
    pub fn to_request(&self) -> Result<X402FetchRequest> {
        let mut req = X402FetchRequest::get(self.url.as_str());
        if let Some(method) = self.method {
            req = req.with_method(method.into());
        }
        for raw in &self.headers {
            let (name, value) = raw
                .split_once(':')
                .with_context(|| format!("header {:?} is not `Name: value`", raw))?;
            req = req.with_header(name.trim(), value.trim());
        }
        if let Some(body) = &self.body {
            req = req.with_body(body.as_str());
        }
        Ok(req)
    }
}

pub async fn run_x402(client: &WaiaasClient, args: &X402Args) -> Result<()> {
    let req = args.to_request()?;
    print_json(&client.x402_fetch(&req).await?)
}
