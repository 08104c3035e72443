//! `waiaas send|tx|txs|pending`

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde_json::{Map, Value};
use waiaas_core::models::{SendTokenRequest, TokenInfo, TransactionType};
use waiaas_core::WaiaasClient;

use super::print_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TxKind {
    Transfer,
    TokenTransfer,
    ContractCall,
    Approve,
    Batch,
}

impl From<TxKind> for TransactionType {
    fn from(kind: TxKind) -> Self {
        match kind {
            TxKind::Transfer => TransactionType::Transfer,
            TxKind::TokenTransfer => TransactionType::TokenTransfer,
            TxKind::ContractCall => TransactionType::ContractCall,
            TxKind::Approve => TransactionType::Approve,
            TxKind::Batch => TransactionType::Batch,
        }
    }
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Transaction kind; omitted means a plain native transfer.
    #[arg(long = "type", value_enum)]
    pub kind: Option<TxKind>,
    /// Recipient (or contract) address.
    #[arg(long)]
    pub to: Option<String>,
    /// Amount in base units (lamports, wei).
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub memo: Option<String>,
    #[arg(long)]
    pub network: Option<String>,
    /// Token mint or contract address (token-transfer, approve).
    #[arg(long)]
    pub token_address: Option<String>,
    #[arg(long)]
    pub token_decimals: Option<u32>,
    #[arg(long)]
    pub token_symbol: Option<String>,
    /// Hex calldata (contract-call).
    #[arg(long)]
    pub calldata: Option<String>,
    /// Native value attached to a contract call.
    #[arg(long)]
    pub value: Option<String>,
    /// Spender address (approve).
    #[arg(long)]
    pub spender: Option<String>,
    /// Instruction objects as a JSON array (batch).
    #[arg(long)]
    pub instructions: Option<String>,
}

impl SendArgs {
    /// Assemble the request body, checking the fields each kind needs.
    pub fn to_request(&self) -> Result<SendTokenRequest> {
        let mut req = match self.kind {
            None | Some(TxKind::Transfer) => {
                SendTokenRequest::transfer(self.require_to()?, self.require_amount()?)
            }
            Some(TxKind::TokenTransfer) => SendTokenRequest::token_transfer(
                self.require_to()?,
                self.require_amount()?,
                self.token()?,
            ),
            Some(TxKind::ContractCall) => {
                let calldata = self
                    .calldata
                    .as_deref()
                    .context("--calldata is required for contract-call")?;
                let mut req = SendTokenRequest::contract_call(self.require_to()?, calldata);
                if let Some(value) = &self.value {
                    req = req.with_value(value.as_str());
                }
                req
            }
            Some(TxKind::Approve) => {
                let spender = self
                    .spender
                    .as_deref()
                    .context("--spender is required for approve")?;
                SendTokenRequest::approve(spender, self.token()?, self.require_amount()?)
            }
            Some(TxKind::Batch) => {
                let raw = self
                    .instructions
                    .as_deref()
                    .context("--instructions is required for batch")?;
                let instructions: Vec<Map<String, Value>> =
                    serde_json::from_str(raw).context("--instructions must be a JSON array of objects")?;
                if instructions.is_empty() {
                    bail!("--instructions must not be empty");
                }
                SendTokenRequest::batch(instructions)
            }
        };
        if self.kind == Some(TxKind::Transfer) {
            req = req.with_type(TransactionType::Transfer);
        }
        if let Some(memo) = &self.memo {
            req = req.with_memo(memo.as_str());
        }
        if let Some(network) = &self.network {
            req = req.with_network(network.as_str());
        }
        Ok(req)
    }

    fn require_to(&self) -> Result<&str> {
        self.to.as_deref().context("--to is required")
    }

    fn require_amount(&self) -> Result<&str> {
        self.amount.as_deref().context("--amount is required")
    }

    fn token(&self) -> Result<TokenInfo> {
        match (&self.token_address, self.token_decimals, &self.token_symbol) {
            (Some(address), Some(decimals), Some(symbol)) => Ok(TokenInfo {
                address: address.clone(),
                decimals,
                symbol: symbol.clone(),
            }),
            _ => bail!("--token-address, --token-decimals and --token-symbol are required"),
        }
    }
}

pub async fn run_send(client: &WaiaasClient, args: &SendArgs) -> Result<()> {
    let req = args.to_request()?;
    let resp = client.send_token(&req).await?;
    tracing::info!(id = %resp.id, status = %resp.status, "transaction submitted");
    print_json(&resp)
}

pub async fn run_tx(client: &WaiaasClient, id: &str) -> Result<()> {
    print_json(&client.get_transaction(id).await?)
}

pub async fn run_txs(client: &WaiaasClient, limit: u32, cursor: Option<&str>) -> Result<()> {
    print_json(&client.list_transactions(limit, cursor).await?)
}

pub async fn run_pending(client: &WaiaasClient) -> Result<()> {
    print_json(&client.list_pending_transactions().await?)
}
