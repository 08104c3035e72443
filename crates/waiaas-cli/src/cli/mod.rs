//! CLI for the WAIaaS wallet daemon.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use waiaas_core::config::{self, ClientConfig};
use waiaas_core::WaiaasClient;

use commands::{
    run_address, run_assets, run_balance, run_connect_info, run_encode, run_info, run_pending,
    run_renew, run_send, run_set_network, run_sign, run_tx, run_txs, run_wc_connect,
    run_wc_disconnect, run_wc_status, run_x402, SendArgs, X402Args,
};

/// Top-level CLI for the WAIaaS wallet daemon.
#[derive(Debug, Parser)]
#[command(name = "waiaas")]
#[command(about = "WAIaaS: talk to a wallet daemon from the command line", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for values from `~/.config/waiaas/config.toml`.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Daemon base URL.
    #[arg(long, global = true, env = "WAIAAS_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Session token (wai_sess_...).
    #[arg(
        long,
        global = true,
        env = "WAIAAS_SESSION_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Retries after the first attempt for transient daemon errors.
    #[arg(long, global = true, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the session wallet's address.
    Address,

    /// Show the native balance.
    Balance {
        /// Network to query instead of the wallet default.
        #[arg(long, conflicts_with = "all")]
        network: Option<String>,
        /// Query every network of the wallet's environment.
        #[arg(long)]
        all: bool,
    },

    /// List token assets held by the wallet.
    Assets {
        #[arg(long, conflicts_with = "all")]
        network: Option<String>,
        #[arg(long)]
        all: bool,
    },

    /// Show wallet address, environment and available networks.
    Info,

    /// Change the wallet's default network.
    SetNetwork {
        network: String,
    },

    /// Send a transaction (transfer, token transfer, contract call, approve, batch).
    Send(SendArgs),

    /// Show one transaction.
    Tx {
        /// Transaction ID.
        id: String,
    },

    /// List transactions, newest first.
    Txs {
        #[arg(long, default_value_t = waiaas_core::client::DEFAULT_PAGE_SIZE)]
        limit: u32,
        /// Cursor from the previous page.
        #[arg(long)]
        cursor: Option<String>,
    },

    /// List transactions waiting for approval or delay.
    Pending,

    /// Renew the session and print the new token.
    Renew {
        /// Session ID.
        session_id: String,
    },

    /// Show wallets, policies and capabilities of this session.
    ConnectInfo,

    /// ABI-encode an EVM function call.
    Encode {
        /// ABI fragment array as JSON.
        #[arg(long)]
        abi: String,
        /// Function name to encode.
        #[arg(long = "function")]
        function_name: String,
        /// Arguments as a JSON array.
        #[arg(long, default_value = "[]")]
        args: String,
    },

    /// Sign an unsigned transaction without broadcasting it.
    Sign {
        /// Base64 (Solana) or hex (EVM) transaction.
        transaction: String,
        #[arg(long)]
        chain: Option<String>,
        #[arg(long)]
        network: Option<String>,
    },

    /// Fetch a URL, paying with x402 when it answers 402.
    X402(X402Args),

    /// Start WalletConnect pairing with the owner's wallet.
    WcConnect,

    /// Show the active WalletConnect session.
    WcStatus,

    /// Disconnect the WalletConnect session.
    WcDisconnect,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let client = build_client(&cfg, &cli.global)?;

        match cli.command {
            CliCommand::Address => run_address(&client).await?,
            CliCommand::Balance { network, all } => {
                run_balance(&client, network.as_deref(), all).await?
            }
            CliCommand::Assets { network, all } => {
                run_assets(&client, network.as_deref(), all).await?
            }
            CliCommand::Info => run_info(&client).await?,
            CliCommand::SetNetwork { network } => run_set_network(&client, &network).await?,
            CliCommand::Send(args) => run_send(&client, &args).await?,
            CliCommand::Tx { id } => run_tx(&client, &id).await?,
            CliCommand::Txs { limit, cursor } => {
                run_txs(&client, limit, cursor.as_deref()).await?
            }
            CliCommand::Pending => run_pending(&client).await?,
            CliCommand::Renew { session_id } => run_renew(&client, &session_id).await?,
            CliCommand::ConnectInfo => run_connect_info(&client).await?,
            CliCommand::Encode {
                abi,
                function_name,
                args,
            } => run_encode(&client, &abi, &function_name, &args).await?,
            CliCommand::Sign {
                transaction,
                chain,
                network,
            } => run_sign(&client, &transaction, chain.as_deref(), network.as_deref()).await?,
            CliCommand::X402(args) => run_x402(&client, &args).await?,
            CliCommand::WcConnect => run_wc_connect(&client).await?,
            CliCommand::WcStatus => run_wc_status(&client).await?,
            CliCommand::WcDisconnect => run_wc_disconnect(&client).await?,
        }

        Ok(())
    }
}

/// Merge command-line overrides over the config file and build the client.
pub fn build_client(cfg: &ClientConfig, global: &GlobalArgs) -> Result<WaiaasClient> {
    let base_url = global.base_url.as_deref().unwrap_or(&cfg.base_url);
    let token = global
        .token
        .as_deref()
        .or(cfg.session_token.as_deref())
        .context("no session token: pass --token, set WAIAAS_SESSION_TOKEN, or add session_token to the config file")?;
    let mut policy = cfg.retry_policy()?;
    if let Some(n) = global.max_retries {
        policy = policy.with_max_retries(n);
    }
    let timeout = Duration::from_secs(global.timeout.unwrap_or(cfg.timeout_secs));
    let client = WaiaasClient::builder(base_url, token)
        .retry_policy(policy)
        .timeout(timeout)
        .build()
        .with_context(|| format!("invalid daemon URL {}", base_url))?;
    Ok(client)
}

#[cfg(test)]
mod tests;
