//! CLI command handlers, grouped by daemon endpoint area.

mod session;
mod transactions;
mod utils;
mod wallet;
mod walletconnect;
mod x402;

use anyhow::Result;
use serde::Serialize;

pub use session::{run_connect_info, run_renew};
pub use transactions::{run_pending, run_send, run_tx, run_txs, SendArgs};
pub use utils::{parse_encode_input, run_encode, run_sign};
pub use wallet::{run_address, run_assets, run_balance, run_info, run_set_network};
pub use walletconnect::{run_wc_connect, run_wc_disconnect, run_wc_status};
pub use x402::{run_x402, X402Args};

/// Print a daemon response as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
