//! Request and response records of the daemon REST API.
//!
//! Field names are snake_case here and camelCase on the wire.

mod session;
mod transaction;
mod utils;
mod wallet;
mod walletconnect;
mod x402;

pub use session::{ConnectInfo, ConnectPolicy, ConnectSession, ConnectWallet, DaemonInfo, SessionRenewResponse};
pub use transaction::{
    PendingTransactionList, SendTokenRequest, TokenInfo, TransactionDetail, TransactionList,
    TransactionResponse, TransactionType,
};
pub use utils::{
    EncodeCalldataRequest, EncodeCalldataResponse, PolicyResult, SignTransactionOperation,
    SignTransactionRequest, SignTransactionResponse,
};
pub use wallet::{
    AssetInfo, MultiNetworkAssets, MultiNetworkAssetsResponse, MultiNetworkBalance,
    MultiNetworkBalanceResponse, SetDefaultNetworkRequest, SetDefaultNetworkResponse,
    WalletAddress, WalletAssets, WalletBalance, WalletInfo, WalletNetworkInfo,
    WalletNetworksResponse,
};
pub use walletconnect::{WcDisconnectResponse, WcPairingResponse, WcSessionInfo};
pub use x402::{X402FetchRequest, X402FetchResponse, X402Method, X402Payment};
