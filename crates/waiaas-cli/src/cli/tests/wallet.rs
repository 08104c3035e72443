//! Tests for address, balance, assets, info, set-network, tx, txs, pending.

use super::{parse, parse_cli};
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_address_and_info() {
    assert!(matches!(parse(&["waiaas", "address"]), CliCommand::Address));
    assert!(matches!(parse(&["waiaas", "info"]), CliCommand::Info));
}

#[test]
fn cli_parse_balance_default() {
    match parse(&["waiaas", "balance"]) {
        CliCommand::Balance { network, all } => {
            assert!(network.is_none());
            assert!(!all);
        }
        _ => panic!("expected Balance"),
    }
}

#[test]
fn cli_parse_balance_network() {
    match parse(&["waiaas", "balance", "--network", "polygon-amoy"]) {
        CliCommand::Balance { network, all } => {
            assert_eq!(network.as_deref(), Some("polygon-amoy"));
            assert!(!all);
        }
        _ => panic!("expected Balance"),
    }
}

#[test]
fn cli_parse_assets_all() {
    match parse(&["waiaas", "assets", "--all"]) {
        CliCommand::Assets { network, all } => {
            assert!(network.is_none());
            assert!(all);
        }
        _ => panic!("expected Assets"),
    }
}

#[test]
fn cli_network_conflicts_with_all() {
    let res = Cli::try_parse_from(["waiaas", "balance", "--all", "--network", "devnet"]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_set_network() {
    match parse(&["waiaas", "set-network", "ethereum-sepolia"]) {
        CliCommand::SetNetwork { network } => assert_eq!(network, "ethereum-sepolia"),
        _ => panic!("expected SetNetwork"),
    }
}

#[test]
fn cli_parse_tx() {
    match parse(&["waiaas", "tx", "tx-123"]) {
        CliCommand::Tx { id } => assert_eq!(id, "tx-123"),
        _ => panic!("expected Tx"),
    }
}

#[test]
fn cli_parse_txs_defaults() {
    match parse(&["waiaas", "txs"]) {
        CliCommand::Txs { limit, cursor } => {
            assert_eq!(limit, 20);
            assert!(cursor.is_none());
        }
        _ => panic!("expected Txs"),
    }
}

#[test]
fn cli_parse_txs_page() {
    match parse(&["waiaas", "txs", "--limit", "5", "--cursor", "tx-9"]) {
        CliCommand::Txs { limit, cursor } => {
            assert_eq!(limit, 5);
            assert_eq!(cursor.as_deref(), Some("tx-9"));
        }
        _ => panic!("expected Txs"),
    }
}

#[test]
fn cli_parse_pending() {
    let cli = parse_cli(&["waiaas", "pending"]);
    assert!(matches!(cli.command, CliCommand::Pending));
}
