// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

use clap::Parser;
use walletgen_core::bitcoin::Network;

#[derive(Debug, Parser)]
#[command(name = "walletgen")]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Target chain: prodnet or testnet (case-insensitive)
    #[arg(value_parser = parse_network)]
    pub network: Network,
    /// Account email
    pub email: String,
    /// Wallet passphrase
    pub passphrase: String,
    /// Shared secret (128 hex characters)
    pub secret: String,
    /// Number of keys to generate
    #[arg(default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,
}

fn parse_network(network: &str) -> Result<Network, String> {
    match network.to_lowercase().as_str() {
        "prodnet" => Ok(Network::Bitcoin),
        "testnet" => Ok(Network::Testnet),
        _ => Err(format!(
            "unknown network '{network}' (expected prodnet or testnet)"
        )),
    }
}

pub fn chain_name(network: Network) -> &'static str {
    match network {
        Network::Bitcoin => "prodnet",
        _ => "testnet",
    }
}
