// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

#![doc = include_str!("../../README.md")]

use anyhow::Result;
use clap::Parser;
use log::info;
use walletgen_core::export::{self, WalletFiles};
use walletgen_core::wallet::{Generation, WalletGenerator};

mod cli;

use self::cli::{chain_name, Cli};

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();

    let generator = WalletGenerator::new(&args.email, &args.passphrase, &args.secret)?;

    info!(
        "Generating {} keys for chain '{}'...",
        args.count,
        chain_name(args.network)
    );
    let generation: Generation = generator.generate(args.count)?;

    let files: WalletFiles = export::wallet("./", args.network, &generation.keys)?;
    info!("Done.");

    println!(
        "Your keys are in: {} , {}",
        files.public_keys.display(),
        files.private_keys.display()
    );

    Ok(())
}
