// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

#![doc = include_str!("../README.md")]

pub extern crate bitcoin;
pub use bitcoin::hashes;
pub use bitcoin::secp256k1;

use bitcoin::secp256k1::{All, Secp256k1};
use once_cell::sync::Lazy;

pub mod address;
pub mod chain;
pub mod crypto;
pub mod export;
pub mod keys;
pub mod passphrase;
pub mod secret;
pub mod util;
pub mod wallet;

pub use self::chain::{ChainToken, Checkpoint, TokenChain};
pub use self::keys::KeyPair;
pub use self::passphrase::PassphraseHash;
pub use self::secret::Secret;
pub use self::wallet::{Generation, WalletGenerator};

pub static SECP256K1: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);
