// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;

use bitcoin::secp256k1::{PublicKey, SecretKey};
use bitcoin::{Network, PrivateKey};

use crate::address;
use crate::chain::ChainToken;
use crate::crypto::hash;
use crate::passphrase::PassphraseHash;
use crate::SECP256K1;

/// A derived key pair and its position in the chain.
///
/// The network never enters derivation: it only selects the textual
/// encoding of the address and the WIF private key.
#[derive(Clone, Eq, PartialEq)]
pub struct KeyPair {
    index: u64,
    secret_key: SecretKey,
    public_key: PublicKey,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair {{ index: {}, .. }}", self.index)
    }
}

impl KeyPair {
    /// Derive the key pair for a chain token.
    ///
    /// Private scalar: `SHA256(passphrase_hash || token)`. A candidate
    /// that is zero or not below the curve order is re-hashed with
    /// SHA-256 until valid, so every index maps to exactly one key on
    /// both the client and the service side.
    pub fn derive(passphrase_hash: &PassphraseHash, token: &ChainToken, index: u64) -> Self {
        let mut input: Vec<u8> = Vec::with_capacity(64);
        input.extend_from_slice(passphrase_hash.as_bytes());
        input.extend_from_slice(token.as_bytes());
        let secret_key: SecretKey = valid_scalar(hash::sha256(input));
        let public_key: PublicKey = PublicKey::from_secret_key(&SECP256K1, &secret_key);
        Self {
            index,
            secret_key,
            public_key,
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn secret_key(&self) -> SecretKey {
        self.secret_key
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// Uncompressed SEC serialization (65 bytes, `0x04` prefix).
    pub fn public_key_bytes(&self) -> [u8; 65] {
        self.public_key.serialize_uncompressed()
    }

    pub fn address(&self, network: Network) -> String {
        address::p2pkh(&self.public_key, network)
    }

    /// WIF encoding of the private key, without compression suffix.
    pub fn to_wif(&self, network: Network) -> String {
        PrivateKey::new_uncompressed(self.secret_key, network).to_wif()
    }
}

fn valid_scalar(mut candidate: [u8; 32]) -> SecretKey {
    loop {
        match SecretKey::from_slice(&candidate) {
            Ok(secret_key) => return secret_key,
            // Zero or >= curve order
            Err(_) => candidate = hash::sha256(candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::util::hex;

    const TOKEN_0: &str = "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b";
    const TOKEN_1: &str = "3612c2a52a4f180409146f02f04155a34c2daa73ceb32b30dd73244b0ea29841";

    fn passphrase_hash() -> PassphraseHash {
        PassphraseHash::new("a@b.com", "pw")
    }

    #[test]
    fn test_derive() {
        let key = KeyPair::derive(
            &passphrase_hash(),
            &ChainToken::from_str(TOKEN_0).unwrap(),
            0,
        );
        assert_eq!(key.index(), 0);
        assert_eq!(
            hex::encode(key.secret_key().secret_bytes()),
            "0ac2ed98bce34844d68cb74c6939cc8f3ba0c5405d381eba346d55d1c4e68114"
        );
        assert_eq!(
            hex::encode(key.public_key_bytes()),
            "04ad73164eb5d0609373d83d12ab00108e100ca8e7ce827493eb5c28434134ea527095d51f514e46cef9fadf6686264b0d4b9c47835bfe4e7f0262d3cba61b0bfa"
        );

        let key = KeyPair::derive(
            &passphrase_hash(),
            &ChainToken::from_str(TOKEN_1).unwrap(),
            1,
        );
        assert_eq!(
            hex::encode(key.secret_key().secret_bytes()),
            "0f757ca90ce55e28eda2a6a0dad2be892e33b05a52b61f7faa87538f796afba9"
        );
    }

    #[test]
    fn test_address() {
        let key = KeyPair::derive(
            &passphrase_hash(),
            &ChainToken::from_str(TOKEN_0).unwrap(),
            0,
        );
        assert_eq!(
            key.address(Network::Bitcoin),
            "1MtqZZJ6PM92fzboCKoga3j4J4SLJ6j6uU"
        );
        assert_eq!(
            key.address(Network::Testnet),
            "n2QnrcP5CNaHT75Qutn4PxwPA433GoZada"
        );
    }

    #[test]
    fn test_to_wif() {
        let key = KeyPair::derive(
            &passphrase_hash(),
            &ChainToken::from_str(TOKEN_0).unwrap(),
            0,
        );
        assert_eq!(
            key.to_wif(Network::Bitcoin),
            "5Hu2U6bg8zb4LYH7mM1cwqHpq9YKcuSUXnkcMn9Te6mpZuLJVqu"
        );
        assert_eq!(
            key.to_wif(Network::Testnet),
            "91ff3qRDjDfCJbnQPguXpRqnUou2n4yfsjcZSQVxyqWsLxWjmUc"
        );
    }

    #[test]
    fn test_network_independent_scalar() {
        let key = KeyPair::derive(
            &passphrase_hash(),
            &ChainToken::from_str(TOKEN_0).unwrap(),
            0,
        );
        // Same scalar, different textual encodings
        let prodnet = PrivateKey::from_wif(&key.to_wif(Network::Bitcoin)).unwrap();
        let testnet = PrivateKey::from_wif(&key.to_wif(Network::Testnet)).unwrap();
        assert_eq!(prodnet.inner, testnet.inner);
        assert_eq!(prodnet.inner, key.secret_key());
    }

    #[test]
    fn test_out_of_range_candidate() {
        // >= curve order: one re-hash
        assert_eq!(
            hex::encode(valid_scalar([0xff; 32]).secret_bytes()),
            "af9613760f72635fbdb44a5a0a63c39f12af30f950a6ee5c971be188e89c4051"
        );
        // Zero: one re-hash
        assert_eq!(
            hex::encode(valid_scalar([0x00; 32]).secret_bytes()),
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }
}
