// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Base58Check P2PKH address encoding.

use bitcoin::secp256k1::PublicKey;
use bitcoin::util::base58;
use bitcoin::Network;

use crate::crypto::hash;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed public key ({0} bytes)")]
    InvalidPublicKey(usize),
}

/// Address version byte: 0x00 on prodnet, 0x6F on testnet.
pub fn version_byte(network: Network) -> u8 {
    match network {
        Network::Bitcoin => 0x00,
        _ => 0x6f,
    }
}

fn encode_hash160(public_key: &[u8], network: Network) -> String {
    let mut payload: Vec<u8> = Vec::with_capacity(21);
    payload.push(version_byte(network));
    payload.extend_from_slice(&hash::hash160(public_key));
    base58::check_encode_slice(&payload)
}

/// Encode serialized public key bytes as a P2PKH address.
///
/// Accepts an uncompressed (65 bytes, `0x04` prefix) or compressed
/// (33 bytes, `0x02`/`0x03` prefix) SEC serialization.
pub fn encode<T>(public_key: T, network: Network) -> Result<String, Error>
where
    T: AsRef<[u8]>,
{
    let public_key: &[u8] = public_key.as_ref();
    match (public_key.len(), public_key.first()) {
        (65, Some(0x04)) | (33, Some(0x02 | 0x03)) => Ok(encode_hash160(public_key, network)),
        _ => Err(Error::InvalidPublicKey(public_key.len())),
    }
}

/// P2PKH address of a public key, using the uncompressed serialization
/// (the only form the e-wallet service ever used).
pub fn p2pkh(public_key: &PublicKey, network: Network) -> String {
    encode_hash160(&public_key.serialize_uncompressed(), network)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::util::hex;

    const PUBKEY: &str = "04ad73164eb5d0609373d83d12ab00108e100ca8e7ce827493eb5c28434134ea527095d51f514e46cef9fadf6686264b0d4b9c47835bfe4e7f0262d3cba61b0bfa";

    #[test]
    fn test_encode() {
        let public_key: Vec<u8> = hex::decode(PUBKEY).unwrap();
        assert_eq!(
            encode(&public_key, Network::Bitcoin).unwrap(),
            "1MtqZZJ6PM92fzboCKoga3j4J4SLJ6j6uU"
        );
        assert_eq!(
            encode(&public_key, Network::Testnet).unwrap(),
            "n2QnrcP5CNaHT75Qutn4PxwPA433GoZada"
        );
    }

    #[test]
    fn test_p2pkh() {
        let public_key = PublicKey::from_slice(&hex::decode(PUBKEY).unwrap()).unwrap();
        assert_eq!(
            p2pkh(&public_key, Network::Testnet),
            "n2QnrcP5CNaHT75Qutn4PxwPA433GoZada"
        );
    }

    #[test]
    fn test_malformed_public_key() {
        assert_eq!(
            encode([0u8; 64], Network::Bitcoin).unwrap_err(),
            Error::InvalidPublicKey(64)
        );
        // Right length, wrong prefix
        assert_eq!(
            encode([0x05; 65], Network::Bitcoin).unwrap_err(),
            Error::InvalidPublicKey(65)
        );
    }

    #[test]
    fn test_version_byte() {
        assert_eq!(version_byte(Network::Bitcoin), 0x00);
        assert_eq!(version_byte(Network::Testnet), 0x6f);
    }
}
