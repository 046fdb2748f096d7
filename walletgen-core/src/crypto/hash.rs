// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

use bitcoin::hashes::hash160::Hash as Hash160;
use bitcoin::hashes::sha256::Hash as Sha256Hash;
use bitcoin::hashes::Hash;

/// Single-pass SHA-256.
///
/// The key pool derivation uses a single pass everywhere, never the
/// double SHA-256 used for block hashing.
pub fn sha256<T>(value: T) -> [u8; 32]
where
    T: AsRef<[u8]>,
{
    Sha256Hash::hash(value.as_ref()).into_inner()
}

/// RIPEMD160(SHA256(value))
pub fn hash160<T>(value: T) -> [u8; 20]
where
    T: AsRef<[u8]>,
{
    Hash160::hash(value.as_ref()).into_inner()
}
