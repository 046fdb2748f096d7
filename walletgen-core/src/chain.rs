// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Token hash chain anchored on the shared secret.
//!
//! `token[0] = SHA256(secret)` and `token[i] = SHA256(secret || token[i-1])`.
//! Each token depends only on the secret and its predecessor, so the chain
//! can be resumed from any previously produced token without recomputing
//! the prefix.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::hash;
use crate::secret::{Secret, SECRET_SIZE};

/// Size of a chain token, in bytes.
pub const TOKEN_SIZE: usize = 32;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Hex(#[from] crate::util::hex::Error),
    #[error("chain token must be {expected} bytes, got {found}")]
    InvalidLength { expected: usize, found: usize },
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ChainToken([u8; TOKEN_SIZE]);

impl ChainToken {
    /// Origin token: single-pass SHA-256 of the shared secret.
    pub fn first(secret: &Secret) -> Self {
        Self(hash::sha256(secret.as_bytes()))
    }

    /// Transition function: `SHA256(secret || prev)`.
    pub fn next(secret: &Secret, prev: &ChainToken) -> Self {
        let mut input: Vec<u8> = Vec::with_capacity(SECRET_SIZE + TOKEN_SIZE);
        input.extend_from_slice(secret.as_bytes());
        input.extend_from_slice(&prev.0);
        Self(hash::sha256(input))
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::util::hex::encode(self.0)
    }
}

impl fmt::Debug for ChainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainToken({})", self.to_hex())
    }
}

impl fmt::Display for ChainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ChainToken {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bytes: Vec<u8> = crate::util::hex::decode(token)?;
        let bytes: [u8; TOKEN_SIZE] =
            bytes.try_into().map_err(|b: Vec<u8>| Error::InvalidLength {
                expected: TOKEN_SIZE,
                found: b.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl Serialize for ChainToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ChainToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token: String = String::deserialize(deserializer)?;
        Self::from_str(&token).map_err(serde::de::Error::custom)
    }
}

/// Resumption point of a [`TokenChain`]: the last token produced and how
/// many tokens have been produced so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub last_token: ChainToken,
    pub produced: u64,
}

/// Lazy token sequence.
///
/// Only the last token is retained: memory is constant with respect to
/// chain length.
pub struct TokenChain<'a> {
    secret: &'a Secret,
    last: Option<ChainToken>,
    produced: u64,
}

impl<'a> TokenChain<'a> {
    pub fn new(secret: &'a Secret) -> Self {
        Self {
            secret,
            last: None,
            produced: 0,
        }
    }

    /// Restart a chain from a checkpoint, without recomputing the prefix.
    pub fn resume(secret: &'a Secret, checkpoint: Checkpoint) -> Self {
        Self {
            secret,
            last: Some(checkpoint.last_token),
            produced: checkpoint.produced,
        }
    }

    /// Number of tokens produced so far. The next token has this index.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    pub fn advance(&mut self) -> ChainToken {
        let token: ChainToken = match &self.last {
            None => ChainToken::first(self.secret),
            Some(prev) => ChainToken::next(self.secret, prev),
        };
        self.last = Some(token);
        self.produced += 1;
        token
    }

    /// `None` until the first token has been produced.
    pub fn checkpoint(&self) -> Option<Checkpoint> {
        self.last.map(|last_token| Checkpoint {
            last_token,
            produced: self.produced,
        })
    }
}

impl Iterator for TokenChain<'_> {
    type Item = ChainToken;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}
