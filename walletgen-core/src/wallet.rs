// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

use crate::chain::{ChainToken, Checkpoint, TokenChain};
use crate::keys::KeyPair;
use crate::passphrase::PassphraseHash;
use crate::secret::{self, Secret};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Secret(#[from] secret::Error),
    #[error("key count must be greater than zero")]
    InvalidCount,
}

/// Keys produced by a generation run, plus the checkpoint needed to
/// continue the chain where this run stopped.
#[derive(Debug)]
pub struct Generation {
    pub keys: Vec<KeyPair>,
    pub checkpoint: Checkpoint,
}

/// Regenerates the key pool of an e-wallet account.
///
/// Holds the two values computed once at startup: the passphrase hash and
/// the decoded shared secret. Generation itself is strictly sequential,
/// since every chain token depends on its predecessor.
#[derive(Debug)]
pub struct WalletGenerator {
    passphrase_hash: PassphraseHash,
    secret: Secret,
}

impl WalletGenerator {
    pub fn new<S, P, H>(email: S, passphrase: P, secret: H) -> Result<Self, Error>
    where
        S: AsRef<str>,
        P: AsRef<str>,
        H: AsRef<str>,
    {
        Ok(Self {
            passphrase_hash: PassphraseHash::new(email, passphrase),
            secret: Secret::from_hex(secret)?,
        })
    }

    pub fn from_parts(passphrase_hash: PassphraseHash, secret: Secret) -> Self {
        Self {
            passphrase_hash,
            secret,
        }
    }

    /// Generate the first `count` keys of the pool, in chain order.
    pub fn generate(&self, count: u64) -> Result<Generation, Error> {
        self.run(TokenChain::new(&self.secret), count)
    }

    /// Generate `count` further keys, continuing from a checkpoint.
    ///
    /// The first key produced has index `checkpoint.produced`, exactly as
    /// if the whole prefix had been generated in one run.
    pub fn resume(&self, checkpoint: Checkpoint, count: u64) -> Result<Generation, Error> {
        self.run(TokenChain::resume(&self.secret, checkpoint), count)
    }

    fn run(&self, mut chain: TokenChain<'_>, count: u64) -> Result<Generation, Error> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        let mut keys: Vec<KeyPair> = Vec::with_capacity(count as usize);
        let mut last_token: ChainToken = chain.advance();
        keys.push(KeyPair::derive(
            &self.passphrase_hash,
            &last_token,
            chain.produced() - 1,
        ));
        while (keys.len() as u64) < count {
            last_token = chain.advance();
            keys.push(KeyPair::derive(
                &self.passphrase_hash,
                &last_token,
                chain.produced() - 1,
            ));
        }
        Ok(Generation {
            keys,
            checkpoint: Checkpoint {
                last_token,
                produced: chain.produced(),
            },
        })
    }
}
