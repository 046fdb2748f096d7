// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;
use core::str::FromStr;

use crate::util::hex;

/// Size of the shared secret, in bytes (128 hex characters).
pub const SECRET_SIZE: usize = 64;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Hex(#[from] hex::Error),
    #[error("secret must be {expected} hex characters, got {found}")]
    InvalidLength { expected: usize, found: usize },
}

/// Shared secret issued by the e-wallet service at signup.
///
/// Anchors the token hash chain: every chain token is a function of this
/// value and the previous token.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret([u8; SECRET_SIZE]);

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0 = [0u8; SECRET_SIZE];
    }
}

impl Secret {
    pub fn from_hex<S>(secret: S) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let secret: &str = secret.as_ref();
        let bytes: Vec<u8> = hex::decode(secret)?;
        let bytes: [u8; SECRET_SIZE] =
            bytes.try_into().map_err(|b: Vec<u8>| Error::InvalidLength {
                expected: SECRET_SIZE * 2,
                found: b.len() * 2,
            })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Secret {
    type Err = Error;

    fn from_str(secret: &str) -> Result<Self, Self::Err> {
        Self::from_hex(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let secret = Secret::from_hex("00".repeat(64)).unwrap();
        assert_eq!(secret.as_bytes(), &[0u8; SECRET_SIZE]);
        assert_eq!(secret.to_hex(), "00".repeat(64));

        let secret = Secret::from_hex("ab".repeat(64)).unwrap();
        assert_eq!(secret.as_bytes(), &[0xab; SECRET_SIZE]);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            Secret::from_hex("aabb").unwrap_err(),
            Error::InvalidLength {
                expected: 128,
                found: 4
            }
        );
    }

    #[test]
    fn test_invalid_char() {
        assert_eq!(
            Secret::from_hex("gg".repeat(64)).unwrap_err(),
            Error::Hex(hex::Error::InvalidHexCharacter { c: 'g', index: 0 })
        );
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(
            Secret::from_hex("abc").unwrap_err(),
            Error::Hex(hex::Error::OddLength)
        );
    }

    #[test]
    fn test_debug_redacted() {
        let secret = Secret::from_hex("00".repeat(64)).unwrap();
        assert_eq!(format!("{:?}", secret), "<sensitive>");
    }
}
