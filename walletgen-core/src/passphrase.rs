// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;

use crate::crypto::hash;

/// SHA-256 digest of `email || passphrase`.
///
/// The service hashes the raw UTF-8 concatenation in a single pass: no
/// delimiter, no salt, no iteration. The missing delimiter means
/// `("ab", "c")` and `("a", "bc")` hash to the same value; existing
/// wallets depend on this exact construction, so it is reproduced as-is.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct PassphraseHash([u8; 32]);

impl fmt::Debug for PassphraseHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl PassphraseHash {
    pub fn new<S, P>(email: S, passphrase: P) -> Self
    where
        S: AsRef<str>,
        P: AsRef<str>,
    {
        let email: &[u8] = email.as_ref().as_bytes();
        let passphrase: &[u8] = passphrase.as_ref().as_bytes();
        let mut input: Vec<u8> = Vec::with_capacity(email.len() + passphrase.len());
        input.extend_from_slice(email);
        input.extend_from_slice(passphrase);
        Self(hash::sha256(input))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::util::hex;

    #[test]
    fn test_passphrase_hash() {
        let hash = PassphraseHash::new("a@b.com", "pw");
        assert_eq!(
            hex::encode(hash.as_bytes()),
            "d261b3785328f9a6c134c0fee0f22946b800d7f587b470cd8585431feaefd778"
        );
    }

    #[test]
    fn test_no_delimiter_collision() {
        // Known weakness of the upstream construction, kept for
        // compatibility with already-derived wallets.
        assert_eq!(
            PassphraseHash::new("ab", "c"),
            PassphraseHash::new("a", "bc")
        );
    }

    #[test]
    fn test_debug_redacted() {
        assert_eq!(
            format!("{:?}", PassphraseHash::new("a@b.com", "pw")),
            "<sensitive>"
        );
    }
}
