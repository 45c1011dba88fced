//! SHA-256 derived lookup keys.
//!
//! The content hash covers the random payload only. Prefix and checksum are
//! excluded so that re-prefixing or checksum corruption never changes the
//! derived key a store was indexed under.

use data_encoding::HEXLOWER;
use sha2::{Digest, Sha256};

use crate::token::RandomToken;

impl RandomToken {
    /// SHA-256 digest of the random payload, as lowercase hex.
    ///
    /// Safe to persist or log in place of the plaintext token.
    pub fn content_hash(&self) -> String {
        HEXLOWER.encode(&self.content_hash_bytes())
    }

    /// SHA-256 digest of the random payload, as raw bytes.
    pub fn content_hash_bytes(&self) -> [u8; 32] {
        Sha256::digest(self.random().as_bytes()).into()
    }

    /// Lookup key of the form `token:{prefix}:{content_hash}`.
    ///
    /// Lets callers store metadata about a token in a cache or database
    /// without ever persisting the plaintext secret.
    pub fn cache_key(&self) -> String {
        format!("token:{}:{}", self.prefix(), self.content_hash())
    }
}
