//! Constant-time comparison against a stored content hash.
//!
//! The typical deployment stores `content_hash()` instead of the plaintext
//! token and compares it against the hash of an incoming token. That value is
//! derived from the secret payload, so the comparison runs in constant time.
//! (The embedded checksum needs no such care: it is public and only detects
//! corruption.)

use data_encoding::HEXLOWER;
use subtle::ConstantTimeEq;

use crate::token::RandomToken;

impl RandomToken {
    /// Compare this token's content hash against a stored raw digest in
    /// constant time.
    pub fn matches_content_hash(&self, stored: &[u8; 32]) -> bool {
        self.content_hash_bytes().ct_eq(stored).into()
    }

    /// Compare this token's content hash against a stored lowercase-hex
    /// digest in constant time.
    ///
    /// Returns `false` if `stored` is not a valid 64-character hex digest.
    pub fn matches_content_hash_hex(&self, stored: &str) -> bool {
        let Ok(decoded) = HEXLOWER.decode(stored.as_bytes()) else {
            return false;
        };
        let Ok(stored) = <[u8; 32]>::try_from(decoded) else {
            return false;
        };

        self.matches_content_hash(&stored)
    }
}
