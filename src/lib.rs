//! Self-describing random tokens with an embedded checksum.
//!
//! This crate provides functionality for:
//! - Generating opaque identifiers (API keys, session tokens) from the OS
//!   secure random source
//! - Parsing and structurally validating tokens before any storage lookup
//! - Deriving a SHA-256 lookup key so the plaintext secret is never persisted
//!
//! # Token Format
//!
//! Tokens follow the format: `{prefix}_{random}{checksum}`
//!
//! Example: `sk_ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu2ZIDR0`
//!
//! - `prefix`: 1–6 alphanumeric characters naming the issuing namespace
//! - `random`: 30–242 alphanumeric characters of secret entropy
//! - `checksum`: 6 alphanumeric characters, CRC32 of the random segment
//!   encoded as base62
//!
//! A rendered token is always 38–255 characters long.
//!
//! # Security Notes
//!
//! The checksum detects corruption and typos cheaply; it is not a MAC and
//! anyone can compute it. The secret is the random segment: store its
//! SHA-256 content hash, never the token itself, and compare stored hashes
//! with the constant-time helpers.
//!
//! # Example
//!
//! ```rust
//! use random_token::RandomToken;
//!
//! // Mint a new token. Show it to the user once, store only the hash.
//! let token = RandomToken::generate("sk")?;
//! let stored_hash = token.content_hash();
//!
//! // Later, validate an incoming token string structurally, then look it
//! // up by cache key and compare hashes in constant time.
//! let incoming = RandomToken::from_string(&token.to_string())?;
//! assert_eq!(incoming.cache_key(), token.cache_key());
//! assert!(incoming.matches_content_hash_hex(&stored_hash));
//! # Ok::<(), random_token::TokenError>(())
//! ```

mod checksum;
mod error;
mod hash;
mod parse;
mod token;
mod verify;

// Public re-exports
pub use error::{Result, TokenError};
pub use token::{
    CHECKSUM_LENGTH, DEFAULT_RANDOM_LENGTH, MAX_PREFIX_LENGTH, MAX_RANDOM_LENGTH,
    MAX_TOKEN_LENGTH, MIN_PREFIX_LENGTH, MIN_RANDOM_LENGTH, MIN_TOKEN_LENGTH, RandomToken,
};
