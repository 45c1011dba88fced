//! The random token value type and its validating factories.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::checksum::calculate_checksum;
use crate::error::{Result, TokenError};
use crate::parse::split_token;

/// Random length used by [`RandomToken::generate`].
pub const DEFAULT_RANDOM_LENGTH: usize = 30;
/// Minimum length of the random segment.
pub const MIN_RANDOM_LENGTH: usize = 30;
/// Maximum length of the random segment.
pub const MAX_RANDOM_LENGTH: usize = 242;
/// Minimum length of the prefix.
pub const MIN_PREFIX_LENGTH: usize = 1;
/// Maximum length of the prefix.
pub const MAX_PREFIX_LENGTH: usize = 6;
/// Exact length of the checksum segment.
pub const CHECKSUM_LENGTH: usize = 6;
/// Minimum rendered token length (prefix + separator + random + checksum).
pub const MIN_TOKEN_LENGTH: usize = MIN_PREFIX_LENGTH + 1 + MIN_RANDOM_LENGTH + CHECKSUM_LENGTH;
/// Maximum rendered token length.
pub const MAX_TOKEN_LENGTH: usize = MAX_PREFIX_LENGTH + 1 + MAX_RANDOM_LENGTH + CHECKSUM_LENGTH;

/// A validated token of the form `{prefix}_{random}{checksum}`.
///
/// The prefix names the issuing namespace and is stored in plaintext. The
/// random segment is the secret payload. The checksum is a deterministic
/// function of the random segment, embedded so corrupted or mistyped tokens
/// can be rejected before any storage lookup.
///
/// Instances are immutable and only constructed through [`generate`],
/// [`from_string`] or [`from_trusted_random`], each of which establishes the
/// format invariants up front. The random segment is zeroized when the token
/// is dropped.
///
/// [`generate`]: RandomToken::generate
/// [`from_string`]: RandomToken::from_string
/// [`from_trusted_random`]: RandomToken::from_trusted_random
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomToken {
    prefix: String,
    random: String,
    checksum: String,
}

impl RandomToken {
    /// Generate a new token with the default random length of 30.
    ///
    /// See [`RandomToken::generate_with_length`].
    pub fn generate(prefix: impl Into<String>) -> Result<Self> {
        Self::generate_with_length(prefix, DEFAULT_RANDOM_LENGTH)
    }

    /// Generate a new token with a given prefix and random length.
    ///
    /// Draws `length` characters uniformly from the 62-symbol alphanumeric
    /// alphabet using the operating system's secure random source.
    ///
    /// # Errors
    /// * [`TokenError::InvalidPrefix`] if the prefix is empty, longer than
    ///   six characters, or not alphanumeric
    /// * [`TokenError::InvalidLength`] if `length` is outside 30..=242
    pub fn generate_with_length(prefix: impl Into<String>, length: usize) -> Result<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        if !(MIN_RANDOM_LENGTH..=MAX_RANDOM_LENGTH).contains(&length) {
            return Err(TokenError::InvalidLength);
        }

        let random: String = OsRng
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();
        let checksum = calculate_checksum(&random);

        Ok(Self {
            prefix,
            random,
            checksum,
        })
    }

    /// Parse and validate a token from an untrusted string.
    ///
    /// The input must match the anchored structure (total length 38..=255,
    /// alphanumeric segments, a single `_` after the prefix) and carry a
    /// checksum that matches the one recomputed from the random segment.
    ///
    /// # Errors
    /// * [`TokenError::InvalidFormat`] if the structure does not match
    /// * [`TokenError::InvalidChecksum`] if the structure matches but the
    ///   embedded checksum is wrong
    pub fn from_string(input: &str) -> Result<Self> {
        let raw = split_token(input)?;

        let checksum = calculate_checksum(raw.random);
        if checksum != raw.checksum {
            return Err(TokenError::InvalidChecksum);
        }

        Ok(Self {
            prefix: raw.prefix.to_owned(),
            random: raw.random.to_owned(),
            checksum,
        })
    }

    /// Reconstruct a token from a random segment that is already trusted,
    /// e.g. one recovered from secure storage.
    ///
    /// Only the prefix is validated; the caller asserts the random segment
    /// was produced by a trusted generator, so no length or charset check is
    /// performed on it. The checksum is recomputed, never taken on trust.
    ///
    /// # Errors
    /// * [`TokenError::InvalidPrefix`] if the prefix is invalid
    pub fn from_trusted_random(prefix: impl Into<String>, random: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        let random = random.into();
        let checksum = calculate_checksum(&random);

        Ok(Self {
            prefix,
            random,
            checksum,
        })
    }

    /// The plaintext namespace prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The secret random payload.
    pub fn random(&self) -> &str {
        &self.random
    }

    /// The embedded checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl fmt::Display for RandomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}{}", self.prefix, self.random, self.checksum)
    }
}

impl FromStr for RandomToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl Drop for RandomToken {
    fn drop(&mut self) {
        // Clear the secret payload from memory.
        self.random.zeroize();
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    let in_bounds = (MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&prefix.len());
    if in_bounds && prefix.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Ok(());
    }

    Err(TokenError::InvalidPrefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let token = RandomToken::generate("test").unwrap();

        assert_eq!(token.prefix(), "test");
        assert_eq!(token.random().len(), DEFAULT_RANDOM_LENGTH);
        assert_eq!(token.checksum().len(), CHECKSUM_LENGTH);
        assert!(token.random().bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_unique_tokens() {
        let a = RandomToken::generate("test").unwrap();
        let b = RandomToken::generate("test").unwrap();
        assert_ne!(a.random(), b.random());
    }

    #[test]
    fn test_generated_token_parses_back() {
        let token = RandomToken::generate_with_length("api", 64).unwrap();
        let parsed = RandomToken::from_string(&token.to_string()).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_length_bounds() {
        for length in [0, 1, 29, 243, 500] {
            assert_eq!(
                RandomToken::generate_with_length("prefix", length).unwrap_err(),
                TokenError::InvalidLength,
            );
        }
        for length in [30, 242] {
            let token = RandomToken::generate_with_length("prefix", length).unwrap();
            assert_eq!(token.random().len(), length);
        }
    }

    #[test]
    fn test_prefix_bounds() {
        assert_eq!(
            RandomToken::generate("").unwrap_err(),
            TokenError::InvalidPrefix,
        );
        assert_eq!(
            RandomToken::generate("toolong").unwrap_err(),
            TokenError::InvalidPrefix,
        );
        for prefix in ["a", "ab", "abc", "abcd", "abcde", "abcdef"] {
            assert!(RandomToken::generate(prefix).is_ok());
        }
    }

    #[test]
    fn test_prefix_charset() {
        assert_eq!(
            RandomToken::generate("ab_c").unwrap_err(),
            TokenError::InvalidPrefix,
        );
        assert_eq!(
            RandomToken::generate("a-b").unwrap_err(),
            TokenError::InvalidPrefix,
        );
    }

    #[test]
    fn test_from_trusted_random_matches_fixture() {
        let token =
            RandomToken::from_trusted_random("prefix", "ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu").unwrap();

        assert_eq!(
            token.to_string(),
            "prefix_ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu2ZIDR0",
        );
    }

    #[test]
    fn test_from_trusted_random_still_validates_prefix() {
        let result = RandomToken::from_trusted_random("toolong", "ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu");
        assert_eq!(result.unwrap_err(), TokenError::InvalidPrefix);
    }

    #[test]
    fn test_max_length_render_is_255() {
        let token = RandomToken::generate_with_length("a".repeat(6), MAX_RANDOM_LENGTH).unwrap();
        assert_eq!(token.to_string().len(), MAX_TOKEN_LENGTH);
        assert_eq!(token.to_string().len(), 255);
    }

    #[test]
    fn test_from_str_impl() {
        let token: RandomToken = "prefix_ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu2ZIDR0".parse().unwrap();
        assert_eq!(token.prefix(), "prefix");
        assert_eq!(token.checksum(), "2ZIDR0");
    }

    #[test]
    fn test_checksum_mismatch() {
        let result = RandomToken::from_string("prefix_ieJCRA8kOyyrzm4hoM2yVbnKDFMzquABCDEF");
        assert_eq!(result.unwrap_err(), TokenError::InvalidChecksum);
    }

    #[test]
    fn test_structural_failures_never_report_checksum() {
        for input in [
            "toolong_ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu2ZIDR0",
            "toolong_ieJCRA8kOyyrzm4hoM2yVbnKDFMzqu",
            "prefix_notenoughrandomorchecksum",
            "prefixieJCRA8kOyyrzm4hoM2yVbnKDFMzqu2ZIDR0",
            "",
        ] {
            assert_eq!(
                RandomToken::from_string(input).unwrap_err(),
                TokenError::InvalidFormat,
            );
        }
    }
}
