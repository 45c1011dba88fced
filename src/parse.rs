//! Structural parsing of token strings.
//!
//! The format is anchored: `{prefix}_{random}{checksum}` with fixed bounds
//! per segment. The scan below is the explicit equivalent of the reference
//! pattern `^[a-zA-Z0-9]{1,6}_[a-zA-Z0-9]{30,242}[a-zA-Z0-9]{6}$`, split out
//! step by step so the checksum boundary does not depend on any regex
//! engine's quantifier semantics.

use crate::error::{Result, TokenError};
use crate::token::{
    CHECKSUM_LENGTH, MAX_PREFIX_LENGTH, MAX_RANDOM_LENGTH, MAX_TOKEN_LENGTH, MIN_RANDOM_LENGTH,
    MIN_TOKEN_LENGTH,
};

/// Borrowed segments of a structurally valid token string.
///
/// The checksum has not been verified yet; callers recompute it from
/// `random` before constructing a token.
pub(crate) struct RawToken<'a> {
    pub prefix: &'a str,
    pub random: &'a str,
    pub checksum: &'a str,
}

/// Split an untrusted string into its three token segments.
///
/// Fails with [`TokenError::InvalidFormat`] on any structural violation:
/// out-of-bounds total length, non-ASCII input, a missing or misplaced
/// separator, or a non-alphanumeric segment. The prefix cannot contain `_`,
/// so the first underscore is the only possible split point.
pub(crate) fn split_token(input: &str) -> Result<RawToken<'_>> {
    if !input.is_ascii() || !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&input.len()) {
        return Err(TokenError::InvalidFormat);
    }

    let separator = input.find('_').ok_or(TokenError::InvalidFormat)?;
    let prefix = &input[..separator];
    if prefix.is_empty() || prefix.len() > MAX_PREFIX_LENGTH || !is_alphanumeric(prefix) {
        return Err(TokenError::InvalidFormat);
    }

    // Everything after the separator is random + trailing checksum. A second
    // underscore lands in one of these segments and fails the charset check.
    let rest = &input[separator + 1..];
    if rest.len() < MIN_RANDOM_LENGTH + CHECKSUM_LENGTH {
        return Err(TokenError::InvalidFormat);
    }

    let (random, checksum) = rest.split_at(rest.len() - CHECKSUM_LENGTH);
    if random.len() > MAX_RANDOM_LENGTH || !is_alphanumeric(random) || !is_alphanumeric(checksum) {
        return Err(TokenError::InvalidFormat);
    }

    Ok(RawToken {
        prefix,
        random,
        checksum,
    })
}

fn is_alphanumeric(segment: &str) -> bool {
    segment.bytes().all(|b| b.is_ascii_alphanumeric())
}
