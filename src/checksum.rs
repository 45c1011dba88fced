//! CRC32-based checksum over the random payload.
//!
//! The checksum is a short error-detecting code, not an authentication tag:
//! anyone can compute it. Its output is a wire-compatibility contract, so the
//! CRC variant (IEEE reflected, the "crc32b" flavor) and the base62 alphabet
//! (`[0-9][A-Z][a-z]`) are fixed.

use crate::token::CHECKSUM_LENGTH;

/// Calculate the six-character checksum for a random payload.
///
/// The CRC of the payload bytes is base62-encoded and left-padded with `'0'`.
/// Six base62 digits cover the full `u32` range (62^6 > 2^32), so the encoded
/// value never exceeds the checksum width.
pub(crate) fn calculate_checksum(random: &str) -> String {
    let crc = crc32fast::hash(random.as_bytes());
    let encoded = base62::encode(crc);

    format!("{:0>width$}", encoded, width = CHECKSUM_LENGTH)
}
