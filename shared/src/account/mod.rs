//! Discriminator-gated decoding of whole account buffers.
//!
//! Every account starts with an 8-byte little-endian type tag. [`decode`]
//! checks that tag before touching any field, so handing it another
//! account's bytes is a cheap, non-fatal "not this type".

use log::debug;

use tilesync_serde::{ByteCounter, ByteReader, ByteWriter, Serde};

use crate::constants::DISCRIMINATOR_BYTES;

mod board;
mod error;

pub use board::Board;
pub use error::DecodeError;

/// A ledger account whose body follows its 8-byte discriminator
pub trait Account: Serde {
    /// Human readable name used in errors and logs
    const NAME: &'static str;
    const DISCRIMINATOR: u64;

    /// Smallest possible body, discriminator excluded
    fn min_body_length() -> usize;

    /// Smallest possible buffer, discriminator included
    fn min_byte_length() -> usize {
        DISCRIMINATOR_BYTES + Self::min_body_length()
    }
}

/// Reads the discriminator of a buffer without decoding anything else
pub fn discriminator_of(bytes: &[u8]) -> Option<u64> {
    let mut reader = ByteReader::new(bytes);
    u64::de(&mut reader).ok()
}

/// Decodes `bytes` as account `A`.
///
/// Returns `Ok(None)` when the buffer belongs to a different account type.
/// Trailing bytes past the account body are ignored, ledger accounts are
/// commonly allocated larger than their contents.
pub fn decode<A: Account>(bytes: &[u8]) -> Result<Option<A>, DecodeError> {
    let found = bytes.len();
    let Some(discriminator) = discriminator_of(bytes) else {
        return Err(DecodeError::TruncatedBuffer {
            account: A::NAME,
            needed: A::min_byte_length(),
            found,
        });
    };

    if discriminator != A::DISCRIMINATOR {
        debug!(
            "Buffer with discriminator {} is not a {}",
            discriminator,
            A::NAME
        );
        return Ok(None);
    }

    let needed = A::min_byte_length();
    if found < needed {
        return Err(DecodeError::TruncatedBuffer {
            account: A::NAME,
            needed,
            found,
        });
    }

    let mut reader = ByteReader::new(bytes);
    // the discriminator was read above and cannot fail twice
    reader
        .skip(DISCRIMINATOR_BYTES)
        .map_err(|error| DecodeError::from_serde(A::NAME, found, error))?;
    A::de(&mut reader)
        .map(Some)
        .map_err(|error| DecodeError::from_serde(A::NAME, found, error))
}

/// Like [`decode`], but a foreign discriminator is reported as
/// [`DecodeError::ShapeMismatch`] instead of `Ok(None)`
pub fn decode_expected<A: Account>(bytes: &[u8]) -> Result<A, DecodeError> {
    match decode::<A>(bytes)? {
        Some(account) => Ok(account),
        None => Err(DecodeError::ShapeMismatch {
            expected: A::DISCRIMINATOR,
            found: discriminator_of(bytes).unwrap_or_default(),
        }),
    }
}

/// Encodes `account` with its discriminator prefix
pub fn encode<A: Account>(account: &A) -> Vec<u8> {
    let mut counter = ByteCounter::new();
    A::DISCRIMINATOR.ser(&mut counter);
    account.ser(&mut counter);

    let mut writer = ByteWriter::with_capacity(counter.byte_count());
    A::DISCRIMINATOR.ser(&mut writer);
    account.ser(&mut writer);
    writer.to_bytes()
}
