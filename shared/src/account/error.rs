use thiserror::Error;

use tilesync_serde::SerdeErr;

/// Errors that can occur while decoding an account buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer carries a different account's discriminator
    #[error("Expected account discriminator {expected}, found {found}")]
    ShapeMismatch {
        expected: u64,
        found: u64,
    },

    /// Buffer ends before the account's fields do
    #[error("Buffer for {account} is too short: needed {needed} bytes, found {found}")]
    TruncatedBuffer {
        account: &'static str,
        needed: usize,
        found: usize,
    },

    /// Buffer is long enough but a field holds an impossible value
    #[error("Malformed {account} buffer: {source}")]
    Malformed {
        account: &'static str,
        source: SerdeErr,
    },
}

impl DecodeError {
    pub(crate) fn from_serde(account: &'static str, found: usize, error: SerdeErr) -> Self {
        match error {
            SerdeErr::TruncatedBuffer { needed, remaining } => DecodeError::TruncatedBuffer {
                account,
                // report the whole-buffer size the read would have required
                needed: found.saturating_sub(remaining) + needed,
                found,
            },
            // a lower bound, the prefix counts records rather than bytes
            SerdeErr::LengthOverflow { length, remaining } => DecodeError::TruncatedBuffer {
                account,
                needed: found
                    .saturating_sub(remaining)
                    .saturating_add(usize::try_from(length).unwrap_or(usize::MAX)),
                found,
            },
            source => DecodeError::Malformed { account, source },
        }
    }
}
