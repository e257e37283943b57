use thiserror::Error;

use tilesync_shared::PubKey;

/// Errors an account source reports for a one-shot read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint could not serve this account right now
    #[error("Account {address} is unavailable")]
    Unavailable { address: PubKey },

    /// The source was shut down
    #[error("Account source is closed")]
    Closed,

    #[error("Account source failed: {reason}")]
    Other { reason: String },
}

/// One-shot reads of raw account bytes, implemented by the ledger SDK
pub trait AccountSource {
    /// `Ok(None)` when the account does not exist yet
    fn get(&mut self, address: &PubKey) -> Result<Option<Vec<u8>>, TransportError>;
}
