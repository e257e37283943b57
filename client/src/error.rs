use thiserror::Error;

use tilesync_shared::{ActionId, PubKey};

/// Why an action's payload could not be applied to the mirror
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadProblem {
    #[error("position ({x}, {y}) is off the board")]
    OffBoard { x: u8, y: u8 },

    #[error("action carries no position")]
    MissingPosition,

    #[error("action carries no tile")]
    MissingTile,
}

/// Errors recovered inside a reconciliation cycle. The action stays seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The action cannot be applied with its handler
    #[error("Action {action_id} has an invalid payload: {reason}")]
    InvalidActionPayload {
        action_id: ActionId,
        reason: PayloadProblem,
    },
}

/// Errors returned by a GameSession
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session was torn down and accepts no more updates
    #[error("Session has been torn down")]
    TornDown,

    /// Bytes arrived for an address the session is not configured for
    #[error("No account registered for address {address}")]
    UnknownAccount { address: PubKey },
}
