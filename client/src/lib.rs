//! # Tilesync Client
//! Follows one game on the ledger: decodes pushed and polled account bytes,
//! replays the action log onto a local board mirror exactly once and rebuilds
//! the mirror whenever it drifts from the authoritative board.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use tilesync_shared as shared;

mod config;
mod desync;
mod error;
mod events;
mod feed;
mod handlers;
mod mirror;
mod reconciler;
mod seen_set;
mod session;

cfg_if! {
    if #[cfg(feature = "tokio_feed")] {
        pub mod tokio_feed;
    }
}

pub use config::{AccountAddresses, SessionConfig};
pub use desync::{CellMismatch, DesyncDetector, DesyncReport};
pub use error::{PayloadProblem, ReconcileError, SessionError};
pub use events::{
    BoardRebuilt, BoardRebuiltEvent, DecodeFailure, DecodeFailureEvent, DesyncDetectedEvent,
    PlayerUpdatedEvent, RebuildReason, ReconciledActionEvent, SessionEvent, SessionEvents,
};
pub use feed::{AccountSource, AccountUpdate, SubscriptionFeed, TransportError, UpdateOrigin};
pub use handlers::ActionHandlers;
pub use mirror::BoardMirror;
pub use reconciler::{
    dispatched_ids, ActionLogReconciler, HandlerOutcome, ReconcilePhase, ReconciledAction,
};
pub use seen_set::SeenActionSet;
pub use session::GameSession;
