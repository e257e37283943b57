use std::default::Default;

use tilesync_shared::{AccountKind, PubKey};

/// Ledger addresses a session listens to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountAddresses {
    pub board: PubKey,
    pub history: PubKey,
    /// Games without a per-player record leave this unset
    pub player: Option<PubKey>,
}

impl AccountAddresses {
    pub fn new(board: PubKey, history: PubKey) -> Self {
        Self {
            board,
            history,
            player: None,
        }
    }

    pub fn with_player(mut self, player: PubKey) -> Self {
        self.player = Some(player);
        self
    }

    /// Which decoder bytes from `address` should go through
    pub fn kind_of(&self, address: &PubKey) -> Option<AccountKind> {
        self.iter()
            .find(|(_, candidate)| candidate == address)
            .map(|(kind, _)| kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountKind, PubKey)> {
        [
            Some((AccountKind::Board, self.board)),
            Some((AccountKind::History, self.history)),
            self.player.map(|player| (AccountKind::Player, player)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Contains Config properties which will be used by a GameSession
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Addresses of the accounts the session decodes
    pub accounts: AccountAddresses,
    /// Maximum number of applied action ids remembered. Raised at runtime to
    /// the number of slots in the largest history seen.
    pub seen_capacity: usize,
    /// Rebuild the board mirror from the ledger as soon as a desync is
    /// detected. When false, only the `DesyncDetected` event is published.
    pub resync_on_desync: bool,
    /// Updates buffered between two `process` calls before the oldest is
    /// dropped
    pub max_queued_updates: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            accounts: AccountAddresses::default(),
            seen_capacity: 1024,
            resync_on_desync: true,
            max_queued_updates: 64,
        }
    }
}

impl SessionConfig {
    pub fn new(accounts: AccountAddresses) -> Self {
        Self {
            accounts,
            ..Self::default()
        }
    }
}
