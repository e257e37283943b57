use std::vec::IntoIter;

use tilesync_shared::{DecodeError, GameLayout, PubKey};

use crate::{desync::DesyncReport, reconciler::ReconciledAction};

/// Why the whole mirror was replaced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildReason {
    /// First board snapshot of the session
    Initial,
    /// The mirror diverged from the ledger
    Desync,
    /// The ledger board left its finished state
    Restart,
    /// A reset action arrived while the board was finished
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardRebuilt {
    pub reason: RebuildReason,
    /// Version stamp of the board the mirror was rebuilt from
    pub version: u64,
}

/// Bytes that could not be decoded, the update was skipped
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeFailure {
    pub address: PubKey,
    pub error: DecodeError,
}

/// Everything one `GameSession::process` call produced
pub struct SessionEvents<G: GameLayout> {
    reconciled: Vec<ReconciledAction<G::Action>>,
    rebuilds: Vec<BoardRebuilt>,
    desyncs: Vec<DesyncReport>,
    players: Vec<G::Player>,
    decode_failures: Vec<DecodeFailure>,
}

impl<G: GameLayout> Default for SessionEvents<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameLayout> SessionEvents<G> {
    pub(crate) fn new() -> Self {
        Self {
            reconciled: Vec::new(),
            rebuilds: Vec::new(),
            desyncs: Vec::new(),
            players: Vec::new(),
            decode_failures: Vec::new(),
        }
    }

    /// Nothing left to read
    pub fn is_empty(&self) -> bool {
        self.reconciled.is_empty()
            && self.rebuilds.is_empty()
            && self.desyncs.is_empty()
            && self.players.is_empty()
            && self.decode_failures.is_empty()
    }

    pub fn read<V: SessionEvent<G>>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: SessionEvent<G>>(&self) -> bool {
        V::has(self)
    }

    pub(crate) fn push_reconciled(&mut self, reconciled: ReconciledAction<G::Action>) {
        self.reconciled.push(reconciled);
    }

    pub(crate) fn push_rebuild(&mut self, rebuilt: BoardRebuilt) {
        self.rebuilds.push(rebuilt);
    }

    pub(crate) fn push_desync(&mut self, report: DesyncReport) {
        self.desyncs.push(report);
    }

    pub(crate) fn push_player(&mut self, player: G::Player) {
        self.players.push(player);
    }

    pub(crate) fn push_decode_failure(&mut self, failure: DecodeFailure) {
        self.decode_failures.push(failure);
    }
}

// Event Trait
pub trait SessionEvent<G: GameLayout> {
    type Iter;

    fn iter(events: &mut SessionEvents<G>) -> Self::Iter;

    fn has(events: &SessionEvents<G>) -> bool;
}

// Reconciled Action Event
pub struct ReconciledActionEvent;
impl<G: GameLayout> SessionEvent<G> for ReconciledActionEvent {
    type Iter = IntoIter<ReconciledAction<G::Action>>;

    fn iter(events: &mut SessionEvents<G>) -> Self::Iter {
        let list = std::mem::take(&mut events.reconciled);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SessionEvents<G>) -> bool {
        !events.reconciled.is_empty()
    }
}

// Board Rebuilt Event
pub struct BoardRebuiltEvent;
impl<G: GameLayout> SessionEvent<G> for BoardRebuiltEvent {
    type Iter = IntoIter<BoardRebuilt>;

    fn iter(events: &mut SessionEvents<G>) -> Self::Iter {
        let list = std::mem::take(&mut events.rebuilds);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SessionEvents<G>) -> bool {
        !events.rebuilds.is_empty()
    }
}

// Desync Detected Event
pub struct DesyncDetectedEvent;
impl<G: GameLayout> SessionEvent<G> for DesyncDetectedEvent {
    type Iter = IntoIter<DesyncReport>;

    fn iter(events: &mut SessionEvents<G>) -> Self::Iter {
        let list = std::mem::take(&mut events.desyncs);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SessionEvents<G>) -> bool {
        !events.desyncs.is_empty()
    }
}

// Player Updated Event
pub struct PlayerUpdatedEvent;
impl<G: GameLayout> SessionEvent<G> for PlayerUpdatedEvent {
    type Iter = IntoIter<G::Player>;

    fn iter(events: &mut SessionEvents<G>) -> Self::Iter {
        let list = std::mem::take(&mut events.players);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SessionEvents<G>) -> bool {
        !events.players.is_empty()
    }
}

// Decode Failure Event
pub struct DecodeFailureEvent;
impl<G: GameLayout> SessionEvent<G> for DecodeFailureEvent {
    type Iter = IntoIter<DecodeFailure>;

    fn iter(events: &mut SessionEvents<G>) -> Self::Iter {
        let list = std::mem::take(&mut events.decode_failures);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SessionEvents<G>) -> bool {
        !events.decode_failures.is_empty()
    }
}
