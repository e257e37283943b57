use log::{debug, info, warn};

use tilesync_shared::{AccountKind, AccountSnapshot, BoardSnapshot, GameLayout, PubKey};

use crate::{
    config::SessionConfig,
    desync::DesyncDetector,
    error::SessionError,
    events::{BoardRebuilt, DecodeFailure, RebuildReason, SessionEvents},
    feed::{AccountSource, AccountUpdate, SubscriptionFeed},
    handlers::ActionHandlers,
    mirror::BoardMirror,
    reconciler::{ActionLogReconciler, HandlerOutcome, ReconcilePhase},
};

/// Everything one client keeps to follow a single game on the ledger.
///
/// Updates are queued with [`GameSession::receive`] or [`GameSession::poll`]
/// and applied one at a time by [`GameSession::process`], which returns the
/// events they produced.
pub struct GameSession<G: GameLayout> {
    config: SessionConfig,
    feed: SubscriptionFeed,
    reconciler: ActionLogReconciler<G>,
    mirror: BoardMirror<G::Tile>,
    detector: DesyncDetector,
    board: Option<G::Board>,
    player: Option<G::Player>,
    events: SessionEvents<G>,
    torn_down: bool,
}

impl<G: GameLayout> GameSession<G> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_handlers(config, ActionHandlers::for_game::<G>())
    }

    pub fn with_handlers(config: SessionConfig, handlers: ActionHandlers) -> Self {
        Self {
            feed: SubscriptionFeed::new(config.max_queued_updates),
            reconciler: ActionLogReconciler::with_handlers(config.seen_capacity, handlers),
            mirror: BoardMirror::new(),
            detector: DesyncDetector::new(),
            board: None,
            player: None,
            events: SessionEvents::new(),
            torn_down: false,
            config,
        }
    }

    /// Queues bytes pushed by the subscription for `address`
    pub fn receive(&mut self, address: PubKey, bytes: Vec<u8>) -> Result<(), SessionError> {
        self.accept(AccountUpdate::push(address, bytes))
    }

    /// Queues an update from any origin
    pub fn accept(&mut self, update: AccountUpdate) -> Result<(), SessionError> {
        if self.torn_down {
            return Err(SessionError::TornDown);
        }
        if self.config.accounts.kind_of(&update.address).is_none() {
            return Err(SessionError::UnknownAccount {
                address: update.address,
            });
        }
        self.feed.push(update);
        Ok(())
    }

    /// Reads every configured account once from `source` and queues what
    /// exists. A failed read only means no update for that account this
    /// cycle. Returns the number of updates queued.
    pub fn poll(&mut self, source: &mut dyn AccountSource) -> Result<usize, SessionError> {
        if self.torn_down {
            return Err(SessionError::TornDown);
        }
        let mut queued = 0;
        let addresses: Vec<(AccountKind, PubKey)> = self.config.accounts.iter().collect();
        for (kind, address) in addresses {
            match self.feed.poll_source(source, address) {
                Ok(true) => queued += 1,
                Ok(false) => {}
                Err(error) => debug!("No {} update this cycle: {}", kind, error),
            }
        }
        Ok(queued)
    }

    /// Applies every queued update in arrival order
    pub fn process(&mut self) -> Result<SessionEvents<G>, SessionError> {
        if self.torn_down {
            return Err(SessionError::TornDown);
        }
        while let Some(update) = self.feed.pop() {
            self.apply_update(update);
        }
        Ok(std::mem::take(&mut self.events))
    }

    /// Stops the session. Queued updates, applied ids and the mirror are
    /// discarded without being processed.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        info!("Tearing down {} session", G::NAME);
        self.torn_down = true;
        self.feed.clear();
        self.reconciler.forget();
        self.mirror.clear();
        self.board = None;
        self.player = None;
        self.events = SessionEvents::new();
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn mirror(&self) -> &BoardMirror<G::Tile> {
        &self.mirror
    }

    /// Latest authoritative board
    pub fn board(&self) -> Option<&G::Board> {
        self.board.as_ref()
    }

    pub fn player(&self) -> Option<&G::Player> {
        self.player.as_ref()
    }

    pub fn phase(&self) -> ReconcilePhase {
        self.reconciler.phase()
    }

    pub fn reconciler(&self) -> &ActionLogReconciler<G> {
        &self.reconciler
    }

    pub fn detector(&self) -> &DesyncDetector {
        &self.detector
    }

    pub fn queued_updates(&self) -> usize {
        self.feed.len()
    }

    fn apply_update(&mut self, update: AccountUpdate) {
        let Some(kind) = self.config.accounts.kind_of(&update.address) else {
            warn!("Skipping update from unregistered account {}", update.address);
            return;
        };

        match AccountSnapshot::<G>::decode(kind, &update.bytes) {
            Ok(Some(snapshot)) => self.apply_snapshot(snapshot),
            Ok(None) => debug!(
                "Bytes from {} are not a {} {} account",
                update.address,
                G::NAME,
                kind
            ),
            Err(error) => {
                warn!("Cannot decode {} update from {}: {}", kind, update.address, error);
                self.events.push_decode_failure(DecodeFailure {
                    address: update.address,
                    error,
                });
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: AccountSnapshot<G>) {
        match snapshot {
            AccountSnapshot::Board(board) => self.apply_board(board),
            AccountSnapshot::History(history) => {
                let reconciled =
                    self.reconciler
                        .reconcile(&history, &mut self.mirror, self.board.as_ref());
                for action in reconciled {
                    if action.outcome == HandlerOutcome::BoardReset {
                        self.push_rebuilt(RebuildReason::Reset);
                    }
                    self.events.push_reconciled(action);
                }
                self.check_desync();
            }
            AccountSnapshot::Player(player) => {
                self.player = Some(player.clone());
                self.events.push_player(player);
            }
        }
    }

    fn apply_board(&mut self, board: G::Board) {
        let was_terminal = self.board.as_ref().map(BoardSnapshot::is_terminal);
        self.board = Some(board);

        match was_terminal {
            None => self.rebuild(RebuildReason::Initial),
            Some(true) if !self.board_is_terminal() => {
                info!("{} board left its finished state, restarting", G::NAME);
                self.reconciler.restart();
                self.rebuild(RebuildReason::Restart);
            }
            Some(_) => self.check_desync(),
        }
    }

    fn board_is_terminal(&self) -> bool {
        self.board.as_ref().is_some_and(BoardSnapshot::is_terminal)
    }

    fn check_desync(&mut self) {
        let Some(board) = self.board.as_ref() else {
            return;
        };
        let Some(report) = self.detector.check(&self.mirror, board.board()) else {
            return;
        };

        warn!(
            "{} board mirror out of sync in {} cells",
            G::NAME,
            report.len()
        );
        self.events.push_desync(report);
        if self.config.resync_on_desync {
            self.rebuild(RebuildReason::Desync);
        }
    }

    fn rebuild(&mut self, reason: RebuildReason) {
        let Some(board) = self.board.as_ref() else {
            return;
        };
        self.mirror.rebuild_from(board.board());
        self.push_rebuilt(reason);
    }

    fn push_rebuilt(&mut self, reason: RebuildReason) {
        let version = self.board.as_ref().map_or(0, BoardSnapshot::version);
        debug!("Rebuilt {} mirror ({:?}) at version {}", G::NAME, reason, version);
        self.events.push_rebuild(BoardRebuilt { reason, version });
    }
}
