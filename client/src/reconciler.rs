//! Replays a game's action history onto the board mirror exactly once.

use std::marker::PhantomData;

use log::{debug, warn};

use tilesync_shared::{
    ActionHandler, ActionId, ActionRecord, BoardSnapshot, GameLayout, HistorySnapshot,
};

use crate::{
    error::{PayloadProblem, ReconcileError},
    handlers::ActionHandlers,
    mirror::BoardMirror,
    seen_set::SeenActionSet,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcilePhase {
    /// No history seen yet. The first snapshot only marks its ids.
    Priming,
    Live,
}

/// What dispatching one action did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// The mirror cell now holds the action's post-state tile
    Patched,
    /// The finished game was cleared and the mirror rebuilt
    BoardReset,
    /// A reset arrived while the ledger board is not in a finished state
    ResetIgnored,
    Notified,
    /// Dropped, the action stays seen
    Rejected(ReconcileError),
}

/// A newly applied action, published in dispatch order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconciledAction<A> {
    pub action: A,
    pub handler: ActionHandler,
    pub outcome: HandlerOutcome,
}

pub struct ActionLogReconciler<G: GameLayout> {
    phase: ReconcilePhase,
    seen: SeenActionSet,
    handlers: ActionHandlers,
    phantom_g: PhantomData<G>,
}

impl<G: GameLayout> ActionLogReconciler<G> {
    pub fn new(seen_capacity: usize) -> Self {
        Self::with_handlers(seen_capacity, ActionHandlers::for_game::<G>())
    }

    pub fn with_handlers(seen_capacity: usize, handlers: ActionHandlers) -> Self {
        Self {
            phase: ReconcilePhase::Priming,
            seen: SeenActionSet::new(seen_capacity),
            handlers,
            phantom_g: PhantomData,
        }
    }

    pub fn phase(&self) -> ReconcilePhase {
        self.phase
    }

    pub fn seen(&self) -> &SeenActionSet {
        &self.seen
    }

    pub fn handlers(&self) -> &ActionHandlers {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut ActionHandlers {
        &mut self.handlers
    }

    /// Forgets every applied id and goes back to priming. Handlers are kept.
    pub fn forget(&mut self) {
        self.seen.clear();
        self.phase = ReconcilePhase::Priming;
    }

    /// A new game started on the ledger: forget applied ids but stay live,
    /// so the new game's actions are applied as they appear
    pub fn restart(&mut self) {
        debug!(
            "{} restarted, forgetting {} applied action ids",
            G::NAME,
            self.seen.len()
        );
        self.seen.clear();
    }

    /// Applies every action of `history` not applied before.
    ///
    /// New actions are dispatched in the history's stored slot order.
    /// Membership is by id, so an action that moved to another slot is not
    /// applied again. Each id is marked seen before its handler runs.
    pub fn reconcile(
        &mut self,
        history: &G::History,
        mirror: &mut BoardMirror<G::Tile>,
        board: Option<&G::Board>,
    ) -> Vec<ReconciledAction<G::Action>> {
        // every id in the snapshot must stay remembered until it leaves the log
        self.seen.ensure_capacity(history.actions().len());

        if self.phase == ReconcilePhase::Priming {
            let mut primed = 0;
            for action in history.live_actions() {
                if self.seen.insert(action.action_id()) {
                    primed += 1;
                }
            }
            self.phase = ReconcilePhase::Live;
            debug!("Primed {} action ids from {} history", primed, G::NAME);
            return Vec::new();
        }

        let mut fresh: Vec<&G::Action> = Vec::new();
        for action in history.live_actions() {
            if self.seen.insert(action.action_id()) {
                fresh.push(action);
            }
        }

        fresh
            .into_iter()
            .map(|action| self.dispatch(action, mirror, board))
            .collect()
    }

    fn dispatch(
        &self,
        action: &G::Action,
        mirror: &mut BoardMirror<G::Tile>,
        board: Option<&G::Board>,
    ) -> ReconciledAction<G::Action> {
        let handler = self.handlers.get(action.action_type());
        let outcome = match handler {
            ActionHandler::PatchTile => match patch_tile::<G>(action, mirror) {
                Ok(()) => HandlerOutcome::Patched,
                Err(reason) => {
                    let error = ReconcileError::InvalidActionPayload {
                        action_id: action.action_id(),
                        reason,
                    };
                    warn!("Dropping {} action: {}", G::NAME, error);
                    HandlerOutcome::Rejected(error)
                }
            },
            ActionHandler::ResetBoard => match board {
                Some(board) if board.is_terminal() => {
                    mirror.rebuild_from(board.board());
                    HandlerOutcome::BoardReset
                }
                _ => HandlerOutcome::ResetIgnored,
            },
            ActionHandler::Notify => HandlerOutcome::Notified,
        };

        ReconciledAction {
            action: action.clone(),
            handler,
            outcome,
        }
    }
}

fn patch_tile<G: GameLayout>(
    action: &G::Action,
    mirror: &mut BoardMirror<G::Tile>,
) -> Result<(), PayloadProblem> {
    let position = action.position().ok_or(PayloadProblem::MissingPosition)?;
    if !position.is_on_board() {
        return Err(PayloadProblem::OffBoard {
            x: position.x,
            y: position.y,
        });
    }
    let tile = action.tile().ok_or(PayloadProblem::MissingTile)?;
    mirror.patch(position, tile)
}

/// Ids dispatched by one reconciliation, in dispatch order
pub fn dispatched_ids<A: ActionRecord>(reconciled: &[ReconciledAction<A>]) -> Vec<ActionId> {
    reconciled
        .iter()
        .map(|reconciled| reconciled.action.action_id())
        .collect()
}
