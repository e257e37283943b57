use std::collections::HashMap;

use tilesync_shared::{ActionHandler, GameLayout};

/// Dispatch table from `action_type` to what the action does to the mirror.
/// Types without an entry are published without touching the mirror.
#[derive(Clone, Debug, Default)]
pub struct ActionHandlers {
    table: HashMap<u8, ActionHandler>,
}

impl ActionHandlers {
    /// Table with the game's default handlers
    pub fn for_game<G: GameLayout>() -> Self {
        Self {
            table: G::action_handlers().iter().copied().collect(),
        }
    }

    /// Overrides the handler for `action_type`, returning the previous one
    pub fn insert(&mut self, action_type: u8, handler: ActionHandler) -> Option<ActionHandler> {
        self.table.insert(action_type, handler)
    }

    pub fn get(&self, action_type: u8) -> ActionHandler {
        self.table
            .get(&action_type)
            .copied()
            .unwrap_or(ActionHandler::Notify)
    }
}
