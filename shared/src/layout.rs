//! Traits that let one reconciler drive every game's account layouts.

use std::fmt::Debug;

use tilesync_serde::{ConstByteLength, Serde};

use crate::{
    account::{Account, Board},
    types::{ActionId, Position},
};

/// One board cell as the ledger stores it
pub trait TileRecord: Serde + ConstByteLength + Default + Debug {
    /// The value compared when validating a mirror against the ledger
    fn building_type(&self) -> u8;

    /// `false` for the game's empty-cell sentinel
    fn is_occupied(&self) -> bool;
}

/// One slot of a game's action history
pub trait ActionRecord: Serde + Debug {
    type Tile: TileRecord;

    fn action_id(&self) -> ActionId;
    fn action_type(&self) -> u8;

    /// Cell the action targets, unchecked against the board bounds.
    /// `None` for games whose actions carry no coordinate.
    fn position(&self) -> Option<Position>;

    /// Post-action state of the targeted cell, when the game records it
    fn tile(&self) -> Option<&Self::Tile>;

    /// Unused ring slots carry the reserved id `0`
    fn is_empty_slot(&self) -> bool {
        self.action_id() == 0
    }
}

/// Decoded board account
pub trait BoardSnapshot: Account + Debug {
    type Tile: TileRecord;

    fn board(&self) -> &Board<Self::Tile>;

    /// Coarse version stamp. Not comparable with action ids.
    fn version(&self) -> u64;

    /// The game has ended and is waiting for a reset
    fn is_terminal(&self) -> bool;
}

/// Decoded action history account
pub trait HistorySnapshot: Account + Debug {
    type Action: ActionRecord;

    fn id_counter(&self) -> u64;

    /// Every slot in stored order, unused slots included
    fn actions(&self) -> &[Self::Action];

    /// Slots holding a real action, in stored order
    fn live_actions(&self) -> impl Iterator<Item = &Self::Action> + '_ {
        self.actions().iter().filter(|action| !action.is_empty_slot())
    }
}

/// What a dispatched action does to the board mirror
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionHandler {
    /// Overwrite the targeted mirror cell with the action's post-state tile
    PatchTile,
    /// Rebuild the whole mirror when the ledger reports a finished game
    ResetBoard,
    /// Publish only, the mirror is untouched
    Notify,
}

/// Ties together the account types of one game
pub trait GameLayout: Sized + 'static {
    const NAME: &'static str;

    type Tile: TileRecord;
    type Action: ActionRecord<Tile = Self::Tile>;
    type Board: BoardSnapshot<Tile = Self::Tile>;
    type History: HistorySnapshot<Action = Self::Action>;
    type Player: Account + Debug;

    /// Default handler per action type. Types not listed are `Notify`.
    fn action_handlers() -> &'static [(u8, ActionHandler)];
}
