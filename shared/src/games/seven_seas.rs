//! Seven seas accounts: a 10x10 sea of ships and chests and a counted action
//! log. Actions carry no tile, so the mirror only converges through board
//! snapshots.

use tilesync_serde::{ConstByteLength, PubKey, Serde};

use crate::{
    account::{Account, Board},
    impl_record_serde,
    layout::{ActionHandler, ActionRecord, BoardSnapshot, GameLayout, HistorySnapshot, TileRecord},
    types::{ActionId, Position},
};

pub const STATE_EMPTY: u8 = 0;
pub const STATE_PLAYER: u8 = 1;
pub const STATE_CHEST: u8 = 2;

pub const ACTION_TYPE_SHOOT: u8 = 0;
pub const ACTION_TYPE_HIT: u8 = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub player: PubKey,
    pub state: u8,
    pub health: u16,
    pub collect_reward: u64,
    pub avatar: PubKey,
    pub kills: u8,
}

impl_record_serde!(const Tile {
    player: PubKey,
    state: u8,
    health: u16,
    collect_reward: u64,
    avatar: PubKey,
    kills: u8,
});

impl TileRecord for Tile {
    fn building_type(&self) -> u8 {
        self.state
    }

    fn is_occupied(&self) -> bool {
        self.state != STATE_EMPTY
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameDataAccount {
    pub board: Board<Tile>,
    pub action_id: u64,
}

impl_record_serde!(const GameDataAccount {
    board: Board<Tile>,
    action_id: u64,
});

impl Account for GameDataAccount {
    const NAME: &'static str = "GameDataAccount";
    const DISCRIMINATOR: u64 = 2830422829680616787;

    fn min_body_length() -> usize {
        Self::const_byte_length()
    }
}

impl BoardSnapshot for GameDataAccount {
    type Tile = Tile;

    fn board(&self) -> &Board<Tile> {
        &self.board
    }

    fn version(&self) -> u64 {
        self.action_id
    }

    // the sea never ends
    fn is_terminal(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameAction {
    pub action_id: ActionId,
    pub action_type: u8,
    pub player: PubKey,
    pub target: PubKey,
    pub damage: u64,
}

impl_record_serde!(const GameAction {
    action_id: u64,
    action_type: u8,
    player: PubKey,
    target: PubKey,
    damage: u64,
});

impl ActionRecord for GameAction {
    type Tile = Tile;

    fn action_id(&self) -> ActionId {
        self.action_id
    }

    fn action_type(&self) -> u8 {
        self.action_type
    }

    fn position(&self) -> Option<Position> {
        None
    }

    fn tile(&self) -> Option<&Tile> {
        None
    }
}

/// Counted log, the ledger drops the oldest entries once it grows long
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameActionHistory {
    pub id_counter: u64,
    pub game_actions: Vec<GameAction>,
}

impl_record_serde!(GameActionHistory {
    id_counter: u64,
    game_actions: Vec<GameAction>,
});

impl Account for GameActionHistory {
    const NAME: &'static str = "GameActionHistory";
    const DISCRIMINATOR: u64 = 8873408368832920456;

    fn min_body_length() -> usize {
        u64::const_byte_length() + Vec::<GameAction>::new().byte_length()
    }
}

impl HistorySnapshot for GameActionHistory {
    type Action = GameAction;

    fn id_counter(&self) -> u64 {
        self.id_counter
    }

    fn actions(&self) -> &[GameAction] {
        &self.game_actions
    }
}

/// Treasury account. Only its discriminator is meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChestVaultAccount;

impl Serde for ChestVaultAccount {
    fn ser(&self, _writer: &mut dyn tilesync_serde::ByteWrite) {}

    fn de(_reader: &mut tilesync_serde::ByteReader) -> Result<Self, tilesync_serde::SerdeErr> {
        Ok(Self)
    }

    fn byte_length(&self) -> usize {
        0
    }
}

impl Account for ChestVaultAccount {
    const NAME: &'static str = "ChestVaultAccount";
    const DISCRIMINATOR: u64 = 9406927803919968769;

    fn min_body_length() -> usize {
        0
    }
}

/// The seven seas game
#[derive(Clone, Copy, Debug, Default)]
pub struct SevenSeas;

impl GameLayout for SevenSeas {
    const NAME: &'static str = "seven seas";

    type Tile = Tile;
    type Action = GameAction;
    type Board = GameDataAccount;
    type History = GameActionHistory;
    type Player = ChestVaultAccount;

    fn action_handlers() -> &'static [(u8, ActionHandler)] {
        &[
            (ACTION_TYPE_SHOOT, ActionHandler::Notify),
            (ACTION_TYPE_HIT, ActionHandler::Notify),
        ]
    }
}
