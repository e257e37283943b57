//! City builder accounts: a 10x10 board of buildings, a fixed 30-slot
//! action ring and a player record.

use tilesync_serde::{ConstByteLength, PubKey, Serde};

use crate::{
    account::{Account, Board},
    impl_record_serde,
    layout::{ActionHandler, ActionRecord, BoardSnapshot, GameLayout, HistorySnapshot, TileRecord},
    types::{ActionId, Position},
};

pub const BUILDING_TYPE_TREE: u8 = 0;
pub const BUILDING_TYPE_EMPTY: u8 = 1;
pub const BUILDING_TYPE_SAWMILL: u8 = 2;
pub const BUILDING_TYPE_MINE: u8 = 3;
pub const BUILDING_TYPE_GOOD: u8 = 4;
pub const BUILDING_TYPE_EVIL: u8 = 5;

pub const ACTION_TYPE_CHOP: u8 = 0;
pub const ACTION_TYPE_BUILD: u8 = 1;
pub const ACTION_TYPE_UPGRADE: u8 = 2;
pub const ACTION_TYPE_COLLECT: u8 = 3;
pub const ACTION_TYPE_FIGHT: u8 = 4;
pub const ACTION_TYPE_RESET: u8 = 5;

/// Slots in the action ring
pub const HISTORY_CAPACITY: usize = 30;

/// Seconds a sawmill or mine needs between two collections
pub const COLLECT_COOLDOWN_SECONDS: i64 = 60;

/// Seconds for one point of energy to refill
pub const ENERGY_REFILL_SECONDS: i64 = 60;
/// Energy stops refilling at this level
pub const MAX_ENERGY: u64 = 10;

/// One building cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileData {
    pub building_type: u8,
    pub building_level: u32,
    pub building_owner: PubKey,
    pub building_start_time: i64,
    pub building_start_upgrade_time: i64,
    pub building_start_collect_time: i64,
    pub building_health: i64,
}

impl_record_serde!(const TileData {
    building_type: u8,
    building_level: u32,
    building_owner: PubKey,
    building_start_time: i64,
    building_start_upgrade_time: i64,
    building_start_collect_time: i64,
    building_health: i64,
});

impl Default for TileData {
    /// An empty lot, not the all-zero tree
    fn default() -> Self {
        Self::with_building(BUILDING_TYPE_EMPTY)
    }
}

impl TileData {
    pub fn with_building(building_type: u8) -> Self {
        Self {
            building_type,
            building_level: 0,
            building_owner: PubKey::default(),
            building_start_time: 0,
            building_start_upgrade_time: 0,
            building_start_collect_time: 0,
            building_health: 0,
        }
    }

    /// Whether a collect issued at unix time `now` would be accepted
    pub fn is_collectable(&self, now: i64) -> bool {
        let produces = self.building_type == BUILDING_TYPE_SAWMILL
            || self.building_type == BUILDING_TYPE_MINE;
        produces && now.saturating_sub(self.building_start_collect_time) >= COLLECT_COOLDOWN_SECONDS
    }

    /// Seconds left until [`TileData::is_collectable`] turns true, `0` when
    /// it already is or the building never produces
    pub fn seconds_until_collectable(&self, now: i64) -> i64 {
        let ready_at = self
            .building_start_collect_time
            .saturating_add(COLLECT_COOLDOWN_SECONDS);
        ready_at.saturating_sub(now).max(0)
    }
}

impl TileRecord for TileData {
    fn building_type(&self) -> u8 {
        self.building_type
    }

    fn is_occupied(&self) -> bool {
        self.building_type != BUILDING_TYPE_EMPTY
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardAccount {
    pub data: Board<TileData>,
    pub action_id: u64,
    pub wood: u64,
    pub stone: u64,
    pub damm_level: u64,
    pub initialized: bool,
    pub evil_won: bool,
    pub good_won: bool,
}

impl_record_serde!(const BoardAccount {
    data: Board<TileData>,
    action_id: u64,
    wood: u64,
    stone: u64,
    damm_level: u64,
    initialized: bool,
    evil_won: bool,
    good_won: bool,
});

impl Account for BoardAccount {
    const NAME: &'static str = "BoardAccount";
    const DISCRIMINATOR: u64 = 17376089564643394824;

    fn min_body_length() -> usize {
        Self::const_byte_length()
    }
}

impl BoardSnapshot for BoardAccount {
    type Tile = TileData;

    fn board(&self) -> &Board<TileData> {
        &self.data
    }

    fn version(&self) -> u64 {
        self.action_id
    }

    fn is_terminal(&self) -> bool {
        self.evil_won || self.good_won
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameAction {
    pub action_id: ActionId,
    pub action_type: u8,
    pub x: u8,
    pub y: u8,
    pub tile: TileData,
    pub player: PubKey,
    pub avatar: PubKey,
    pub amount: u64,
}

impl_record_serde!(const GameAction {
    action_id: u64,
    action_type: u8,
    x: u8,
    y: u8,
    tile: TileData,
    player: PubKey,
    avatar: PubKey,
    amount: u64,
});

impl ActionRecord for GameAction {
    type Tile = TileData;

    fn action_id(&self) -> ActionId {
        self.action_id
    }

    fn action_type(&self) -> u8 {
        self.action_type
    }

    fn position(&self) -> Option<Position> {
        Some(Position::new(self.x, self.y))
    }

    fn tile(&self) -> Option<&TileData> {
        Some(&self.tile)
    }
}

/// Fixed ring of the last [`HISTORY_CAPACITY`] actions.
/// `action_index` points at the slot the next action will be written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameActionHistory {
    pub id_counter: u64,
    pub action_index: u64,
    pub game_actions: [GameAction; HISTORY_CAPACITY],
}

impl_record_serde!(const GameActionHistory {
    id_counter: u64,
    action_index: u64,
    game_actions: [GameAction; HISTORY_CAPACITY],
});

impl Default for GameActionHistory {
    fn default() -> Self {
        Self {
            id_counter: 0,
            action_index: 0,
            game_actions: std::array::from_fn(|_| GameAction::default()),
        }
    }
}

impl GameActionHistory {
    /// Writes `action` into the slot at `action_index`, then advances the
    /// index, wrapping after the last slot
    pub fn push(&mut self, action: GameAction) {
        let slot = usize::try_from(self.action_index).unwrap_or(usize::MAX) % HISTORY_CAPACITY;
        self.game_actions[slot] = action;
        self.action_index = ((slot + 1) % HISTORY_CAPACITY) as u64;
    }
}

impl Account for GameActionHistory {
    const NAME: &'static str = "GameActionHistory";
    const DISCRIMINATOR: u64 = 8873408368832920456;

    fn min_body_length() -> usize {
        Self::const_byte_length()
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

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerData {
    pub authority: PubKey,
    pub avatar: PubKey,
    pub name: String,
    pub level: u8,
    pub xp: u64,
    pub energy: u64,
    pub last_login: i64,
}

impl_record_serde!(PlayerData {
    authority: PubKey,
    avatar: PubKey,
    name: String,
    level: u8,
    xp: u64,
    energy: u64,
    last_login: i64,
});

impl PlayerData {
    /// The name without the NUL padding the ledger program writes
    pub fn display_name(&self) -> &str {
        self.name.trim_end_matches('\0')
    }

    /// Energy the player will have at unix time `now` once the ledger
    /// credits one point per [`ENERGY_REFILL_SECONDS`] since `last_login`,
    /// up to [`MAX_ENERGY`]. Energy already above the cap is kept.
    pub fn projected_energy(&self, now: i64) -> u64 {
        if self.energy >= MAX_ENERGY {
            return self.energy;
        }
        let refills = self.elapsed_since_login(now) / ENERGY_REFILL_SECONDS;
        let refills = u64::try_from(refills).unwrap_or(u64::MAX);
        self.energy.saturating_add(refills).min(MAX_ENERGY)
    }

    /// Seconds until the next energy point refills, `0` when energy is full
    pub fn seconds_until_next_energy(&self, now: i64) -> i64 {
        if self.projected_energy(now) >= MAX_ENERGY {
            return 0;
        }
        ENERGY_REFILL_SECONDS - self.elapsed_since_login(now) % ENERGY_REFILL_SECONDS
    }

    fn elapsed_since_login(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_login).max(0)
    }
}

impl Account for PlayerData {
    const NAME: &'static str = "PlayerData";
    const DISCRIMINATOR: u64 = 9264901878634267077;

    fn min_body_length() -> usize {
        // an empty name still carries its length prefix
        PubKey::const_byte_length() * 2 + String::new().byte_length() + 1 + 8 * 3
    }
}

/// The city builder game
#[derive(Clone, Copy, Debug, Default)]
pub struct CityBuilder;

impl GameLayout for CityBuilder {
    const NAME: &'static str = "city builder";

    type Tile = TileData;
    type Action = GameAction;
    type Board = BoardAccount;
    type History = GameActionHistory;
    type Player = PlayerData;

    fn action_handlers() -> &'static [(u8, ActionHandler)] {
        &[
            (ACTION_TYPE_CHOP, ActionHandler::PatchTile),
            (ACTION_TYPE_BUILD, ActionHandler::PatchTile),
            (ACTION_TYPE_UPGRADE, ActionHandler::PatchTile),
            (ACTION_TYPE_COLLECT, ActionHandler::PatchTile),
            (ACTION_TYPE_FIGHT, ActionHandler::PatchTile),
            (ACTION_TYPE_RESET, ActionHandler::ResetBoard),
        ]
    }
}
