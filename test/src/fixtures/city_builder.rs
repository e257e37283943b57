use tilesync_shared::{
    encode,
    games::city_builder::{
        BoardAccount, GameAction, GameActionHistory, PlayerData, TileData, ACTION_TYPE_BUILD,
        ACTION_TYPE_RESET, BUILDING_TYPE_EMPTY,
    },
    ActionId, Board, Position, PubKey,
};

/// Fluent builder for city builder boards, every cell starts empty
pub struct BoardBuilder {
    account: BoardAccount,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            account: BoardAccount {
                data: Board::filled(TileData::with_building(BUILDING_TYPE_EMPTY)),
                action_id: 0,
                wood: 0,
                stone: 0,
                damm_level: 0,
                initialized: true,
                evil_won: false,
                good_won: false,
            },
        }
    }

    pub fn building(self, x: u8, y: u8, building_type: u8) -> Self {
        self.tile(x, y, TileData::with_building(building_type))
    }

    pub fn tile(mut self, x: u8, y: u8, tile: TileData) -> Self {
        if self.account.data.replace(Position::new(x, y), tile).is_err() {
            panic!("fixture cell ({}, {}) is off the board", x, y);
        }
        self
    }

    pub fn version(mut self, action_id: u64) -> Self {
        self.account.action_id = action_id;
        self
    }

    pub fn evil_won(mut self) -> Self {
        self.account.evil_won = true;
        self
    }

    pub fn build(self) -> BoardAccount {
        self.account
    }

    pub fn bytes(self) -> Vec<u8> {
        encode(&self.account)
    }
}

/// A build action whose post-state is a fresh building of `building_type`
pub fn build_action(action_id: ActionId, x: u8, y: u8, building_type: u8) -> GameAction {
    GameAction {
        action_id,
        action_type: ACTION_TYPE_BUILD,
        x,
        y,
        tile: TileData::with_building(building_type),
        ..GameAction::default()
    }
}

pub fn reset_action(action_id: ActionId) -> GameAction {
    GameAction {
        action_id,
        action_type: ACTION_TYPE_RESET,
        ..GameAction::default()
    }
}

/// History with `actions` written into slots `0..`, the rest unused
pub fn history_with_slots(id_counter: u64, actions: Vec<GameAction>) -> GameActionHistory {
    let mut history = GameActionHistory {
        id_counter,
        ..GameActionHistory::default()
    };
    for (slot, action) in actions.into_iter().enumerate() {
        history.game_actions[slot] = action;
    }
    history
}

pub fn player(name: &str) -> PlayerData {
    PlayerData {
        authority: PubKey::new([7; 32]),
        avatar: PubKey::new([8; 32]),
        name: name.to_string(),
        level: 1,
        xp: 0,
        energy: 10,
        last_login: 1_700_000_000,
    }
}

/// Stand-in for the city builder program: applies actions to its board and
/// records them in its action ring exactly like the ledger does
pub struct CityLedger {
    board: BoardAccount,
    history: GameActionHistory,
    next_id: ActionId,
}

impl Default for CityLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CityLedger {
    pub fn new() -> Self {
        Self {
            board: BoardBuilder::new().build(),
            history: GameActionHistory::default(),
            next_id: 0,
        }
    }

    /// Puts a building on a cell and logs it. Returns the new action's id.
    pub fn place(&mut self, x: u8, y: u8, building_type: u8) -> ActionId {
        let action_id = self.advance();
        let action = build_action(action_id, x, y, building_type);
        if self
            .board
            .data
            .replace(Position::new(x, y), action.tile.clone())
            .is_err()
        {
            panic!("ledger cell ({}, {}) is off the board", x, y);
        }
        self.history.push(action);
        action_id
    }

    /// Changes a cell without logging an action, as a missed update would
    pub fn place_unlogged(&mut self, x: u8, y: u8, building_type: u8) {
        if self
            .board
            .data
            .replace(Position::new(x, y), TileData::with_building(building_type))
            .is_err()
        {
            panic!("ledger cell ({}, {}) is off the board", x, y);
        }
    }

    /// Ends the game with the evil side winning
    pub fn finish(&mut self) {
        self.board.evil_won = true;
    }

    /// Starts a new game the way the program's restart does: the board and
    /// the action ring are cleared and the reset is logged under id `0`, so
    /// it lands in slot 0 as an unused slot. The next action gets id 1.
    pub fn restart(&mut self) {
        self.board = BoardBuilder::new().build();
        self.history = GameActionHistory::default();
        self.history.push(reset_action(0));
        self.next_id = 0;
        self.board.action_id = 1;
    }

    pub fn board(&self) -> &BoardAccount {
        &self.board
    }

    pub fn history(&self) -> &GameActionHistory {
        &self.history
    }

    pub fn board_bytes(&self) -> Vec<u8> {
        encode(&self.board)
    }

    pub fn history_bytes(&self) -> Vec<u8> {
        encode(&self.history)
    }

    fn advance(&mut self) -> ActionId {
        self.next_id += 1;
        self.board.action_id = self.next_id;
        self.next_id
    }
}
