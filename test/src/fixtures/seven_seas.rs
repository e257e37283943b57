use tilesync_shared::{
    games::seven_seas::{GameAction, GameActionHistory, GameDataAccount, Tile, STATE_PLAYER},
    ActionId, Position, PubKey,
};

/// A ship owned by `owner` with full health
pub fn ship(owner: PubKey) -> Tile {
    Tile {
        player: owner,
        state: STATE_PLAYER,
        health: 100,
        collect_reward: 0,
        avatar: owner,
        kills: 0,
    }
}

pub fn sea_with(cells: &[(u8, u8, Tile)]) -> GameDataAccount {
    let mut account = GameDataAccount::default();
    for (x, y, tile) in cells {
        if account.board.replace(Position::new(*x, *y), tile.clone()).is_err() {
            panic!("fixture cell ({}, {}) is off the board", x, y);
        }
    }
    account
}

pub fn shot(action_id: ActionId, action_type: u8, player: PubKey, target: PubKey) -> GameAction {
    GameAction {
        action_id,
        action_type,
        player,
        target,
        damage: 10,
    }
}

pub fn log_of(actions: Vec<GameAction>) -> GameActionHistory {
    GameActionHistory {
        id_counter: actions.iter().map(|action| action.action_id).max().unwrap_or(0),
        game_actions: actions,
    }
}
