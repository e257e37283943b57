use tilesync_client::{AccountAddresses, GameSession, SessionConfig};
use tilesync_shared::{games::CityBuilder, games::SevenSeas, PubKey};

pub const BOARD_ADDRESS: PubKey = PubKey::new([1; 32]);
pub const HISTORY_ADDRESS: PubKey = PubKey::new([2; 32]);
pub const PLAYER_ADDRESS: PubKey = PubKey::new([3; 32]);

pub fn addresses() -> AccountAddresses {
    AccountAddresses::new(BOARD_ADDRESS, HISTORY_ADDRESS).with_player(PLAYER_ADDRESS)
}

pub fn city_session() -> GameSession<CityBuilder> {
    GameSession::new(SessionConfig::new(addresses()))
}

pub fn city_session_with(config: SessionConfig) -> GameSession<CityBuilder> {
    GameSession::new(config)
}

pub fn seven_seas_session() -> GameSession<SevenSeas> {
    GameSession::new(SessionConfig::new(AccountAddresses::new(
        BOARD_ADDRESS,
        HISTORY_ADDRESS,
    )))
}
