use std::fmt;

use crate::{
    account::{decode, DecodeError},
    layout::GameLayout,
    types::AccountKind,
};

/// One decoded account of game `G`, the unit a session processes
pub enum AccountSnapshot<G: GameLayout> {
    Board(G::Board),
    History(G::History),
    Player(G::Player),
}

impl<G: GameLayout> AccountSnapshot<G> {
    /// Decodes `bytes` with the decoder for `kind`. `Ok(None)` means the
    /// buffer's discriminator belongs to some other account type.
    pub fn decode(kind: AccountKind, bytes: &[u8]) -> Result<Option<Self>, DecodeError> {
        let snapshot = match kind {
            AccountKind::Board => decode::<G::Board>(bytes)?.map(AccountSnapshot::Board),
            AccountKind::History => decode::<G::History>(bytes)?.map(AccountSnapshot::History),
            AccountKind::Player => decode::<G::Player>(bytes)?.map(AccountSnapshot::Player),
        };
        Ok(snapshot)
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            AccountSnapshot::Board(_) => AccountKind::Board,
            AccountSnapshot::History(_) => AccountKind::History,
            AccountSnapshot::Player(_) => AccountKind::Player,
        }
    }
}

impl<G: GameLayout> Clone for AccountSnapshot<G> {
    fn clone(&self) -> Self {
        match self {
            AccountSnapshot::Board(board) => AccountSnapshot::Board(board.clone()),
            AccountSnapshot::History(history) => AccountSnapshot::History(history.clone()),
            AccountSnapshot::Player(player) => AccountSnapshot::Player(player.clone()),
        }
    }
}

impl<G: GameLayout> fmt::Debug for AccountSnapshot<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountSnapshot::Board(board) => f.debug_tuple("Board").field(board).finish(),
            AccountSnapshot::History(history) => f.debug_tuple("History").field(history).finish(),
            AccountSnapshot::Player(player) => f.debug_tuple("Player").field(player).finish(),
        }
    }
}
