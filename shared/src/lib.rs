//! # Tilesync Shared
//! Account layouts of the supported games and the discriminator-gated decoder
//! used by tilesync clients.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use tilesync_serde as serde;
pub use tilesync_serde::{
    ByteReader, ByteWrite, ByteWriter, ConstByteLength, PubKey, Serde, SerdeErr,
};

mod account;
mod constants;
mod layout;
mod record;
mod snapshot;
mod types;

pub mod games;

pub use account::{
    decode, decode_expected, discriminator_of, encode, Account, Board, DecodeError,
};
pub use constants::{BOARD_CELL_COUNT, BOARD_HEIGHT, BOARD_WIDTH, DISCRIMINATOR_BYTES};
pub use layout::{
    ActionHandler, ActionRecord, BoardSnapshot, GameLayout, HistorySnapshot, TileRecord,
};
pub use snapshot::AccountSnapshot;
pub use types::{AccountKind, ActionId, Position};
