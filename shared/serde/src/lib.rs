//! # Tilesync Serde
//! Fixed-layout, little-endian byte codec for ledger account records.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod byte_reader;
mod byte_writer;
mod collections;
mod constants;
mod error;
mod integer;
mod pub_key;
mod serde;

pub use byte_reader::ByteReader;
pub use byte_writer::{ByteCounter, ByteWrite, ByteWriter};
pub use collections::{de_fixed, ser_fixed};
pub use constants::{LENGTH_PREFIX_BYTES, OPTION_TAG_BYTES, PUB_KEY_BYTES};
pub use error::SerdeErr;
pub use pub_key::PubKey;
pub use serde::{ConstByteLength, Serde};
