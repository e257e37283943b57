use std::fmt;

use crate::{
    byte_reader::ByteReader, byte_writer::ByteWrite, constants::PUB_KEY_BYTES, error::SerdeErr,
    serde::Serde, ConstByteLength,
};

/// A 32-byte ledger public key. Stored raw, with no length prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PubKey([u8; PUB_KEY_BYTES]);

impl PubKey {
    pub const fn new(bytes: [u8; PUB_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; PUB_KEY_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUB_KEY_BYTES] {
        &self.0
    }

    /// The all-zero key, which programs use for "no owner"
    pub fn is_default(&self) -> bool {
        self.0 == [0u8; PUB_KEY_BYTES]
    }
}

impl From<[u8; PUB_KEY_BYTES]> for PubKey {
    fn from(bytes: [u8; PUB_KEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // first four bytes are enough to tell keys apart in logs
        write!(
            f,
            "PubKey({:02x}{:02x}{:02x}{:02x}..)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl Serde for PubKey {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_bytes(&self.0);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self(reader.read_array::<PUB_KEY_BYTES>()?))
    }

    fn byte_length(&self) -> usize {
        PUB_KEY_BYTES
    }
}

impl ConstByteLength for PubKey {
    fn const_byte_length() -> usize {
        PUB_KEY_BYTES
    }
}
