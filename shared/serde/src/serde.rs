use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr};

/// A type that can be written to and read from a flat little-endian byte buffer
pub trait Serde: Sized + Clone + PartialEq {
    /// Serialize Self to a ByteWrite
    fn ser(&self, writer: &mut dyn ByteWrite);

    /// Parse Self from a ByteReader
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Return length of value in bytes
    fn byte_length(&self) -> usize;
}

/// Implemented by records whose encoded size never depends on their value
pub trait ConstByteLength {
    fn const_byte_length() -> usize;
}
