use crate::{
    byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, serde::Serde,
    ConstByteLength,
};

// Fixed-width integers are stored little-endian with no framing.
macro_rules! impl_serde_for_integer {
    ($($t:ty),*) => {$(
        impl Serde for $t {
            fn ser(&self, writer: &mut dyn ByteWrite) {
                writer.write_bytes(&self.to_le_bytes());
            }

            fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                let bytes = reader.read_array::<{ std::mem::size_of::<$t>() }>()?;
                Ok(<$t>::from_le_bytes(bytes))
            }

            fn byte_length(&self) -> usize {
                std::mem::size_of::<$t>()
            }
        }

        impl ConstByteLength for $t {
            fn const_byte_length() -> usize {
                std::mem::size_of::<$t>()
            }
        }
    )*};
}

impl_serde_for_integer!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// Booleans occupy one byte. Ledger programs are not guaranteed to write
// exactly 1 for true, so any nonzero byte reads as true.
impl Serde for bool {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_byte(u8::from(*self));
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(reader.read_byte()? != 0)
    }

    fn byte_length(&self) -> usize {
        1
    }
}

impl ConstByteLength for bool {
    fn const_byte_length() -> usize {
        1
    }
}
