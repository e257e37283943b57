use crate::{
    byte_reader::ByteReader,
    byte_writer::ByteWrite,
    constants::{LENGTH_PREFIX_BYTES, OPTION_TAG_BYTES},
    error::SerdeErr,
    serde::Serde,
    ConstByteLength,
};

// Option: 1-byte presence tag, then the value only when present

impl<T: Serde> Serde for Option<T> {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        match self {
            Some(value) => {
                writer.write_byte(1);
                value.ser(writer);
            }
            None => writer.write_byte(0),
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        match reader.read_byte()? {
            0 => Ok(None),
            1 => Ok(Some(T::de(reader)?)),
            tag => Err(SerdeErr::InvalidOptionTag { tag }),
        }
    }

    fn byte_length(&self) -> usize {
        OPTION_TAG_BYTES + self.as_ref().map_or(0, Serde::byte_length)
    }
}

// String: u32 length prefix, raw UTF-8, no terminator

impl Serde for String {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        write_length(writer, self.len());
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let length = read_length(reader)?;
        let bytes = reader.read_bytes(length)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SerdeErr::InvalidUtf8 { length })
    }

    fn byte_length(&self) -> usize {
        LENGTH_PREFIX_BYTES + self.len()
    }
}

// Vec: u32 element count, then that many records

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        write_length(writer, self.len());
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let count = read_length(reader)?;
        let mut output = Vec::with_capacity(count);
        for _ in 0..count {
            output.push(T::de(reader)?);
        }
        Ok(output)
    }

    fn byte_length(&self) -> usize {
        LENGTH_PREFIX_BYTES + self.iter().map(Serde::byte_length).sum::<usize>()
    }
}

// Fixed arrays: N sequential records with no prefix, N is part of the type

impl<T: Serde, const N: usize> Serde for [T; N] {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        ser_fixed(self, writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let items = de_fixed::<T>(reader, N)?;
        let remaining = reader.remaining();
        items
            .try_into()
            .map_err(|_| SerdeErr::TruncatedBuffer {
                needed: N,
                remaining,
            })
    }

    fn byte_length(&self) -> usize {
        self.iter().map(Serde::byte_length).sum()
    }
}

impl<T: ConstByteLength, const N: usize> ConstByteLength for [T; N] {
    fn const_byte_length() -> usize {
        T::const_byte_length() * N
    }
}

/// Write `items` back to back without a count prefix
pub fn ser_fixed<T: Serde>(items: &[T], writer: &mut dyn ByteWrite) {
    for item in items {
        item.ser(writer);
    }
}

/// Read exactly `count` records without a count prefix
pub fn de_fixed<T: Serde>(reader: &mut ByteReader, count: usize) -> Result<Vec<T>, SerdeErr> {
    let mut output = Vec::with_capacity(count);
    for _ in 0..count {
        output.push(T::de(reader)?);
    }
    Ok(output)
}

fn write_length(writer: &mut dyn ByteWrite, length: usize) {
    let length = u32::try_from(length).unwrap_or(u32::MAX);
    length.ser(writer);
}

// every byte or record behind a prefix takes at least one byte
fn read_length(reader: &mut ByteReader) -> Result<usize, SerdeErr> {
    let length = u32::de(reader)?;
    let remaining = reader.remaining();
    match usize::try_from(length) {
        Ok(length) if length <= remaining => Ok(length),
        _ => Err(SerdeErr::LengthOverflow { length, remaining }),
    }
}
