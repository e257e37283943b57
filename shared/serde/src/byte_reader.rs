use crate::error::SerdeErr;

/// Cursor over a borrowed byte buffer. Every read is bounds checked and fails
/// with [`SerdeErr::TruncatedBuffer`] instead of panicking.
pub struct ByteReader<'b> {
    buffer: &'b [u8],
    offset: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Bytes consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'b [u8], SerdeErr> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(SerdeErr::TruncatedBuffer {
                needed: len,
                remaining,
            });
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.buffer[start..self.offset])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let bytes = self.read_bytes(N)?;
        let mut output = [0u8; N];
        output.copy_from_slice(bytes);
        Ok(output)
    }

    /// Look at the next `N` bytes without consuming them
    pub fn peek_array<const N: usize>(&self) -> Result<[u8; N], SerdeErr> {
        let remaining = self.remaining();
        if N > remaining {
            return Err(SerdeErr::TruncatedBuffer {
                needed: N,
                remaining,
            });
        }
        let mut output = [0u8; N];
        output.copy_from_slice(&self.buffer[self.offset..self.offset + N]);
        Ok(output)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), SerdeErr> {
        self.read_bytes(len).map(|_| ())
    }
}
