use thiserror::Error;

/// Errors that can occur while reading a record from a byte buffer
///
/// SECURITY: every variant is produced from untrusted ledger bytes. None of the
/// readers panic on malformed input, they return one of these instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// Reader ran off the end of the buffer
    #[error("Truncated buffer: needed {needed} more bytes but only {remaining} remain")]
    TruncatedBuffer { needed: usize, remaining: usize },

    /// A length-prefixed string was not valid UTF-8
    #[error("String of {length} bytes is not valid UTF-8")]
    InvalidUtf8 { length: usize },

    /// An optional value's presence flag was neither 0 nor 1
    #[error("Invalid option tag {tag} (expected 0 or 1)")]
    InvalidOptionTag { tag: u8 },

    /// A length prefix describes more data than the buffer could ever hold
    #[error("Length prefix {length} exceeds the {remaining} bytes left in the buffer")]
    LengthOverflow { length: u32, remaining: usize },
}
