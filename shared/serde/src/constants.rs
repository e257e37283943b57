/// Width of the little-endian `u32` prefix in front of strings and counted vectors
pub const LENGTH_PREFIX_BYTES: usize = 4;
/// Width of the presence flag in front of an optional value
pub const OPTION_TAG_BYTES: usize = 1;
/// Width of a raw public key
pub const PUB_KEY_BYTES: usize = 32;
