/// the storage size of a SmartBuffer created without an explicit size
pub const DEFAULT_SIZE: usize = 8;

/// the largest start offset encode_fields accepts,
/// the bytes before it are allocated and zero-filled
pub const MAX_ENCODE_OFFSET: usize = 2usize.pow(24);
