/// Byte order of multi-byte fields
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    /// least significant byte first,
    /// the default for all accessors
    Little,
    /// most significant byte first,
    /// the usual network wire order
    Big,
}

impl Endianness {
    pub fn from_little_endian(little_endian: bool) -> Endianness {
        if little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::Little
    }
}
