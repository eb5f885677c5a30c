pub mod byte_view;
pub mod endianness;
pub mod offset;
