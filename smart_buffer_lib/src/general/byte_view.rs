use byteorder::{BigEndian, ByteOrder, LittleEndian};
use crate::general::endianness::Endianness;
use std::mem::size_of;

/// A fixed-width numeric value that can be stored in a ByteView
pub trait Primitive: Copy {
    /// number of bytes the value occupies
    const WIDTH: usize;

    /// decodes the value from exactly `WIDTH` bytes
    fn decode(bytes: &[u8], order: Endianness) -> Self;

    /// encodes the value into exactly `WIDTH` bytes
    fn encode(self, bytes: &mut [u8], order: Endianness);
}

impl Primitive for u8 {
    const WIDTH: usize = size_of::<u8>();

    fn decode(bytes: &[u8], _order: Endianness) -> Self {
        bytes[0]
    }

    fn encode(self, bytes: &mut [u8], _order: Endianness) {
        bytes[0] = self;
    }
}

impl Primitive for i8 {
    const WIDTH: usize = size_of::<i8>();

    fn decode(bytes: &[u8], _order: Endianness) -> Self {
        bytes[0] as i8
    }

    fn encode(self, bytes: &mut [u8], _order: Endianness) {
        bytes[0] = self as u8;
    }
}

macro_rules! impl_primitive {
    ($ty:ty, $read:ident, $write:ident) => {
        impl Primitive for $ty {
            const WIDTH: usize = size_of::<$ty>();

            fn decode(bytes: &[u8], order: Endianness) -> Self {
                match order {
                    Endianness::Little => LittleEndian::$read(bytes),
                    Endianness::Big => BigEndian::$read(bytes),
                }
            }

            fn encode(self, bytes: &mut [u8], order: Endianness) {
                match order {
                    Endianness::Little => LittleEndian::$write(bytes, self),
                    Endianness::Big => BigEndian::$write(bytes, self),
                }
            }
        }
    };
}

impl_primitive!(u16, read_u16, write_u16);
impl_primitive!(i16, read_i16, write_i16);
impl_primitive!(u32, read_u32, write_u32);
impl_primitive!(i32, read_i32, write_i32);
impl_primitive!(u64, read_u64, write_u64);
impl_primitive!(i64, read_i64, write_i64);
impl_primitive!(f32, read_f32, write_f32);
impl_primitive!(f64, read_f64, write_f64);

/// Typed access to a block of bytes at explicit offsets.
///
/// A ByteView holds no position of its own, every accessor takes the byte offset
/// and, for multi-byte values, the byte order.
///
/// # Panics
/// All accessors panic if `offset + width` exceeds the length of the block.
pub trait ByteView {
    /// get the byte buffer of the view
    fn buf(&self) -> &[u8];
    /// get the mutable byte buffer of the view
    fn buf_mut(&mut self) -> &mut [u8];

    fn get_value<T: Primitive>(&self, offset: usize, order: Endianness) -> T {
        T::decode(&self.buf()[offset..offset + T::WIDTH], order)
    }

    fn set_value<T: Primitive>(&mut self, offset: usize, value: T, order: Endianness) {
        value.encode(&mut self.buf_mut()[offset..offset + T::WIDTH], order);
    }

    fn get_u8(&self, offset: usize) -> u8 {
        self.get_value(offset, Endianness::Little)
    }

    fn set_u8(&mut self, offset: usize, value: u8) {
        self.set_value(offset, value, Endianness::Little);
    }

    fn get_i8(&self, offset: usize) -> i8 {
        self.get_value(offset, Endianness::Little)
    }

    fn set_i8(&mut self, offset: usize, value: i8) {
        self.set_value(offset, value, Endianness::Little);
    }
}

impl ByteView for [u8] {
    fn buf(&self) -> &[u8] {
        self
    }

    fn buf_mut(&mut self) -> &mut [u8] {
        self
    }
}
