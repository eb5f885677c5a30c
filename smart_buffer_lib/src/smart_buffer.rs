use crate::constants::DEFAULT_SIZE;
use crate::general::byte_view::{ByteView, Primitive};
use crate::general::endianness::Endianness;
use crate::general::offset::Offset;
use crate::string_codec;

/// A growable byte buffer with a cursor.
///
/// Every accessor takes an [`Offset`]:
/// - `Offset::Cursor` reads or writes at the cursor and advances it by the number of bytes consumed or produced
/// - `Offset::At(n)` reads or writes at byte `n` and leaves the cursor untouched
///
/// Writes grow the storage to exactly fit the written value, reads never grow it.
/// Reading past the end of the storage panics.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartBuffer {
    storage: Vec<u8>,
    cursor: usize,
}

impl SmartBuffer {

    /// zero-filled buffer of DEFAULT_SIZE bytes
    pub fn new() -> SmartBuffer {
        SmartBuffer::from_size(DEFAULT_SIZE)
    }

    /// zero-filled buffer of `size` bytes
    pub fn from_size(size: usize) -> SmartBuffer {
        SmartBuffer::from_buffer(vec![0u8; size])
    }

    /// takes ownership of `buf` without copying it
    pub fn from_buffer(buf: Vec<u8>) -> SmartBuffer {
        SmartBuffer {
            storage: buf,
            cursor: 0,
        }
    }

    pub fn view(&self) -> &[u8] {
        &self.storage
    }

    pub fn view_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// replaces the storage and resets the cursor to 0
    pub fn set_view(&mut self, buf: Vec<u8>) {
        log::trace!("replaced storage of {} bytes with {} bytes", self.storage.len(), buf.len());
        self.storage = buf;
        self.cursor = 0;
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.storage
    }

    /// the cursor position
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// moves the cursor without reading or writing
    pub fn set_offset(&mut self, offset: usize) {
        self.cursor = offset;
    }

    /// length of the storage in bytes
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// grows the storage so that `size` bytes fit behind the cursor
    pub fn ensure_capacity(&mut self, size: usize) {
        self.grow_to(self.cursor + size);
    }

    /// grows the storage to exactly `required` bytes if it is shorter,
    /// existing bytes keep their offsets and new bytes are zero
    pub(crate) fn grow_to(&mut self, required: usize) {
        if required > self.storage.len() {
            log::trace!("growing storage from {} to {} bytes", self.storage.len(), required);
            self.storage.resize(required, 0);
        }
    }

    /// moves the cursor to `end` if the access was cursor-relative
    pub(crate) fn advance(&mut self, at: Offset, end: usize) {
        if at.is_cursor() {
            self.cursor = end;
        }
    }

    pub fn read<T: Primitive>(&mut self, at: Offset, order: Endianness) -> T {
        let position = at.resolve(self.cursor);
        let value = self.storage.get_value(position, order);
        self.advance(at, position + T::WIDTH);
        value
    }

    pub fn write<T: Primitive>(&mut self, value: T, at: Offset, order: Endianness) {
        let position = at.resolve(self.cursor);
        self.grow_to(position + T::WIDTH);
        self.storage.set_value(position, value, order);
        self.advance(at, position + T::WIDTH);
    }

    pub fn read_i8(&mut self, at: Offset) -> i8 {
        self.read(at, Endianness::Little)
    }

    pub fn read_u8(&mut self, at: Offset) -> u8 {
        self.read(at, Endianness::Little)
    }

    pub fn read_i16(&mut self, at: Offset, order: Endianness) -> i16 {
        self.read(at, order)
    }

    pub fn read_u16(&mut self, at: Offset, order: Endianness) -> u16 {
        self.read(at, order)
    }

    pub fn read_i32(&mut self, at: Offset, order: Endianness) -> i32 {
        self.read(at, order)
    }

    pub fn read_u32(&mut self, at: Offset, order: Endianness) -> u32 {
        self.read(at, order)
    }

    pub fn read_i64(&mut self, at: Offset, order: Endianness) -> i64 {
        self.read(at, order)
    }

    pub fn read_u64(&mut self, at: Offset, order: Endianness) -> u64 {
        self.read(at, order)
    }

    pub fn read_f32(&mut self, at: Offset, order: Endianness) -> f32 {
        self.read(at, order)
    }

    pub fn read_f64(&mut self, at: Offset, order: Endianness) -> f64 {
        self.read(at, order)
    }

    /// reads every byte from the offset to the end of the storage as one character each
    pub fn read_string(&mut self, at: Offset) -> String {
        string_codec::read_string(self, at, false)
    }

    /// reads up to the first zero byte, the cursor moves past the zero byte
    pub fn read_string_nt(&mut self, at: Offset) -> String {
        string_codec::read_string(self, at, true)
    }

    pub fn write_i8(&mut self, value: i8, at: Offset) {
        self.write(value, at, Endianness::Little);
    }

    pub fn write_u8(&mut self, value: u8, at: Offset) {
        self.write(value, at, Endianness::Little);
    }

    pub fn write_i16(&mut self, value: i16, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_u16(&mut self, value: u16, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_i32(&mut self, value: i32, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_u32(&mut self, value: u32, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_i64(&mut self, value: i64, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_u64(&mut self, value: u64, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_f32(&mut self, value: f32, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    pub fn write_f64(&mut self, value: f64, at: Offset, order: Endianness) {
        self.write(value, at, order);
    }

    /// writes one byte per character, characters above 255 keep their low 8 bits
    pub fn write_string(&mut self, value: &str, at: Offset) {
        string_codec::write_string(self, value, at, false);
    }

    /// like write_string, followed by a zero byte
    pub fn write_string_nt(&mut self, value: &str, at: Offset) {
        string_codec::write_string(self, value, at, true);
    }
}

impl Default for SmartBuffer {
    fn default() -> Self {
        SmartBuffer::new()
    }
}

impl From<Vec<u8>> for SmartBuffer {
    fn from(buf: Vec<u8>) -> Self {
        SmartBuffer::from_buffer(buf)
    }
}

impl Into<Vec<u8>> for SmartBuffer {
    fn into(self) -> Vec<u8> {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::DEFAULT_SIZE;
    use crate::general::endianness::Endianness::{self, Big, Little};
    use crate::general::offset::Offset::{At, Cursor};
    use crate::smart_buffer::SmartBuffer;
    use hex_literal::hex;
    use test_case::test_case;

    #[test]
    fn construction() {
        let buf = SmartBuffer::new();
        assert_eq!(buf.len(), DEFAULT_SIZE);
        assert_eq!(buf.offset(), 0);
        assert!(buf.view().iter().all(|b| *b == 0));

        let buf = SmartBuffer::from_size(3);
        assert_eq!(buf.view(), &[0u8; 3]);

        let buf = SmartBuffer::from_buffer(vec![1, 2, 3, 4]);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.offset(), 0);
    }

    #[test]
    fn wraps_without_copy() {
        let data = vec![9u8; 16];
        let ptr = data.as_ptr();
        let buf = SmartBuffer::from_buffer(data);
        assert_eq!(buf.view().as_ptr(), ptr);
        let data: Vec<u8> = buf.into();
        assert_eq!(data.as_ptr(), ptr);
    }

    #[test]
    fn cursor_advancement() {
        let mut buf = SmartBuffer::new();
        buf.write_u8(10, Cursor);
        assert_eq!(buf.offset(), 1);
        buf.write_u8(20, At(5));
        assert_eq!(buf.offset(), 1);
        assert_eq!(buf.view()[5], 20);
        buf.write_u32(7, Cursor, Little);
        assert_eq!(buf.offset(), 5);
        buf.write_f64(7.0, At(0), Little);
        assert_eq!(buf.offset(), 5);
    }

    #[test]
    fn explicit_offset_zero_is_not_cursor() {
        let mut buf = SmartBuffer::from_size(4);
        buf.set_offset(2);
        buf.write_u8(0xaa, At(0));
        assert_eq!(buf.offset(), 2);
        assert_eq!(buf.view(), &hex!("aa000000"));
        assert_eq!(buf.read_u8(At(0)), 0xaa);
        assert_eq!(buf.offset(), 2);
    }

    #[test]
    fn read_advances_cursor() {
        let mut buf = SmartBuffer::from_buffer(hex!("0102030405060708090a").to_vec());
        assert_eq!(buf.read_u8(Cursor), 1);
        assert_eq!(buf.read_u16(Cursor, Big), 0x0203);
        assert_eq!(buf.read_u32(Cursor, Little), 0x07060504);
        assert_eq!(buf.offset(), 7);
        assert_eq!(buf.read_u16(At(0), Big), 0x0102);
        assert_eq!(buf.offset(), 7);
    }

    #[test]
    fn read_never_grows() {
        let mut buf = SmartBuffer::from_size(4);
        buf.read_u32(Cursor, Little);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.offset(), 4);
    }

    #[test]
    #[should_panic]
    fn read_past_end() {
        let mut buf = SmartBuffer::from_size(4);
        buf.read_u32(At(1), Little);
    }

    #[test]
    fn growth_is_exact_and_preserves_bytes() {
        let mut buf = SmartBuffer::from_buffer(hex!("01020304").to_vec());
        buf.write_u32(0xdeadbeef, At(6), Big);
        assert_eq!(buf.len(), 10);
        assert_eq!(buf.view(), &hex!("010203040000deadbeef"));
        assert_eq!(buf.offset(), 0);
    }

    #[test]
    fn growth_from_cursor() {
        let mut buf = SmartBuffer::from_size(2);
        buf.set_offset(1);
        buf.write_u16(0xffff, Cursor, Little);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.offset(), 3);
        buf.write_u8(1, Cursor);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.view(), &hex!("00ffff01"));
    }

    #[test]
    fn write_inside_storage_does_not_grow() {
        let mut buf = SmartBuffer::from_size(16);
        buf.write_u64(u64::MAX, At(8), Little);
        assert_eq!(buf.len(), 16);
    }

    #[test]
    fn ensure_capacity_is_anchored_at_cursor() {
        let mut buf = SmartBuffer::from_size(4);
        buf.set_offset(3);
        buf.ensure_capacity(1);
        assert_eq!(buf.len(), 4);
        buf.ensure_capacity(5);
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.offset(), 3);
    }

    #[test]
    fn endianness() {
        let mut buf = SmartBuffer::from_size(0);
        buf.write_u32(0x12345678, Cursor, Little);
        buf.write_u32(0x12345678, Cursor, Big);
        assert_eq!(buf.view(), &hex!("7856341212345678"));
    }

    #[test]
    fn default_order_is_little() {
        let mut buf = SmartBuffer::from_size(0);
        buf.write_i16(-2, Cursor, Default::default());
        assert_eq!(buf.view(), &hex!("feff"));
    }

    #[test]
    fn set_view_resets_cursor() {
        let mut buf = SmartBuffer::new();
        buf.write_u32(1, Cursor, Little);
        buf.set_view(vec![5, 6]);
        assert_eq!(buf.offset(), 0);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.read_u8(Cursor), 5);
    }

    #[test]
    fn view_mut_patches_in_place() {
        let mut buf = SmartBuffer::from_size(2);
        buf.view_mut()[1] = 0x80;
        assert_eq!(buf.read_i8(At(1)), -128);
    }

    #[test_case(0; "zero")]
    #[test_case(i8::MIN; "min")]
    #[test_case(i8::MAX; "max")]
    #[test_case(-1; "minus one")]
    fn round_trip_i8(value: i8) {
        let mut buf = SmartBuffer::new();
        buf.write_i8(value, At(3));
        assert_eq!(buf.read_i8(At(3)), value);
    }

    #[test_case(0; "zero")]
    #[test_case(u8::MAX; "max")]
    fn round_trip_u8(value: u8) {
        let mut buf = SmartBuffer::new();
        buf.write_u8(value, At(3));
        assert_eq!(buf.read_u8(At(3)), value);
    }

    #[test_case(0, Little; "zero little")]
    #[test_case(i16::MIN, Little; "min little")]
    #[test_case(i16::MAX, Big; "max big")]
    #[test_case(-1, Big; "minus one big")]
    fn round_trip_i16(value: i16, order: Endianness) {
        let mut buf = SmartBuffer::from_size(0);
        buf.write_i16(value, At(1), order);
        assert_eq!(buf.read_i16(At(1), order), value);
    }

    #[test_case(0, Big; "zero big")]
    #[test_case(u16::MAX, Little; "max little")]
    #[test_case(0x0102, Big; "mixed big")]
    fn round_trip_u16(value: u16, order: Endianness) {
        let mut buf = SmartBuffer::from_size(0);
        buf.write_u16(value, At(1), order);
        assert_eq!(buf.read_u16(At(1), order), value);
    }

    #[test_case(i32::MIN, Little; "min little")]
    #[test_case(i32::MAX, Big; "max big")]
    #[test_case(-1, Little; "minus one little")]
    #[test_case(123456789, Big; "mixed big")]
    fn round_trip_i32(value: i32, order: Endianness) {
        let mut buf = SmartBuffer::new();
        buf.write_i32(value, Cursor, order);
        buf.set_offset(0);
        assert_eq!(buf.read_i32(Cursor, order), value);
    }

    #[test_case(0, Little; "zero little")]
    #[test_case(u32::MAX, Big; "max big")]
    #[test_case(987654321, Little; "mixed little")]
    fn round_trip_u32(value: u32, order: Endianness) {
        let mut buf = SmartBuffer::new();
        buf.write_u32(value, Cursor, order);
        buf.set_offset(0);
        assert_eq!(buf.read_u32(Cursor, order), value);
    }

    #[test_case(i64::MIN, Big; "min big")]
    #[test_case(i64::MAX, Little; "max little")]
    #[test_case(-1, Big; "minus one big")]
    fn round_trip_i64(value: i64, order: Endianness) {
        let mut buf = SmartBuffer::new();
        buf.write_i64(value, At(2), order);
        assert_eq!(buf.read_i64(At(2), order), value);
    }

    #[test_case(u64::MAX, Big; "max big")]
    #[test_case(0, Little; "zero little")]
    fn round_trip_u64(value: u64, order: Endianness) {
        let mut buf = SmartBuffer::new();
        buf.write_u64(value, At(2), order);
        assert_eq!(buf.read_u64(At(2), order), value);
    }

    #[test_case(0.0, Little; "zero little")]
    #[test_case(f32::MIN, Big; "min big")]
    #[test_case(f32::MAX, Little; "max little")]
    #[test_case(-1.0, Big; "minus one big")]
    fn round_trip_f32(value: f32, order: Endianness) {
        let mut buf = SmartBuffer::new();
        buf.write_f32(value, At(4), order);
        assert_eq!(buf.read_f32(At(4), order), value);
    }

    #[test_case(0.0, Big; "zero big")]
    #[test_case(f64::MIN, Little; "min little")]
    #[test_case(f64::MAX, Big; "max big")]
    #[test_case(-1.0, Little; "minus one little")]
    fn round_trip_f64(value: f64, order: Endianness) {
        let mut buf = SmartBuffer::new();
        buf.write_f64(value, At(4), order);
        assert_eq!(buf.read_f64(At(4), order), value);
    }

    #[test]
    fn end_to_end() {
        let mut buf = SmartBuffer::new();
        buf.write_u8(10, Cursor);
        buf.write_string_nt("Hello", Cursor);
        buf.write_f32(1099.99, Cursor, Little);
        assert_eq!(buf.offset(), 11);

        buf.set_offset(0);
        assert_eq!(buf.read_u8(Cursor), 10);
        assert_eq!(buf.read_string_nt(Cursor), "Hello");
        assert!((buf.read_f32(Cursor, Little) - 1099.99).abs() < 1e-3);
        assert_eq!(buf.offset(), 11);
    }

    #[test]
    fn mixed_payload() {
        let mut buf = SmartBuffer::new();
        buf.write_string("Hello", Cursor);
        buf.write_i8(42, Cursor);
        buf.write_i16(12345, Cursor, Little);
        buf.write_u16(54321, Cursor, Little);
        buf.write_i32(123456789, Cursor, Little);
        buf.write_u32(987654321, Cursor, Little);
        buf.write_string_nt("End", Cursor);
        assert_eq!(buf.len(), 5 + 1 + 2 + 2 + 4 + 4 + 4);

        buf.set_offset(5);
        assert_eq!(buf.read_i8(Cursor), 42);
        assert_eq!(buf.read_i16(Cursor, Little), 12345);
        assert_eq!(buf.read_u16(Cursor, Little), 54321);
        assert_eq!(buf.read_i32(Cursor, Little), 123456789);
        assert_eq!(buf.read_u32(Cursor, Little), 987654321);
        assert_eq!(buf.read_string_nt(Cursor), "End");
        assert_eq!(buf.offset(), buf.len());
    }
}
