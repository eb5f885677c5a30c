//! One-byte-per-character string encoding for SmartBuffer.
//!
//! Each character is stored as the low 8 bits of its code point, and each byte
//! decodes to the character with that code point (Latin-1). No length prefix is
//! written; null-terminated strings end with a single zero byte.

use crate::general::byte_view::ByteView;
use crate::general::offset::Offset;
use crate::smart_buffer::SmartBuffer;

/// Reads characters from `at` until the end of the storage.
///
/// With `nt`, reading stops at the first zero byte. The zero byte is not part of the result
/// but counts as consumed, so a cursor-relative read leaves the cursor behind it.
pub fn read_string(buffer: &mut SmartBuffer, at: Offset, nt: bool) -> String {
    let start = at.resolve(buffer.offset());
    let view = buffer.view();
    let mut position = start;
    let mut value = String::new();

    while position < view.len() {
        let byte = view.get_u8(position);
        position += 1;
        if nt && byte == 0 {
            break;
        }
        value.push(char::from(byte));
    }

    buffer.advance(at, position);
    value
}

/// Writes `value` at `at`, one byte per character, growing the storage to fit.
///
/// With `nt`, a zero byte follows the characters.
pub fn write_string(buffer: &mut SmartBuffer, value: &str, at: Offset, nt: bool) {
    let start = at.resolve(buffer.offset());
    let end = start + value.chars().count() + usize::from(nt);
    if end > start {
        buffer.grow_to(end);
    }

    let view = buffer.view_mut();
    for (i, c) in value.chars().enumerate() {
        view.set_u8(start + i, c as u32 as u8);
    }
    if nt {
        view.set_u8(end - 1, 0);
    }

    buffer.advance(at, end);
}
