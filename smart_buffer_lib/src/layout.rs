use crate::constants::MAX_ENCODE_OFFSET;
use crate::error::{ErrorType, Result};
use crate::field::{FieldKind, FieldValue};
use crate::general::endianness::Endianness;
use crate::general::offset::Offset;
use crate::smart_buffer::SmartBuffer;
use std::str::FromStr;

/// parses a comma separated list of field kinds, e.g. `u8,strnt,f32`
pub fn parse_layout(layout: &str) -> Result<Vec<FieldKind>> {
    layout.split(',').map(FieldKind::from_str).collect()
}

/// Encodes one value per layout field, back to back, starting at byte `start`.
///
/// The bytes before `start` are zero, `start` may not exceed MAX_ENCODE_OFFSET.
pub fn encode_fields(layout: &[FieldKind], values: &[&str], start: usize, order: Endianness) -> Result<Vec<u8>> {
    if layout.len() != values.len() {
        return Err(ErrorType::ValueCountMismatch(layout.len(), values.len()));
    }
    if start > MAX_ENCODE_OFFSET {
        return Err(ErrorType::OffsetTooLarge(start));
    }

    let mut buffer = SmartBuffer::from_size(start);
    buffer.set_offset(start);
    for (kind, text) in layout.iter().zip(values) {
        let value = FieldValue::parse(*kind, text)?;
        let position = buffer.offset();
        buffer.write_field(&value, Offset::Cursor, order);
        log_field_encoded!(position, value);
    }
    Ok(buffer.into_inner())
}

/// Decodes the layout fields back to back from byte `start`,
/// returning each value with the offset it was read from.
pub fn decode_fields(bytes: Vec<u8>, layout: &[FieldKind], start: usize, order: Endianness) -> Result<Vec<(usize, FieldValue)>> {
    let mut buffer = SmartBuffer::from_buffer(bytes);
    buffer.set_offset(start);

    let mut fields = Vec::with_capacity(layout.len());
    for kind in layout {
        let position = buffer.offset();
        if let Some(width) = kind.width() {
            if position.checked_add(width).map_or(true, |end| end > buffer.len()) {
                return Err(ErrorType::UnexpectedEnd(*kind, position));
            }
        }
        let value = buffer.read_field(*kind, Offset::Cursor, order);
        log_field_decoded!(position, value);
        fields.push((position, value));
    }
    Ok(fields)
}
