/// # Arguments
/// * `position` - byte offset of the field
/// * `value` - of type smart_buffer_lib::field::FieldValue
macro_rules! log_field_encoded {
    ($position:expr, $value:expr) => {
        log::debug!("encoded {} {} at offset {}", $value.kind(), $value, $position);
    };
}

/// # Arguments
/// * `position` - byte offset of the field
/// * `value` - of type smart_buffer_lib::field::FieldValue
macro_rules! log_field_decoded {
    ($position:expr, $value:expr) => {
        log::debug!("decoded {} {} at offset {}", $value.kind(), $value, $position);
    };
}
