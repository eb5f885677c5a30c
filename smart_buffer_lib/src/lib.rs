#[macro_use]
mod logger;

pub mod constants;
pub mod error;
pub mod general;
pub mod helper;
pub mod field;
pub mod layout;
pub mod smart_buffer;
pub mod string_codec;
