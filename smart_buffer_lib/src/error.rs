use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result, io
};
use crate::field::FieldKind;

pub type Result<T> = result::Result<T, ErrorType>;

/// Recoverable errors around the buffer: file io and field layout parsing.
///
/// Out-of-range access on the buffer itself is not represented here, it panics.
#[derive(Debug)]
pub enum ErrorType {
    IOError(io::Error),
    UnknownFieldKind(String),
    InvalidFieldValue(FieldKind, String),
    /// expected, actual
    ValueCountMismatch(usize, usize),
    /// a fixed-width field starting at the offset runs past the end of the input
    UnexpectedEnd(FieldKind, usize),
    OffsetTooLarge(usize),
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::IOError(e) => write!(
                fmt,
                "An IO Error occurred, Reason: {:?}.",
                e
            ),
            ErrorType::UnknownFieldKind(name) => write!(
                fmt,
                "Unknown field kind: {}",
                name
            ),
            ErrorType::InvalidFieldValue(kind, value) => write!(
                fmt,
                "Value {:?} can not be stored as {}",
                value,
                kind
            ),
            ErrorType::ValueCountMismatch(expected, actual) => write!(
                fmt,
                "Layout has {} fields but {} values were given",
                expected,
                actual
            ),
            ErrorType::UnexpectedEnd(kind, offset) => write!(
                fmt,
                "Field {} at offset {} runs past the end of the input",
                kind,
                offset
            ),
            ErrorType::OffsetTooLarge(offset) => write!(
                fmt,
                "Start offset {} is too large",
                offset
            ),
        }
    }
}

impl Error for ErrorType {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErrorType::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ErrorType {
    fn from(inner: io::Error) -> ErrorType {
        ErrorType::IOError(inner)
    }
}
