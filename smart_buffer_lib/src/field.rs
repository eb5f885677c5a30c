use crate::error::{ErrorType, Result};
use crate::general::endianness::Endianness;
use crate::general::offset::Offset;
use crate::smart_buffer::SmartBuffer;
use std::fmt::{self, Display, Formatter};
use std::mem::size_of;
use std::str::FromStr;

/// All kinds of fields a SmartBuffer can read and write
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    /// characters up to the end of the buffer
    Str,
    /// zero terminated characters
    StrNt,
}

const ALL_KINDS: [FieldKind; 12] = [
    FieldKind::U8,
    FieldKind::I8,
    FieldKind::U16,
    FieldKind::I16,
    FieldKind::U32,
    FieldKind::I32,
    FieldKind::U64,
    FieldKind::I64,
    FieldKind::F32,
    FieldKind::F64,
    FieldKind::Str,
    FieldKind::StrNt,
];

impl FieldKind {

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::U8 => "u8",
            FieldKind::I8 => "i8",
            FieldKind::U16 => "u16",
            FieldKind::I16 => "i16",
            FieldKind::U32 => "u32",
            FieldKind::I32 => "i32",
            FieldKind::U64 => "u64",
            FieldKind::I64 => "i64",
            FieldKind::F32 => "f32",
            FieldKind::F64 => "f64",
            FieldKind::Str => "str",
            FieldKind::StrNt => "strnt",
        }
    }

    /// byte width of numeric kinds, None for strings
    pub fn width(self) -> Option<usize> {
        match self {
            FieldKind::U8 => Some(size_of::<u8>()),
            FieldKind::I8 => Some(size_of::<i8>()),
            FieldKind::U16 => Some(size_of::<u16>()),
            FieldKind::I16 => Some(size_of::<i16>()),
            FieldKind::U32 => Some(size_of::<u32>()),
            FieldKind::I32 => Some(size_of::<i32>()),
            FieldKind::U64 => Some(size_of::<u64>()),
            FieldKind::I64 => Some(size_of::<i64>()),
            FieldKind::F32 => Some(size_of::<f32>()),
            FieldKind::F64 => Some(size_of::<f64>()),
            FieldKind::Str | FieldKind::StrNt => None,
        }
    }
}

impl FromStr for FieldKind {
    type Err = ErrorType;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ALL_KINDS.iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ErrorType::UnknownFieldKind(s.to_string()))
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One decoded field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    StrNt(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::U8(_) => FieldKind::U8,
            FieldValue::I8(_) => FieldKind::I8,
            FieldValue::U16(_) => FieldKind::U16,
            FieldValue::I16(_) => FieldKind::I16,
            FieldValue::U32(_) => FieldKind::U32,
            FieldValue::I32(_) => FieldKind::I32,
            FieldValue::U64(_) => FieldKind::U64,
            FieldValue::I64(_) => FieldKind::I64,
            FieldValue::F32(_) => FieldKind::F32,
            FieldValue::F64(_) => FieldKind::F64,
            FieldValue::Str(_) => FieldKind::Str,
            FieldValue::StrNt(_) => FieldKind::StrNt,
        }
    }

    /// parses `text` as a value of `kind`
    pub fn parse(kind: FieldKind, text: &str) -> Result<FieldValue> {
        fn number<T: FromStr>(kind: FieldKind, text: &str) -> Result<T> {
            text.trim().parse().map_err(|_| ErrorType::InvalidFieldValue(kind, text.to_string()))
        }

        Ok(match kind {
            FieldKind::U8 => FieldValue::U8(number(kind, text)?),
            FieldKind::I8 => FieldValue::I8(number(kind, text)?),
            FieldKind::U16 => FieldValue::U16(number(kind, text)?),
            FieldKind::I16 => FieldValue::I16(number(kind, text)?),
            FieldKind::U32 => FieldValue::U32(number(kind, text)?),
            FieldKind::I32 => FieldValue::I32(number(kind, text)?),
            FieldKind::U64 => FieldValue::U64(number(kind, text)?),
            FieldKind::I64 => FieldValue::I64(number(kind, text)?),
            FieldKind::F32 => FieldValue::F32(number(kind, text)?),
            FieldKind::F64 => FieldValue::F64(number(kind, text)?),
            FieldKind::Str => FieldValue::Str(text.to_string()),
            FieldKind::StrNt => {
                if text.contains('\0') {
                    return Err(ErrorType::InvalidFieldValue(kind, text.to_string()));
                }
                FieldValue::StrNt(text.to_string())
            }
        })
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::U8(v) => write!(f, "{}", v),
            FieldValue::I8(v) => write!(f, "{}", v),
            FieldValue::U16(v) => write!(f, "{}", v),
            FieldValue::I16(v) => write!(f, "{}", v),
            FieldValue::U32(v) => write!(f, "{}", v),
            FieldValue::I32(v) => write!(f, "{}", v),
            FieldValue::U64(v) => write!(f, "{}", v),
            FieldValue::I64(v) => write!(f, "{}", v),
            FieldValue::F32(v) => write!(f, "{}", v),
            FieldValue::F64(v) => write!(f, "{}", v),
            FieldValue::Str(v) | FieldValue::StrNt(v) => write!(f, "{:?}", v),
        }
    }
}

impl SmartBuffer {
    pub fn read_field(&mut self, kind: FieldKind, at: Offset, order: Endianness) -> FieldValue {
        match kind {
            FieldKind::U8 => FieldValue::U8(self.read_u8(at)),
            FieldKind::I8 => FieldValue::I8(self.read_i8(at)),
            FieldKind::U16 => FieldValue::U16(self.read_u16(at, order)),
            FieldKind::I16 => FieldValue::I16(self.read_i16(at, order)),
            FieldKind::U32 => FieldValue::U32(self.read_u32(at, order)),
            FieldKind::I32 => FieldValue::I32(self.read_i32(at, order)),
            FieldKind::U64 => FieldValue::U64(self.read_u64(at, order)),
            FieldKind::I64 => FieldValue::I64(self.read_i64(at, order)),
            FieldKind::F32 => FieldValue::F32(self.read_f32(at, order)),
            FieldKind::F64 => FieldValue::F64(self.read_f64(at, order)),
            FieldKind::Str => FieldValue::Str(self.read_string(at)),
            FieldKind::StrNt => FieldValue::StrNt(self.read_string_nt(at)),
        }
    }

    pub fn write_field(&mut self, value: &FieldValue, at: Offset, order: Endianness) {
        match value {
            FieldValue::U8(v) => self.write_u8(*v, at),
            FieldValue::I8(v) => self.write_i8(*v, at),
            FieldValue::U16(v) => self.write_u16(*v, at, order),
            FieldValue::I16(v) => self.write_i16(*v, at, order),
            FieldValue::U32(v) => self.write_u32(*v, at, order),
            FieldValue::I32(v) => self.write_i32(*v, at, order),
            FieldValue::U64(v) => self.write_u64(*v, at, order),
            FieldValue::I64(v) => self.write_i64(*v, at, order),
            FieldValue::F32(v) => self.write_f32(*v, at, order),
            FieldValue::F64(v) => self.write_f64(*v, at, order),
            FieldValue::Str(v) => self.write_string(v, at),
            FieldValue::StrNt(v) => self.write_string_nt(v, at),
        }
    }
}
