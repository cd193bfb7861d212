//! Argument binding: sizing reader output by length modifier and storing it
//! into caller-owned slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::readers::RawValue;
use crate::types::{CalendarDate, ConversionSpec, LengthModifier, RgbColor, ScanError, Specifier};

//  Bound values

/// A converted value, already narrowed to the size its conversion selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// A `%c` block, exactly as many characters as the width asked for.
    Chars(String),
    Text(String),
    Date(CalendarDate),
    Color(RgbColor),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Chars(_) => "chars",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Color(_) => "color",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Chars(s) | Self::Text(s) => write!(f, "{s:?}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Color(c) => write!(f, "{} {c}", c.to_hex()),
        }
    }
}

/// Narrow or widen `raw` to the slot size selected by `spec`.
///
/// `j`, `z` and `t` are parsed but size like no modifier at all.
pub fn bind(spec: &ConversionSpec, raw: RawValue) -> Value {
    use LengthModifier as L;

    match raw {
        RawValue::Signed(v) => match spec.length {
            L::SignedByte => Value::I8(v as i8),
            L::Short => Value::I16(v as i16),
            L::Long | L::LongLong => Value::I64(v),
            L::None | L::IntMaxT | L::SizeT | L::PtrDiffT => Value::I32(v as i32),
        },
        RawValue::Unsigned(v) => match spec.length {
            L::SignedByte => Value::U8(v as u8),
            L::Short => Value::U16(v as u16),
            L::Long | L::LongLong => Value::U64(v),
            L::None | L::IntMaxT | L::SizeT | L::PtrDiffT => Value::U32(v as u32),
        },
        RawValue::Float(v) => match spec.length {
            L::Long | L::LongLong => Value::F64(v),
            _ => Value::F32(v as f32),
        },
        RawValue::Chars(s) => Value::Chars(s),
        RawValue::Text(s) => Value::Text(s),
        RawValue::Date(d) => Value::Date(d),
        RawValue::Color(c) => Value::Color(c),
    }
}

//  Output slots

/// A typed, mutable destination for one non-suppressed conversion.
///
/// Integer slots also accept the same-width value of opposite signedness,
/// stored bit for bit.
#[derive(Debug)]
pub enum Slot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    /// Single character, for a one-character `%c` block.
    Char(&'a mut char),
    /// Fixed buffer for a `%c` block. Positions past the block are untouched.
    Chars(&'a mut [char]),
    /// Owned text for `%s` and `%L`; also accepts a `%c` block.
    Text(&'a mut String),
    Date(&'a mut CalendarDate),
    Color(&'a mut RgbColor),
}

impl Slot<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::Chars(_) => "chars",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Color(_) => "color",
        }
    }

    /// Store `value`; `index` is the slot position, used in errors.
    pub fn assign(&mut self, index: usize, value: Value) -> Result<(), ScanError> {
        match (self, value) {
            (Slot::I8(d), Value::I8(v)) => **d = v,
            (Slot::I8(d), Value::U8(v)) => **d = v as i8,
            (Slot::U8(d), Value::U8(v)) => **d = v,
            (Slot::U8(d), Value::I8(v)) => **d = v as u8,
            (Slot::I16(d), Value::I16(v)) => **d = v,
            (Slot::I16(d), Value::U16(v)) => **d = v as i16,
            (Slot::U16(d), Value::U16(v)) => **d = v,
            (Slot::U16(d), Value::I16(v)) => **d = v as u16,
            (Slot::I32(d), Value::I32(v)) => **d = v,
            (Slot::I32(d), Value::U32(v)) => **d = v as i32,
            (Slot::U32(d), Value::U32(v)) => **d = v,
            (Slot::U32(d), Value::I32(v)) => **d = v as u32,
            (Slot::I64(d), Value::I64(v)) => **d = v,
            (Slot::I64(d), Value::U64(v)) => **d = v as i64,
            (Slot::U64(d), Value::U64(v)) => **d = v,
            (Slot::U64(d), Value::I64(v)) => **d = v as u64,
            (Slot::F32(d), Value::F32(v)) => **d = v,
            (Slot::F64(d), Value::F64(v)) => **d = v,
            (Slot::Char(d), Value::Chars(block)) => {
                let mut chars = block.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => **d = c,
                    _ => {
                        return Err(ScanError::BufferTooSmall {
                            index,
                            needed: block.chars().count(),
                            capacity: 1,
                        });
                    }
                }
            }
            (Slot::Chars(buf), Value::Chars(block)) => {
                let needed = block.chars().count();
                if needed > buf.len() {
                    return Err(ScanError::BufferTooSmall {
                        index,
                        needed,
                        capacity: buf.len(),
                    });
                }
                for (dst, c) in buf.iter_mut().zip(block.chars()) {
                    *dst = c;
                }
            }
            (Slot::Text(d), Value::Text(s) | Value::Chars(s)) => **d = s,
            (Slot::Date(d), Value::Date(v)) => **d = v,
            (Slot::Color(d), Value::Color(v)) => **d = v,
            (slot, value) => {
                return Err(ScanError::SlotMismatch {
                    index,
                    expected: value.kind(),
                    found: slot.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Human name of the slot a conversion binds to, for diagnostics.
pub fn slot_kind(spec: &ConversionSpec) -> &'static str {
    use LengthModifier as L;

    match (spec.specifier, spec.length) {
        (Specifier::Integer, L::SignedByte) => "i8",
        (Specifier::Integer, L::Short) => "i16",
        (Specifier::Integer, L::Long | L::LongLong) => "i64",
        (Specifier::Integer, _) => "i32",
        (Specifier::Hex | Specifier::Binary, L::SignedByte) => "u8",
        (Specifier::Hex | Specifier::Binary, L::Short) => "u16",
        (Specifier::Hex | Specifier::Binary, L::Long | L::LongLong) => "u64",
        (Specifier::Hex | Specifier::Binary, _) => "u32",
        (Specifier::Float, L::Long | L::LongLong) => "f64",
        (Specifier::Float, _) => "f32",
        (Specifier::CharBlock, _) => "chars",
        (Specifier::String | Specifier::Line, _) => "text",
        (Specifier::Date, _) => "date",
        (Specifier::Color, _) => "color",
    }
}
