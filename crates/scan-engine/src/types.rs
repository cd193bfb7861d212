//! Engine types: directives, structured values and the failure taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

//  Length modifier

/// Storage-size token between the field width and the specifier letter.
///
/// Only `None`, `Short`, `SignedByte`, `Long` and `LongLong` change how a
/// value is sized. `IntMaxT`, `SizeT` and `PtrDiffT` are accepted by the
/// compiler but bind exactly like `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthModifier {
    #[default]
    None,
    /// `h`
    Short,
    /// `hh`
    SignedByte,
    /// `l`
    Long,
    /// `ll`
    LongLong,
    /// `j`
    IntMaxT,
    /// `z`
    SizeT,
    /// `t`
    PtrDiffT,
}

impl LengthModifier {
    /// The format-string spelling of this modifier.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Short => "h",
            Self::SignedByte => "hh",
            Self::Long => "l",
            Self::LongLong => "ll",
            Self::IntMaxT => "j",
            Self::SizeT => "z",
            Self::PtrDiffT => "t",
        }
    }
}

//  Specifier

/// The nine conversions understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specifier {
    /// `%d`
    Integer,
    /// `%x`
    Hex,
    /// `%f`
    Float,
    /// `%c`
    CharBlock,
    /// `%s`
    String,
    /// `%b`
    Binary,
    /// `%L`
    Line,
    /// `%D`
    Date,
    /// `%R`
    Color,
}

impl Specifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Integer),
            'x' => Some(Self::Hex),
            'f' => Some(Self::Float),
            'c' => Some(Self::CharBlock),
            's' => Some(Self::String),
            'b' => Some(Self::Binary),
            'L' => Some(Self::Line),
            'D' => Some(Self::Date),
            'R' => Some(Self::Color),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Integer => 'd',
            Self::Hex => 'x',
            Self::Float => 'f',
            Self::CharBlock => 'c',
            Self::String => 's',
            Self::Binary => 'b',
            Self::Line => 'L',
            Self::Date => 'D',
            Self::Color => 'R',
        }
    }
}

//  Directives

/// One compiled unit of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// Exact single-character match.
    Literal { expected: char },
    /// Zero or more input whitespace characters.
    WhitespaceMatch,
    Conversion(ConversionSpec),
    /// `%` followed by an unknown letter (or nothing). Consumes no input.
    NoOp { specifier: Option<char> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSpec {
    pub suppressed: bool,
    pub width: Option<u32>,
    pub length: LengthModifier,
    pub specifier: Specifier,
}

impl fmt::Display for ConversionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.suppressed {
            f.write_str("*")?;
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        write!(f, "{}{}", self.length.token(), self.specifier.as_char())
    }
}

//  Calendar date

/// A validated `DD/MM/YYYY` (or `DD-MM-YYYY`) date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` when the month is out of range.
pub fn days_in_month(month: u32, year: u32) -> Option<u32> {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS[(month - 1) as usize]),
        _ => None,
    }
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, ScanError> {
        match days_in_month(month, year) {
            Some(max) if (1..=max).contains(&day) => Ok(Self { day, month, year }),
            _ => Err(ScanError::InvalidDate { day, month, year }),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

//  Color

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    /// Render as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

//  Error

/// Why a conversion (or the whole scan) stopped.
///
/// Readers restore the cursor before returning any of these, so the
/// dispatch loop only has to record the error and halt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("end of input")]
    EndOfInput,

    #[error("matching failure at {}", describe_found(.found))]
    MatchFailure { found: Option<char> },

    #[error("field width exhausted before a complete value")]
    WidthExhausted,

    #[error("malformed {0}")]
    Structural(&'static str),

    #[error("invalid calendar date: day {day}, month {month}, year {year}")]
    InvalidDate { day: u32, month: u32, year: u32 },

    #[error("character block needs {wanted} characters, input ended after {got}")]
    ShortBlock { wanted: usize, got: usize },

    #[error("no output slot for conversion #{index} (%{specifier})")]
    MissingSlot { index: usize, specifier: char },

    #[error("output slot #{index} is {found}, conversion produces {expected}")]
    SlotMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("output slot #{index} holds {capacity} characters, block has {needed}")]
    BufferTooSmall {
        index: usize,
        needed: usize,
        capacity: usize,
    },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".into(),
    }
}

impl ScanError {
    /// Failures caused by the caller's slot list rather than by the input.
    pub fn is_binding_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSlot { .. } | Self::SlotMismatch { .. } | Self::BufferTooSmall { .. }
        )
    }
}
