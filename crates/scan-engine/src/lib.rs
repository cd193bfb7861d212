//! Pure-Rust formatted input engine in the spirit of `scanf`.
//!
//! A format string is compiled into directives (literals, whitespace
//! matches, conversions) and run against a pushback-capable
//! [`InputCursor`]. Besides the classic `d x f c s` conversions the engine
//! reads binary numbers (`%b`), whole lines (`%L`), calendar dates (`%D`)
//! and `#RRGGBB` colors (`%R`).
//!
//! ```
//! use scan_engine::{InputCursor, Slot, scan};
//!
//! let mut cursor = InputCursor::from("age: 42 #FF8000");
//! let mut age = 0i32;
//! let mut color = scan_engine::RgbColor::default();
//! let n = scan(&mut cursor, "age: %d %R", &mut [Slot::I32(&mut age), Slot::Color(&mut color)]);
//! assert_eq!(n, 2);
//! assert_eq!((age, color.green), (42, 128));
//! ```

pub mod bind;
pub mod cursor;
pub mod engine;
pub mod format;
pub mod readers;
pub mod types;

pub use bind::{Slot, Value, bind, slot_kind};
pub use cursor::{ByteChars, InputCursor, is_space};
pub use engine::{Format, ScanReport, scan, scan_report, scan_values, sscan};
pub use format::compile;
pub use readers::RawValue;
pub use types::{
    CalendarDate, ConversionSpec, Directive, LengthModifier, RgbColor, ScanError, Specifier,
    days_in_month, is_leap_year,
};
