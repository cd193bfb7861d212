//! Dispatch loop: runs compiled directives against a cursor and binds the
//! converted values.

use std::str::Chars;

use serde::Serialize;
use tracing::{debug, trace};

use crate::bind::{Slot, Value, bind};
use crate::cursor::InputCursor;
use crate::format::compile;
use crate::readers;
use crate::types::{ConversionSpec, Directive, ScanError};

//  Report

/// Outcome of one scan call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    /// Conversions whose value was stored (suppressed ones excluded).
    pub assigned: usize,
    /// Conversions that succeeded, suppressed ones included.
    pub conversions: usize,
    /// Why the scan stopped early; `None` when every directive ran.
    #[serde(serialize_with = "serialize_halt")]
    pub halted: Option<ScanError>,
}

fn serialize_halt<S: serde::Serializer>(
    halted: &Option<ScanError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match halted {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ScanReport {
    /// The classic scanf return value: `-1` when input ran out before any
    /// conversion succeeded, otherwise the assigned count.
    pub fn status(&self) -> i32 {
        match self.halted {
            Some(ScanError::EndOfInput) if self.conversions == 0 => -1,
            _ => i32::try_from(self.assigned).unwrap_or(i32::MAX),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.halted.is_none()
    }
}

//  Sinks

/// Where bound values go.
trait Sink {
    fn accept(&mut self, spec: &ConversionSpec, value: Value) -> Result<(), ScanError>;
}

/// Positional caller-owned slots.
struct SlotSink<'s, 'a> {
    slots: &'s mut [Slot<'a>],
    next: usize,
}

impl Sink for SlotSink<'_, '_> {
    fn accept(&mut self, spec: &ConversionSpec, value: Value) -> Result<(), ScanError> {
        let index = self.next;
        let slot = self.slots.get_mut(index).ok_or(ScanError::MissingSlot {
            index,
            specifier: spec.specifier.as_char(),
        })?;
        slot.assign(index, value)?;
        self.next += 1;
        Ok(())
    }
}

impl Sink for Vec<Value> {
    fn accept(&mut self, _spec: &ConversionSpec, value: Value) -> Result<(), ScanError> {
        self.push(value);
        Ok(())
    }
}

//  Format

/// A compiled format string, reusable across scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    directives: Vec<Directive>,
}

impl Format {
    pub fn parse(format: &str) -> Self {
        Self {
            directives: compile(format),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Scan into positional slots.
    pub fn scan_report<S>(&self, cursor: &mut InputCursor<S>, slots: &mut [Slot<'_>]) -> ScanReport
    where
        S: Iterator<Item = char>,
    {
        let mut sink = SlotSink { slots, next: 0 };
        run(cursor, &self.directives, &mut sink)
    }

    /// Scan and return the bound values instead of writing slots.
    pub fn scan_values<S>(&self, cursor: &mut InputCursor<S>) -> (Vec<Value>, ScanReport)
    where
        S: Iterator<Item = char>,
    {
        let mut values = Vec::new();
        let report = run(cursor, &self.directives, &mut values);
        (values, report)
    }
}

fn run<S, K>(cursor: &mut InputCursor<S>, directives: &[Directive], sink: &mut K) -> ScanReport
where
    S: Iterator<Item = char>,
    K: Sink,
{
    let mut report = ScanReport::default();

    for (index, directive) in directives.iter().enumerate() {
        trace!(index, ?directive, "directive");
        let outcome = match directive {
            Directive::Literal { expected } => match cursor.next() {
                Some(c) if c == *expected => Ok(()),
                Some(c) => {
                    cursor.push_back(c);
                    Err(ScanError::MatchFailure { found: Some(c) })
                }
                None => Err(ScanError::EndOfInput),
            },
            Directive::WhitespaceMatch => {
                cursor.skip_space();
                Ok(())
            }
            Directive::NoOp { specifier } => {
                debug!(index, ?specifier, "unrecognized conversion ignored");
                Ok(())
            }
            Directive::Conversion(spec) => convert(cursor, spec, sink, &mut report),
        };

        if let Err(e) = outcome {
            debug!(index, error = %e, assigned = report.assigned, "scan halted");
            report.halted = Some(e);
            break;
        }
    }

    report
}

fn convert<S, K>(
    cursor: &mut InputCursor<S>,
    spec: &ConversionSpec,
    sink: &mut K,
    report: &mut ScanReport,
) -> Result<(), ScanError>
where
    S: Iterator<Item = char>,
    K: Sink,
{
    let raw = readers::read(cursor, spec.specifier, spec.width)?;
    report.conversions += 1;
    if spec.suppressed {
        return Ok(());
    }
    sink.accept(spec, bind(spec, raw))?;
    report.assigned += 1;
    Ok(())
}

//  Entry points

/// Scan `cursor` against `format`, storing converted values positionally in
/// `slots`. Returns the number of values stored.
pub fn scan<S>(cursor: &mut InputCursor<S>, format: &str, slots: &mut [Slot<'_>]) -> usize
where
    S: Iterator<Item = char>,
{
    scan_report(cursor, format, slots).assigned
}

/// Like [`scan`] but reports why the scan stopped.
pub fn scan_report<S>(
    cursor: &mut InputCursor<S>,
    format: &str,
    slots: &mut [Slot<'_>],
) -> ScanReport
where
    S: Iterator<Item = char>,
{
    Format::parse(format).scan_report(cursor, slots)
}

/// Scan and collect bound values instead of writing caller slots.
pub fn scan_values<S>(cursor: &mut InputCursor<S>, format: &str) -> (Vec<Value>, ScanReport)
where
    S: Iterator<Item = char>,
{
    Format::parse(format).scan_values(cursor)
}

/// One-shot scan of an in-memory string.
pub fn sscan(input: &str, format: &str, slots: &mut [Slot<'_>]) -> usize {
    let mut cursor: InputCursor<Chars<'_>> = InputCursor::from(input);
    scan(&mut cursor, format, slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halts_at_first_failure() {
        let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
        let mut cur = InputCursor::from("1 2 x 3");
        let report = scan_report(
            &mut cur,
            "%d %d %d",
            &mut [Slot::I32(&mut a), Slot::I32(&mut b), Slot::I32(&mut c)],
        );
        assert_eq!(report.assigned, 2);
        assert_eq!(
            report.halted,
            Some(ScanError::MatchFailure { found: Some('x') })
        );
        assert_eq!((a, b, c), (1, 2, 0));
        assert_eq!(cur.next(), Some('x'));
    }

    #[test]
    fn status_is_minus_one_only_before_first_conversion() {
        let mut cur = InputCursor::from("   ");
        let (_, report) = scan_values(&mut cur, "%d");
        assert_eq!(report.status(), -1);

        let mut cur = InputCursor::from("5 ");
        let (_, report) = scan_values(&mut cur, "%*d %d");
        assert_eq!(report.halted, Some(ScanError::EndOfInput));
        assert_eq!(report.status(), 0);
    }

    #[test]
    fn literal_mismatch_is_pushed_back() {
        let mut x = 0i32;
        let mut cur = InputCursor::from("Age=4");
        assert_eq!(scan(&mut cur, "Age:%d", &mut [Slot::I32(&mut x)]), 0);
        assert_eq!(cur.next(), Some('='));
    }

    #[test]
    fn noop_consumes_nothing() {
        let mut x = 0i32;
        assert_eq!(sscan("42", "%q%d", &mut [Slot::I32(&mut x)]), 1);
        assert_eq!(x, 42);
    }

    #[test]
    fn missing_slot_halts() {
        let mut cur = InputCursor::from("1 2");
        let mut x = 0i32;
        let report = scan_report(&mut cur, "%d %d", &mut [Slot::I32(&mut x)]);
        assert_eq!(report.assigned, 1);
        assert_eq!(
            report.halted,
            Some(ScanError::MissingSlot {
                index: 1,
                specifier: 'd'
            })
        );
    }

    #[test]
    fn values_sink_collects_in_order() {
        let mut cur = InputCursor::from("7 ff 1.5");
        let (values, report) = scan_values(&mut cur, "%hhd %lx %lf");
        assert!(report.is_complete());
        assert_eq!(values, vec![Value::I8(7), Value::U64(255), Value::F64(1.5)]);
    }

    #[test]
    fn compiled_format_is_reusable() {
        let format = Format::parse("%d,");
        let mut cur = InputCursor::from("1,2,3,");
        let mut total = 0;
        loop {
            let (values, report) = format.scan_values(&mut cur);
            if let Some(Value::I32(v)) = values.first() {
                total += v;
            }
            if !report.is_complete() {
                break;
            }
        }
        assert_eq!(total, 6);
    }
}
