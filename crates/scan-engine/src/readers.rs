//! Scalar readers: one small state machine per conversion.
//!
//! Every reader consumes from an [`InputCursor`] and either returns a value
//! or fails with the cursor already restored to the position its contract
//! defines. Numeric readers share the same skeleton: skip whitespace, take
//! an optional sign, run a digit loop bounded by the field width, push back
//! the stopper, and roll back to just after the whitespace when no digit
//! was produced.

use tracing::trace;

use crate::cursor::{InputCursor, is_space};
use crate::types::{CalendarDate, RgbColor, ScanError, Specifier};

/// Unnarrowed reader output, handed to the binder.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Chars(String),
    Text(String),
    Date(CalendarDate),
    Color(RgbColor),
}

/// Run the reader selected by `specifier`.
pub fn read<S>(
    cursor: &mut InputCursor<S>,
    specifier: Specifier,
    width: Option<u32>,
) -> Result<RawValue, ScanError>
where
    S: Iterator<Item = char>,
{
    let value = match specifier {
        Specifier::Integer => RawValue::Signed(read_integer(cursor, width)?),
        Specifier::Hex => RawValue::Unsigned(read_hex(cursor, width)?),
        Specifier::Float => RawValue::Float(read_float(cursor, width)?),
        Specifier::CharBlock => RawValue::Chars(read_char_block(cursor, width)?),
        Specifier::String => RawValue::Text(read_string(cursor, width)?),
        Specifier::Binary => RawValue::Unsigned(read_binary(cursor, width)?),
        Specifier::Line => RawValue::Text(read_line(cursor, width)?),
        Specifier::Date => RawValue::Date(read_date(cursor, width)?),
        Specifier::Color => RawValue::Color(read_color(cursor, width)?),
    };
    trace!(?specifier, ?value, "conversion read");
    Ok(value)
}

//  Shared machinery

/// Field-width accounting. Numeric readers treat a width of 0 as unlimited.
#[derive(Debug, Clone, Copy)]
struct Budget {
    limit: Option<u32>,
    used: u32,
}

impl Budget {
    fn numeric(width: Option<u32>) -> Self {
        Self {
            limit: width.filter(|&w| w > 0),
            used: 0,
        }
    }

    fn has_room(&self) -> bool {
        self.room_for(1)
    }

    fn room_for(&self, n: u32) -> bool {
        self.limit.is_none_or(|limit| self.used + n <= limit)
    }

    fn take(&mut self) {
        self.used += 1;
    }

    fn give_back(&mut self, n: u32) {
        self.used -= n;
    }
}

/// Why a digit loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// The next digit did not fit; it was pushed back.
    Width,
    /// A non-digit was read and pushed back.
    Char(char),
    End,
}

impl Stop {
    fn failure(self) -> ScanError {
        match self {
            Self::Width => ScanError::WidthExhausted,
            Self::Char(c) => ScanError::MatchFailure { found: Some(c) },
            Self::End => ScanError::MatchFailure { found: None },
        }
    }
}

/// Consume digits of `radix` starting with the already-read `c`. The
/// stopper is always back in the cursor when this returns.
fn digit_run<S>(
    cursor: &mut InputCursor<S>,
    mut c: Option<char>,
    budget: &mut Budget,
    radix: u32,
    mut accept: impl FnMut(u32),
) -> (usize, Stop)
where
    S: Iterator<Item = char>,
{
    let mut count = 0;
    loop {
        let Some(ch) = c else {
            return (count, Stop::End);
        };
        let Some(digit) = ch.to_digit(radix) else {
            cursor.push_back(ch);
            return (count, Stop::Char(ch));
        };
        if !budget.has_room() {
            cursor.push_back(ch);
            return (count, Stop::Width);
        }
        accept(digit);
        count += 1;
        budget.take();
        c = cursor.next();
    }
}

/// Skip leading whitespace and return the first significant character.
fn first_significant<S>(cursor: &mut InputCursor<S>) -> Result<char, ScanError>
where
    S: Iterator<Item = char>,
{
    cursor.skip_space();
    cursor.next().ok_or(ScanError::EndOfInput)
}

/// Take an optional `+`/`-`. Returns the sign (if any) and the next character.
fn take_sign<S>(
    cursor: &mut InputCursor<S>,
    first: char,
    budget: &mut Budget,
) -> (Option<char>, Option<char>)
where
    S: Iterator<Item = char>,
{
    if first == '+' || first == '-' {
        budget.take();
        (Some(first), cursor.next())
    } else {
        (None, Some(first))
    }
}

/// Push back tentatively consumed characters, most recent first.
fn unread<S>(cursor: &mut InputCursor<S>, consumed: &[Option<char>])
where
    S: Iterator<Item = char>,
{
    for c in consumed.iter().rev().flatten() {
        cursor.push_back(*c);
    }
}

//  Integers

/// `%d`: optional sign, decimal digits. Leading zeros stay decimal.
pub fn read_integer<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<i64, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut budget = Budget::numeric(width);
    let first = first_significant(cursor)?;
    let (sign, c) = take_sign(cursor, first, &mut budget);

    let mut value: i64 = 0;
    let (digits, stop) = digit_run(cursor, c, &mut budget, 10, |d| {
        value = value.wrapping_mul(10).wrapping_add(i64::from(d));
    });
    if digits == 0 {
        unread(cursor, &[sign]);
        return Err(stop.failure());
    }
    Ok(if sign == Some('-') {
        value.wrapping_neg()
    } else {
        value
    })
}

/// `%x`: optional sign, optional `0x`/`0X`, hex digits in either case.
///
/// The prefix is only taken when the width leaves room for both of its
/// characters; otherwise the `0` is an ordinary digit.
pub fn read_hex<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<u64, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut budget = Budget::numeric(width);
    let first = first_significant(cursor)?;
    let (sign, mut c) = take_sign(cursor, first, &mut budget);

    let mut prefix: [Option<char>; 2] = [None, None];
    if c == Some('0') && budget.room_for(2) {
        match cursor.next() {
            Some(x @ ('x' | 'X')) => {
                budget.take();
                budget.take();
                prefix = [Some('0'), Some(x)];
                c = cursor.next();
            }
            Some(other) => cursor.push_back(other),
            None => {}
        }
    }

    let mut value: u64 = 0;
    let (digits, stop) = digit_run(cursor, c, &mut budget, 16, |d| {
        value = (value << 4) | u64::from(d);
    });
    if digits == 0 {
        unread(cursor, &[sign, prefix[0], prefix[1]]);
        return Err(stop.failure());
    }
    Ok(if sign == Some('-') {
        value.wrapping_neg()
    } else {
        value
    })
}

/// `%b`: optional sign, then `0`/`1` digits shifted into the value.
pub fn read_binary<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<u64, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut budget = Budget::numeric(width);
    let first = first_significant(cursor)?;
    let (sign, c) = take_sign(cursor, first, &mut budget);

    let mut value: u64 = 0;
    let (digits, stop) = digit_run(cursor, c, &mut budget, 2, |d| {
        value = (value << 1) | u64::from(d);
    });
    if digits == 0 {
        unread(cursor, &[sign]);
        return Err(stop.failure());
    }
    Ok(if sign == Some('-') {
        value.wrapping_neg()
    } else {
        value
    })
}

//  Floating point

/// `%f`: sign, integer digits, optional fraction, optional exponent.
///
/// The exponent is tentative. When no exponent digit follows, the `e`, its
/// sign and the stopper all go back so the stream looks untouched past the
/// mantissa.
pub fn read_float<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<f64, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut budget = Budget::numeric(width);
    let first = first_significant(cursor)?;
    let (sign, c) = take_sign(cursor, first, &mut budget);

    let mut whole = String::new();
    let (_, mut stop) = digit_run(cursor, c, &mut budget, 10, |d| push_digit(&mut whole, d));

    let mut point = None;
    let mut fraction = String::new();
    if stop == Stop::Char('.') && budget.has_room() {
        cursor.next();
        budget.take();
        point = Some('.');
        let next = cursor.next();
        (_, stop) = digit_run(cursor, next, &mut budget, 10, |d| push_digit(&mut fraction, d));
    }

    if whole.is_empty() && fraction.is_empty() {
        unread(cursor, &[sign, point]);
        return Err(stop.failure());
    }

    let mut exponent = String::new();
    if let Stop::Char(e @ ('e' | 'E')) = stop {
        if budget.has_room() {
            cursor.next();
            budget.take();
            exponent = read_exponent(cursor, e, &mut budget);
        }
    }

    let text = format!(
        "{}{}.{}e{}",
        if sign == Some('-') { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole.as_str() },
        if fraction.is_empty() { "0" } else { fraction.as_str() },
        if exponent.is_empty() { "0" } else { exponent.as_str() },
    );
    text.parse::<f64>()
        .map_err(|_| ScanError::Structural("floating-point literal"))
}

fn push_digit(buf: &mut String, d: u32) {
    buf.push(char::from(b'0' + d as u8));
}

/// Continue after an already-consumed `e`/`E`. Returns the signed exponent
/// digits, or an empty string after rolling the attempt back.
fn read_exponent<S>(cursor: &mut InputCursor<S>, e: char, budget: &mut Budget) -> String
where
    S: Iterator<Item = char>,
{
    let mut consumed = vec![Some(e)];
    let mut exponent = String::new();

    let mut c = cursor.next();
    if let Some(s @ ('+' | '-')) = c {
        if budget.has_room() {
            budget.take();
            consumed.push(Some(s));
            if s == '-' {
                exponent.push('-');
            }
            c = cursor.next();
        }
    }

    let is_digit = c.is_some_and(|ch| ch.is_ascii_digit());
    if is_digit && budget.has_room() {
        digit_run(cursor, c, budget, 10, |d| push_digit(&mut exponent, d));
        return exponent;
    }

    if let Some(ch) = c {
        cursor.push_back(ch);
    }
    unread(cursor, &consumed);
    budget.give_back(consumed.len() as u32);
    trace!("exponent rolled back");
    String::new()
}

//  Characters and text

/// `%c`: exactly `width` characters (default 1), whitespace included.
///
/// Characters read before the input runs out stay consumed.
pub fn read_char_block<S>(
    cursor: &mut InputCursor<S>,
    width: Option<u32>,
) -> Result<String, ScanError>
where
    S: Iterator<Item = char>,
{
    let wanted = width.filter(|&w| w > 0).unwrap_or(1) as usize;
    let mut block = String::with_capacity(wanted);
    for got in 0..wanted {
        match cursor.next() {
            Some(c) => block.push(c),
            None => return Err(ScanError::ShortBlock { wanted, got }),
        }
    }
    Ok(block)
}

/// `%s`: skip whitespace, then non-whitespace up to `width` characters.
pub fn read_string<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<String, ScanError>
where
    S: Iterator<Item = char>,
{
    let limit = width.map_or(usize::MAX, |w| w as usize);
    let first = first_significant(cursor)?;

    let mut word = String::new();
    let mut taken = 0;
    let mut c = Some(first);
    while let Some(ch) = c {
        if is_space(ch) || taken >= limit {
            cursor.push_back(ch);
            break;
        }
        word.push(ch);
        taken += 1;
        c = cursor.next();
    }
    Ok(word)
}

/// `%L`: the rest of the current line, without its newline.
///
/// Leading blanks are skipped, and so is a newline that is followed by more
/// input. A newline at the very end of input is the boundary of an empty
/// line. The terminating newline is always left in the stream.
pub fn read_line<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<String, ScanError>
where
    S: Iterator<Item = char>,
{
    let limit = width.map_or(usize::MAX, |w| w as usize);

    let first = loop {
        match cursor.next() {
            None => return Err(ScanError::EndOfInput),
            Some('\n') => match cursor.next() {
                None => {
                    cursor.push_back('\n');
                    return Ok(String::new());
                }
                Some(after) => cursor.push_back(after),
            },
            Some(c) if is_space(c) => {}
            Some(c) => break c,
        }
    };

    let mut line = String::new();
    let mut taken = 0;
    let mut c = Some(first);
    while let Some(ch) = c {
        if ch == '\n' || taken >= limit {
            cursor.push_back(ch);
            break;
        }
        line.push(ch);
        taken += 1;
        c = cursor.next();
    }
    Ok(line)
}

//  Date

/// `%D`: `DD/MM/YYYY` or `DD-MM-YYYY`; both separators must agree.
///
/// Digits already consumed stay consumed on failure; only the offending
/// character is pushed back.
pub fn read_date<S>(
    cursor: &mut InputCursor<S>,
    width: Option<u32>,
) -> Result<CalendarDate, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut budget = Budget::numeric(width);
    let first = first_significant(cursor)?;

    let day = date_field(cursor, Some(first), &mut budget)?;
    let separator = date_separator(cursor, &mut budget, None)?;
    let next = cursor.next();
    let month = date_field(cursor, next, &mut budget)?;
    date_separator(cursor, &mut budget, Some(separator))?;

    let mut year: u32 = 0;
    let next = cursor.next();
    let (digits, stop) = digit_run(cursor, next, &mut budget, 10, |d| {
        year = year.saturating_mul(10).saturating_add(d);
    });
    if digits == 0 {
        return Err(stop.failure());
    }

    CalendarDate::new(day, month, year)
}

/// Day or month digits. Running into the width limit here is a failure.
fn date_field<S>(
    cursor: &mut InputCursor<S>,
    c: Option<char>,
    budget: &mut Budget,
) -> Result<u32, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut value: u32 = 0;
    let (digits, stop) = digit_run(cursor, c, budget, 10, |d| {
        value = value.saturating_mul(10).saturating_add(d);
    });
    if digits == 0 || stop == Stop::Width {
        return Err(stop.failure());
    }
    Ok(value)
}

fn date_separator<S>(
    cursor: &mut InputCursor<S>,
    budget: &mut Budget,
    expected: Option<char>,
) -> Result<char, ScanError>
where
    S: Iterator<Item = char>,
{
    if !budget.has_room() {
        return Err(ScanError::WidthExhausted);
    }
    let c = cursor.next();
    let ok = match (c, expected) {
        (Some(sep), Some(want)) => sep == want,
        (Some(sep), None) => sep == '/' || sep == '-',
        (None, _) => false,
    };
    match c {
        Some(sep) if ok => {
            budget.take();
            Ok(sep)
        }
        Some(other) => {
            cursor.push_back(other);
            Err(ScanError::Structural("date separator"))
        }
        None => Err(ScanError::Structural("date separator")),
    }
}

//  Color

/// `%R`: `#` followed by three two-digit hex pairs.
pub fn read_color<S>(cursor: &mut InputCursor<S>, width: Option<u32>) -> Result<RgbColor, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut budget = Budget::numeric(width);
    let first = first_significant(cursor)?;
    if first != '#' {
        cursor.push_back(first);
        return Err(ScanError::Structural("color, expected '#'"));
    }
    budget.take();

    let mut components = [0u8; 3];
    for component in &mut components {
        if !budget.room_for(2) {
            return Err(ScanError::WidthExhausted);
        }
        *component = read_hex_pair(cursor)?;
        budget.take();
        budget.take();
    }

    let [red, green, blue] = components;
    Ok(RgbColor { red, green, blue })
}

/// Two hex digits as one byte.
///
/// When the second digit is invalid only that character is pushed back;
/// the first digit of the pair stays consumed.
fn read_hex_pair<S>(cursor: &mut InputCursor<S>) -> Result<u8, ScanError>
where
    S: Iterator<Item = char>,
{
    let mut nibble = || -> Result<u8, ScanError> {
        let c = cursor.next().ok_or(ScanError::EndOfInput)?;
        match c.to_digit(16) {
            Some(d) => Ok(d as u8),
            None => {
                cursor.push_back(c);
                Err(ScanError::MatchFailure { found: Some(c) })
            }
        }
    };
    let high = nibble()?;
    let low = nibble()?;
    Ok(high << 4 | low)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest<S: Iterator<Item = char>>(cursor: &mut InputCursor<S>) -> String {
        cursor.by_ref().collect()
    }

    #[test]
    fn integer_width_counts_sign() {
        let mut cur = InputCursor::from("-9876");
        assert_eq!(read_integer(&mut cur, Some(4)), Ok(-987));
        assert_eq!(rest(&mut cur), "6");
    }

    #[test]
    fn integer_sign_only_restores_sign() {
        let mut cur = InputCursor::from("  -x");
        assert_eq!(
            read_integer(&mut cur, None),
            Err(ScanError::MatchFailure { found: Some('x') })
        );
        assert_eq!(rest(&mut cur), "-x");
    }

    #[test]
    fn integer_width_one_after_sign_is_width_failure() {
        let mut cur = InputCursor::from("-5");
        assert_eq!(read_integer(&mut cur, Some(1)), Err(ScanError::WidthExhausted));
        assert_eq!(rest(&mut cur), "-5");
    }

    #[test]
    fn integer_end_of_input_after_whitespace() {
        let mut cur = InputCursor::from(" \n\t");
        assert_eq!(read_integer(&mut cur, None), Err(ScanError::EndOfInput));
    }

    #[test]
    fn width_zero_is_unlimited_for_numbers() {
        let mut cur = InputCursor::from("123456");
        assert_eq!(read_integer(&mut cur, Some(0)), Ok(123_456));
    }

    #[test]
    fn hex_prefix_and_sign() {
        let mut cur = InputCursor::from("-0xFf ");
        assert_eq!(read_hex(&mut cur, None), Ok(0xffu64.wrapping_neg()));
        assert_eq!(rest(&mut cur), " ");
    }

    #[test]
    fn hex_bare_prefix_fails_and_restores() {
        let mut cur = InputCursor::from("0xG1");
        assert_eq!(
            read_hex(&mut cur, None),
            Err(ScanError::MatchFailure { found: Some('G') })
        );
        assert_eq!(rest(&mut cur), "0xG1");
    }

    #[test]
    fn hex_prefix_needs_room_for_both_characters() {
        let mut cur = InputCursor::from("0x1");
        assert_eq!(read_hex(&mut cur, Some(1)), Ok(0));
        assert_eq!(rest(&mut cur), "x1");

        let mut cur = InputCursor::from("0x1234");
        assert_eq!(read_hex(&mut cur, Some(3)), Ok(1));
        assert_eq!(rest(&mut cur), "234");
    }

    #[test]
    fn hex_zero_without_prefix_is_a_digit() {
        let mut cur = InputCursor::from("0g");
        assert_eq!(read_hex(&mut cur, None), Ok(0));
        assert_eq!(rest(&mut cur), "g");
    }

    #[test]
    fn binary_stops_at_non_bit() {
        let mut cur = InputCursor::from("110210");
        assert_eq!(read_binary(&mut cur, None), Ok(6));
        assert_eq!(rest(&mut cur), "210");
    }

    #[test]
    fn binary_negative_wraps() {
        let mut cur = InputCursor::from("-101");
        assert_eq!(read_binary(&mut cur, None).map(|v| v as i64), Ok(-5));
    }

    #[test]
    fn float_exponent_rollback_restores_sign_and_e() {
        let mut cur = InputCursor::from("1.2e+X");
        let v = read_float(&mut cur, None).expect("mantissa is valid");
        assert!((v - 1.2).abs() < 1e-12);
        assert_eq!(rest(&mut cur), "e+X");
    }

    #[test]
    fn float_exponent_cut_by_width() {
        let mut cur = InputCursor::from("1.2e5");
        let v = read_float(&mut cur, Some(4)).expect("mantissa is valid");
        assert!((v - 1.2).abs() < 1e-12);
        assert_eq!(rest(&mut cur), "e5");

        let mut cur = InputCursor::from("1e3");
        assert_eq!(read_float(&mut cur, Some(2)), Ok(1.0));
        assert_eq!(rest(&mut cur), "e3");
    }

    #[test]
    fn float_forms() {
        for (input, want) in [
            ("5.", 5.0),
            ("-.5", -0.5),
            ("1.e2", 100.0),
            ("2.5e-2", 0.025),
            ("3.2E+1", 32.0),
            ("001.2e1", 12.0),
        ] {
            let mut cur = InputCursor::from(input);
            let v = read_float(&mut cur, None).expect(input);
            assert!((v - want).abs() < 1e-9, "{input}: {v}");
        }
    }

    #[test]
    fn float_lone_point_fails_and_restores() {
        let mut cur = InputCursor::from("-.\n");
        assert_eq!(
            read_float(&mut cur, None),
            Err(ScanError::MatchFailure { found: Some('\n') })
        );
        assert_eq!(rest(&mut cur), "-.\n");
    }

    #[test]
    fn float_width_stops_before_point() {
        let mut cur = InputCursor::from("12.34");
        assert_eq!(read_float(&mut cur, Some(2)), Ok(12.0));
        assert_eq!(rest(&mut cur), ".34");
    }

    #[test]
    fn char_block_keeps_whitespace_and_partial_reads() {
        let mut cur = InputCursor::from(" A ");
        assert_eq!(read_char_block(&mut cur, Some(3)).as_deref(), Ok(" A "));

        let mut cur = InputCursor::from("A");
        assert_eq!(
            read_char_block(&mut cur, Some(2)),
            Err(ScanError::ShortBlock { wanted: 2, got: 1 })
        );
        assert_eq!(cur.position(), 1);
    }

    #[test]
    fn string_width_zero_is_empty() {
        let mut cur = InputCursor::from("  abc");
        assert_eq!(read_string(&mut cur, Some(0)).as_deref(), Ok(""));
        assert_eq!(rest(&mut cur), "abc");
    }

    #[test]
    fn line_skips_separator_newlines_but_not_final_one() {
        let mut cur = InputCursor::from("   \t\nHello\n");
        assert_eq!(read_line(&mut cur, None).as_deref(), Ok("Hello"));
        assert_eq!(rest(&mut cur), "\n");

        let mut cur = InputCursor::from("   \n");
        assert_eq!(read_line(&mut cur, None).as_deref(), Ok(""));
        assert_eq!(rest(&mut cur), "\n");
    }

    #[test]
    fn line_on_blank_tail_is_end_of_input() {
        let mut cur = InputCursor::from("  \t ");
        assert_eq!(read_line(&mut cur, None), Err(ScanError::EndOfInput));
    }

    #[test]
    fn date_both_separators() {
        let mut cur = InputCursor::from("01-01-2000X");
        assert_eq!(
            read_date(&mut cur, None),
            Ok(CalendarDate {
                day: 1,
                month: 1,
                year: 2000
            })
        );
        assert_eq!(rest(&mut cur), "X");
    }

    #[test]
    fn date_mixed_separators_fail() {
        let mut cur = InputCursor::from("12-05/2024");
        assert_eq!(
            read_date(&mut cur, None),
            Err(ScanError::Structural("date separator"))
        );
        assert_eq!(rest(&mut cur), "/2024");
    }

    #[test]
    fn date_width_cuts_month() {
        let mut cur = InputCursor::from("12/34/2020");
        assert_eq!(read_date(&mut cur, Some(4)), Err(ScanError::WidthExhausted));
    }

    #[test]
    fn date_width_ends_year() {
        let mut cur = InputCursor::from("1/2/20245");
        assert_eq!(
            read_date(&mut cur, Some(8)),
            Ok(CalendarDate {
                day: 1,
                month: 2,
                year: 2024
            })
        );
        assert_eq!(rest(&mut cur), "5");
    }

    #[test]
    fn color_second_nibble_failure_keeps_first() {
        let mut cur = InputCursor::from("#FZ1122");
        assert_eq!(
            read_color(&mut cur, None),
            Err(ScanError::MatchFailure { found: Some('Z') })
        );
        assert_eq!(rest(&mut cur), "Z1122");
    }

    #[test]
    fn color_missing_hash_is_pushed_back() {
        let mut cur = InputCursor::from("112233");
        assert!(read_color(&mut cur, None).is_err());
        assert_eq!(rest(&mut cur), "112233");
    }

    #[test]
    fn color_truncated_is_end_of_input() {
        let mut cur = InputCursor::from("#1234");
        assert_eq!(read_color(&mut cur, None), Err(ScanError::EndOfInput));
    }

    #[test]
    fn color_width_must_fit_whole_pairs() {
        let mut cur = InputCursor::from("#AABBCC");
        assert_eq!(read_color(&mut cur, Some(6)), Err(ScanError::WidthExhausted));
        assert_eq!(rest(&mut cur), "CC");
    }
}
