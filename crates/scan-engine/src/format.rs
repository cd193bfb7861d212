//! Format-string compiler: one left-to-right pass producing directives.

use std::iter::Peekable;
use std::str::Chars;

use tracing::debug;

use crate::cursor::is_space;
use crate::types::{ConversionSpec, Directive, LengthModifier, Specifier};

/// Compile `format` into its directive sequence.
///
/// A run of whitespace becomes a single [`Directive::WhitespaceMatch`];
/// every other ordinary character is an exact [`Directive::Literal`].
pub fn compile(format: &str) -> Vec<Directive> {
    let mut directives = Vec::new();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        let directive = if c == '%' {
            conversion(&mut chars)
        } else if is_space(c) {
            if directives.last() == Some(&Directive::WhitespaceMatch) {
                continue;
            }
            Directive::WhitespaceMatch
        } else {
            Directive::Literal { expected: c }
        };
        directives.push(directive);
    }

    debug!(format, directives = directives.len(), "compiled format");
    directives
}

/// Everything after a `%`: `*`, width, length modifier, specifier.
fn conversion(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let suppressed = chars.next_if_eq(&'*').is_some();

    let mut width: Option<u32> = None;
    while let Some(d) = chars.next_if(char::is_ascii_digit) {
        let digit = d as u32 - '0' as u32;
        width = Some(width.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }

    let mut length = match chars.next_if(|c| matches!(c, 'j' | 'z' | 't')) {
        Some('j') => LengthModifier::IntMaxT,
        Some('z') => LengthModifier::SizeT,
        Some('t') => LengthModifier::PtrDiffT,
        _ => LengthModifier::None,
    };
    if chars.next_if_eq(&'h').is_some() {
        length = if chars.next_if_eq(&'h').is_some() {
            LengthModifier::SignedByte
        } else {
            LengthModifier::Short
        };
    } else if chars.next_if_eq(&'l').is_some() {
        length = if chars.next_if_eq(&'l').is_some() {
            LengthModifier::LongLong
        } else {
            LengthModifier::Long
        };
    }

    let Some(letter) = chars.next() else {
        return Directive::NoOp { specifier: None };
    };
    match Specifier::from_char(letter) {
        Some(specifier) => Directive::Conversion(ConversionSpec {
            suppressed,
            width,
            length,
            specifier,
        }),
        None => Directive::NoOp {
            specifier: Some(letter),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(directive: &Directive) -> ConversionSpec {
        match directive {
            Directive::Conversion(spec) => *spec,
            other => panic!("expected a conversion, got {other:?}"),
        }
    }

    #[test]
    fn literals_whitespace_and_conversions() {
        let d = compile("Name: %s\t\n%d");
        assert_eq!(
            d[..5],
            [
                Directive::Literal { expected: 'N' },
                Directive::Literal { expected: 'a' },
                Directive::Literal { expected: 'm' },
                Directive::Literal { expected: 'e' },
                Directive::Literal { expected: ':' },
            ]
        );
        assert_eq!(d[5], Directive::WhitespaceMatch);
        assert_eq!(conv(&d[6]).specifier, Specifier::String);
        assert_eq!(d[7], Directive::WhitespaceMatch);
        assert_eq!(conv(&d[8]).specifier, Specifier::Integer);
        assert_eq!(d.len(), 9);
    }

    #[test]
    fn suppression_width_and_length() {
        let spec = conv(&compile("%*12lld")[0]);
        assert!(spec.suppressed);
        assert_eq!(spec.width, Some(12));
        assert_eq!(spec.length, LengthModifier::LongLong);
        assert_eq!(spec.specifier, Specifier::Integer);
    }

    #[test]
    fn every_length_token() {
        for (fmt, want) in [
            ("%d", LengthModifier::None),
            ("%hd", LengthModifier::Short),
            ("%hhd", LengthModifier::SignedByte),
            ("%ld", LengthModifier::Long),
            ("%lld", LengthModifier::LongLong),
            ("%jd", LengthModifier::IntMaxT),
            ("%zd", LengthModifier::SizeT),
            ("%td", LengthModifier::PtrDiffT),
            ("%jhd", LengthModifier::Short),
        ] {
            assert_eq!(conv(&compile(fmt)[0]).length, want, "{fmt}");
        }
    }

    #[test]
    fn zero_width_is_kept() {
        assert_eq!(conv(&compile("%0L")[0]).width, Some(0));
    }

    #[test]
    fn modifier_before_line_specifier() {
        let spec = conv(&compile("%lL")[0]);
        assert_eq!(spec.length, LengthModifier::Long);
        assert_eq!(spec.specifier, Specifier::Line);
    }

    #[test]
    fn unknown_specifier_is_noop() {
        assert_eq!(
            compile("%q%%%"),
            vec![
                Directive::NoOp {
                    specifier: Some('q')
                },
                Directive::NoOp {
                    specifier: Some('%')
                },
                Directive::NoOp { specifier: None },
            ]
        );
    }

    #[test]
    fn every_specifier_letter() {
        let letters: String = compile("%d%x%f%c%s%b%L%D%R")
            .iter()
            .map(|d| conv(d).specifier.as_char())
            .collect();
        assert_eq!(letters, "dxfcsbLDR");
    }
}
