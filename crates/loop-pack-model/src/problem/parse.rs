// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Conversion of raw duration text into fixed-point weights.
//!
//! Accepted shapes, after surrounding whitespace is trimmed and every `"` and
//! `,` (thousands separator) is removed:
//!
//! - a plain decimal number (`90`, `90.5`, `1.2e3`)
//! - `minutes:seconds[.fraction]` (`1:30`, `3:05.250`)
//! - `hours:minutes:seconds[.fraction]` (`0:01:30`)
//!
//! The value is then read in the configured [`DurationUnit`] and scaled to
//! seconds. Failures are reported as [`WeightParseError`]; the caller decides
//! whether an unparsable value aborts the run or degrades to zero.

use crate::problem::{err::WeightParseError, unit::DurationUnit};
use loop_pack_core::prelude::{InvalidWeightError, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeightParser {
    unit: DurationUnit,
}

impl WeightParser {
    #[inline]
    pub fn new(unit: DurationUnit) -> Self {
        Self { unit }
    }

    #[inline]
    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn parse(&self, raw: &str) -> Result<Weight, WeightParseError> {
        let cleaned = clean(raw);
        let value = read_value(&cleaned).ok_or(WeightParseError::Unparsable(cleaned))?;
        Weight::from_units_f64(value, self.unit.micros_per_unit()).map_err(|e| match e {
            InvalidWeightError::Negative(v) => WeightParseError::Negative(v),
            InvalidWeightError::OutOfRange(v) => WeightParseError::OutOfRange(v),
            InvalidWeightError::NotFinite(v) => WeightParseError::Unparsable(v.to_string()),
        })
    }

    /// Like [`parse`](Self::parse), but text in no known format reads as zero.
    ///
    /// Negative and out-of-range values are still errors.
    pub fn parse_or_zero(&self, raw: &str) -> Result<Weight, WeightParseError> {
        match self.parse(raw) {
            Err(WeightParseError::Unparsable(_)) => Ok(Weight::ZERO),
            other => other,
        }
    }
}

#[inline]
pub fn parse_weight(raw: &str, unit: DurationUnit) -> Result<Weight, WeightParseError> {
    WeightParser::new(unit).parse(raw)
}

/// Whether a header probe value reads as a bare number.
///
/// Used by column detection, which only strips commas and whitespace.
pub fn is_bare_number(raw: &str) -> bool {
    raw.trim().replace(',', "").trim().parse::<f64>().is_ok()
}

fn clean(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '"' && *c != ',')
        .collect::<String>()
        .trim()
        .to_string()
}

fn read_value(s: &str) -> Option<f64> {
    if let Some(v) = read_finite(s) {
        return Some(v);
    }
    if !s.contains(':') {
        return None;
    }

    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [m, sec] => Some(read_int(m)? * 60.0 + read_finite(sec)?),
        [h, m, sec] => Some(read_int(h)? * 3600.0 + read_int(m)? * 60.0 + read_finite(sec)?),
        _ => None,
    }
}

#[inline]
fn read_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[inline]
fn read_int(s: &str) -> Option<f64> {
    s.trim().parse::<i64>().ok().map(|v| v as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(raw: &str, unit: DurationUnit) -> f64 {
        WeightParser::new(unit)
            .parse_or_zero(raw)
            .unwrap()
            .as_secs_f64()
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(secs("1:30", DurationUnit::Seconds), 90.0);
        assert_eq!(secs("90000", DurationUnit::Milliseconds), 90.0);
        assert_eq!(secs("0:01:30", DurationUnit::Seconds), 90.0);
        assert_eq!(secs("abc", DurationUnit::Seconds), 0.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(secs("42", DurationUnit::Seconds), 42.0);
        assert_eq!(secs("  12.5 ", DurationUnit::Seconds), 12.5);
        assert_eq!(secs("1.5e2", DurationUnit::Seconds), 150.0);
        assert_eq!(secs("1.5", DurationUnit::Minutes), 90.0);
        assert_eq!(secs("+7", DurationUnit::Seconds), 7.0);
    }

    #[test]
    fn test_strips_quotes_and_thousands_separators() {
        assert_eq!(secs("\"1,234\"", DurationUnit::Seconds), 1234.0);
        assert_eq!(secs("\" 90 \"", DurationUnit::Seconds), 90.0);
        assert_eq!(secs("210,000", DurationUnit::Milliseconds), 210.0);
    }

    #[test]
    fn test_clock_formats_with_fractions() {
        assert_eq!(secs("3:05.25", DurationUnit::Seconds), 185.25);
        assert_eq!(secs("1:00:00", DurationUnit::Seconds), 3600.0);
        assert_eq!(secs("01:02:03.5", DurationUnit::Seconds), 3723.5);
    }

    #[test]
    fn test_clock_formats_are_scaled_by_unit() {
        // The clock decomposition yields a value in the configured unit.
        assert_eq!(secs("1:30", DurationUnit::Milliseconds), 0.09);
    }

    #[test]
    fn test_clock_sub_field_failure_is_unparsable() {
        let p = WeightParser::new(DurationUnit::Seconds);
        assert!(matches!(p.parse("1.5:30"), Err(WeightParseError::Unparsable(_))));
        assert!(matches!(p.parse("a:30"), Err(WeightParseError::Unparsable(_))));
        assert!(matches!(p.parse("1:2:3:4"), Err(WeightParseError::Unparsable(_))));
        assert!(matches!(p.parse(":"), Err(WeightParseError::Unparsable(_))));
        assert_eq!(p.parse_or_zero("1:xx").unwrap(), Weight::ZERO);
    }

    #[test]
    fn test_empty_and_non_finite_are_unparsable() {
        let p = WeightParser::new(DurationUnit::Seconds);
        assert_eq!(p.parse(""), Err(WeightParseError::Unparsable(String::new())));
        assert!(matches!(p.parse("inf"), Err(WeightParseError::Unparsable(_))));
        assert!(matches!(p.parse("NaN"), Err(WeightParseError::Unparsable(_))));
    }

    #[test]
    fn test_unparsable_keeps_cleaned_text() {
        let p = WeightParser::new(DurationUnit::Seconds);
        assert_eq!(
            p.parse(" \"n/a\" "),
            Err(WeightParseError::Unparsable("n/a".to_string()))
        );
    }

    #[test]
    fn test_negative_values_are_rejected_even_when_lenient() {
        let p = WeightParser::new(DurationUnit::Seconds);
        assert_eq!(p.parse("-5"), Err(WeightParseError::Negative(-5.0)));
        assert_eq!(p.parse_or_zero("-5"), Err(WeightParseError::Negative(-5.0)));
        assert!(matches!(p.parse("-1:30"), Err(WeightParseError::Negative(_))));
    }

    #[test]
    fn test_out_of_range() {
        let p = WeightParser::new(DurationUnit::Minutes);
        assert!(matches!(p.parse("1e300"), Err(WeightParseError::OutOfRange(_))));
    }

    #[test]
    fn test_free_function_matches_parser() {
        assert_eq!(
            parse_weight("2:00", DurationUnit::Seconds).unwrap(),
            Weight::from_secs(120)
        );
    }

    #[test]
    fn test_bare_number_probe() {
        assert!(is_bare_number(" 1,234 "));
        assert!(is_bare_number("3.5"));
        assert!(!is_bare_number("3:30"));
        assert!(!is_bare_number("Song title"));
        assert!(!is_bare_number(""));
    }
}
