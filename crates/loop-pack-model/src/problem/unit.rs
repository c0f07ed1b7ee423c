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

use loop_pack_core::prelude::MICROS_PER_SECOND;
use std::str::FromStr;

/// The unit raw duration values are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DurationUnit {
    #[default]
    Seconds,
    Milliseconds,
    Minutes,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 3] = [
        DurationUnit::Seconds,
        DurationUnit::Milliseconds,
        DurationUnit::Minutes,
    ];

    /// Fixed-point ticks in one unit.
    #[inline]
    pub const fn micros_per_unit(&self) -> i64 {
        match self {
            DurationUnit::Seconds => MICROS_PER_SECOND,
            DurationUnit::Milliseconds => MICROS_PER_SECOND / 1_000,
            DurationUnit::Minutes => MICROS_PER_SECOND * 60,
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Seconds => "s",
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Minutes => "min",
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDurationUnitError {
    tag: String,
}

impl UnknownDurationUnitError {
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl std::fmt::Display for UnknownDurationUnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown duration unit '{}', expected one of: s, ms, min",
            self.tag
        )
    }
}

impl std::error::Error for UnknownDurationUnitError {}

impl FromStr for DurationUnit {
    type Err = UnknownDurationUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Ok(DurationUnit::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(DurationUnit::Milliseconds),
            "min" | "mins" | "minutes" => Ok(DurationUnit::Minutes),
            _ => Err(UnknownDurationUnitError { tag: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_short_tags() {
        for unit in DurationUnit::ALL {
            assert_eq!(unit.as_str().parse::<DurationUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_accepts_long_names_case_insensitively() {
        assert_eq!("Minutes".parse::<DurationUnit>().unwrap(), DurationUnit::Minutes);
        assert_eq!(" MS ".parse::<DurationUnit>().unwrap(), DurationUnit::Milliseconds);
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let err = "hours".parse::<DurationUnit>().unwrap_err();
        assert_eq!(err.tag(), "hours");
    }

    #[test]
    fn test_scale_factors() {
        assert_eq!(DurationUnit::Seconds.micros_per_unit(), 1_000_000);
        assert_eq!(DurationUnit::Milliseconds.micros_per_unit(), 1_000);
        assert_eq!(DurationUnit::Minutes.micros_per_unit(), 60_000_000);
        assert_eq!(DurationUnit::default(), DurationUnit::Seconds);
    }
}
