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

use num_traits::{CheckedAdd, CheckedSub, SaturatingAdd, Zero};
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

/// Number of fixed-point ticks in one second.
pub const MICROS_PER_SECOND: i64 = 1_000_000;

// Largest magnitude that survives the f64 -> i64 conversion without saturating.
const MAX_MICROS_F64: f64 = 9.2e18;

/// Reasons a real number cannot become a [`Weight`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidWeightError {
    NotFinite(f64),
    Negative(f64),
    OutOfRange(f64),
}

impl std::fmt::Display for InvalidWeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWeightError::NotFinite(v) => write!(f, "Weight {v} is not a finite number"),
            InvalidWeightError::Negative(v) => write!(f, "Weight {v} is negative"),
            InvalidWeightError::OutOfRange(v) => {
                write!(f, "Weight {v} exceeds the representable range")
            }
        }
    }
}

impl std::error::Error for InvalidWeightError {}

/// A non-negative duration in fixed-point microseconds.
///
/// Every weight that enters the packing pipeline is rounded exactly once,
/// half away from zero, when it is converted from a real number. All later
/// arithmetic is integral, so capacity comparisons need no tolerance.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Weight(i64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    /// Whole seconds. Cannot overflow for any `u32`.
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Weight(secs as i64 * MICROS_PER_SECOND)
    }

    #[inline]
    pub fn try_from_micros(micros: i64) -> Result<Self, InvalidWeightError> {
        if micros < 0 {
            return Err(InvalidWeightError::Negative(
                micros as f64 / MICROS_PER_SECOND as f64,
            ));
        }
        Ok(Weight(micros))
    }

    #[inline]
    pub fn from_secs_f64(secs: f64) -> Result<Self, InvalidWeightError> {
        Self::from_units_f64(secs, MICROS_PER_SECOND)
    }

    /// Converts `value` expressed in a unit worth `micros_per_unit` ticks.
    ///
    /// The multiplication happens before rounding so that a value is never
    /// rounded twice.
    pub fn from_units_f64(value: f64, micros_per_unit: i64) -> Result<Self, InvalidWeightError> {
        if !value.is_finite() {
            return Err(InvalidWeightError::NotFinite(value));
        }
        let scaled = (value * micros_per_unit as f64).round();
        if scaled < 0.0 {
            return Err(InvalidWeightError::Negative(value));
        }
        if scaled > MAX_MICROS_F64 {
            return Err(InvalidWeightError::OutOfRange(value));
        }
        // -0.0 rounds to -0.0 and passes the sign check above.
        Ok(Weight(scaled as i64))
    }

    #[inline]
    pub const fn micros(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / MICROS_PER_SECOND as f64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: Weight) -> Option<Weight> {
        self.0.checked_add(rhs.0).map(Weight)
    }

    /// Returns `None` when the result would be negative.
    #[inline]
    pub fn checked_sub(self, rhs: Weight) -> Option<Weight> {
        match self.0.checked_sub(rhs.0) {
            Some(v) if v >= 0 => Some(Weight(v)),
            _ => None,
        }
    }
}

/// Without a precision the value is printed exactly, with six decimals.
/// With a precision (`{:.2}`) it is printed as rounded seconds.
impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.as_secs_f64()),
            None => write!(
                f,
                "{}.{:06}",
                self.0 / MICROS_PER_SECOND,
                self.0 % MICROS_PER_SECOND
            ),
        }
    }
}

impl Add for Weight {
    type Output = Weight;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0.checked_add(rhs.0).expect("error in Weight + Weight"))
    }
}

impl AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.checked_add(rhs.0).expect("error in Weight += Weight");
    }
}

impl Sub for Weight {
    type Output = Weight;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Weight::checked_sub(self, rhs).expect("error in Weight - Weight")
    }
}

impl Zero for Weight {
    #[inline]
    fn zero() -> Self {
        Weight::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl CheckedAdd for Weight {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Weight::checked_add(*self, *rhs)
    }
}

impl CheckedSub for Weight {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Weight::checked_sub(*self, *rhs)
    }
}

impl SaturatingAdd for Weight {
    #[inline]
    fn saturating_add(&self, rhs: &Self) -> Self {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
