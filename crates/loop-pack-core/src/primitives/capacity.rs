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

use crate::primitives::weight::Weight;

/// Capacity was zero, negative, or not a finite number of seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCapacityError {
    secs: f64,
}

impl InvalidCapacityError {
    #[inline]
    pub fn new(secs: f64) -> Self {
        Self { secs }
    }

    #[inline]
    pub fn secs(&self) -> f64 {
        self.secs
    }
}

impl std::fmt::Display for InvalidCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid capacity {}s: capacity must be a positive, finite number of seconds",
            self.secs
        )
    }
}

impl std::error::Error for InvalidCapacityError {}

/// The nominal load limit of a bin. Strictly positive by construction.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(Weight);

impl Capacity {
    #[inline]
    pub fn new(limit: Weight) -> Result<Self, InvalidCapacityError> {
        if limit.is_zero() {
            return Err(InvalidCapacityError::new(limit.as_secs_f64()));
        }
        Ok(Self(limit))
    }

    /// Values that round to zero microseconds are rejected as well.
    pub fn from_secs_f64(secs: f64) -> Result<Self, InvalidCapacityError> {
        let limit = Weight::from_secs_f64(secs).map_err(|_| InvalidCapacityError::new(secs))?;
        Self::new(limit).map_err(|_| InvalidCapacityError::new(secs))
    }

    #[inline]
    pub const fn limit(&self) -> Weight {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }

    /// Whether `load + weight` stays within the limit.
    ///
    /// An overflowing sum never fits.
    #[inline]
    pub fn admits(&self, load: Weight, weight: Weight) -> bool {
        load.checked_add(weight).is_some_and(|total| total <= self.0)
    }

    #[inline]
    pub fn is_exceeded_by(&self, load: Weight) -> bool {
        load > self.0
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        assert!(Capacity::from_secs_f64(0.0).is_err());
        assert!(Capacity::from_secs_f64(-60.0).is_err());
        assert!(Capacity::from_secs_f64(f64::NAN).is_err());
        assert!(Capacity::from_secs_f64(f64::INFINITY).is_err());
        assert!(Capacity::from_secs_f64(1e-9).is_err());
        assert!(Capacity::new(Weight::ZERO).is_err());
    }

    #[test]
    fn test_error_keeps_offending_value() {
        let err = Capacity::from_secs_f64(-2.5).unwrap_err();
        assert_eq!(err.secs(), -2.5);
        assert!(err.to_string().contains("-2.5"));
    }

    #[test]
    fn test_admits_is_inclusive() {
        let cap = Capacity::from_secs_f64(60.0).unwrap();
        assert!(cap.admits(Weight::from_secs(40), Weight::from_secs(20)));
        assert!(!cap.admits(Weight::from_secs(40), Weight::from_secs(21)));
        assert!(cap.admits(Weight::ZERO, Weight::ZERO));
    }

    #[test]
    fn test_admits_decimal_sums_exactly() {
        // 0.1 + 0.2 lands exactly on 0.3 in fixed point.
        let cap = Capacity::from_secs_f64(0.3).unwrap();
        let a = Weight::from_secs_f64(0.1).unwrap();
        let b = Weight::from_secs_f64(0.2).unwrap();
        assert!(cap.admits(a, b));
    }

    #[test]
    fn test_admits_rejects_overflow() {
        let cap = Capacity::new(Weight::try_from_micros(i64::MAX).unwrap()).unwrap();
        let max = Weight::try_from_micros(i64::MAX).unwrap();
        assert!(!cap.admits(max, Weight::from_secs(1)));
    }

    #[test]
    fn test_is_exceeded_by() {
        let cap = Capacity::from_secs_f64(60.0).unwrap();
        assert!(cap.is_exceeded_by(Weight::from_secs(70)));
        assert!(!cap.is_exceeded_by(Weight::from_secs(60)));
    }

    #[test]
    fn test_display() {
        let cap = Capacity::from_secs_f64(60.0).unwrap();
        assert_eq!(cap.to_string(), "60.000000");
        assert_eq!(format!("{:.1}", cap), "60.0");
        assert_eq!(cap.limit(), Weight::from_secs(60));
    }
}
