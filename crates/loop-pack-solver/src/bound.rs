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

//! Theoretical minimum number of bins, `ceil(total weight / capacity)`.
//!
//! The bound is a post-hoc quality yardstick for the heuristics and is never
//! fed back into them. It assumes every item fits a bin on its own: an item
//! heavier than the capacity gets a solo bin, so a packing of such items may
//! use fewer bins than the bound.

use loop_pack_core::prelude::{Capacity, InvalidCapacityError, InvalidWeightError, Weight};
use loop_pack_model::prelude::Instance;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LowerBoundError {
    InvalidCapacity(InvalidCapacityError),
    InvalidWeight {
        index: usize,
        error: InvalidWeightError,
    },
    TotalWeightOverflow,
}

impl std::fmt::Display for LowerBoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowerBoundError::InvalidCapacity(e) => write!(f, "{e}"),
            LowerBoundError::InvalidWeight { index, error } => {
                write!(f, "weight at index {index}: {error}")
            }
            LowerBoundError::TotalWeightOverflow => write!(f, "total weight overflows"),
        }
    }
}

impl std::error::Error for LowerBoundError {}

impl From<InvalidCapacityError> for LowerBoundError {
    fn from(e: InvalidCapacityError) -> Self {
        LowerBoundError::InvalidCapacity(e)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowerBound;

impl LowerBound {
    /// Exact integer ceiling of `total / capacity`.
    #[inline]
    pub fn compute(total: Weight, capacity: Capacity) -> usize {
        let t = total.micros();
        let c = capacity.limit().micros();
        let q = t / c;
        (if t % c == 0 { q } else { q + 1 }) as usize
    }

    #[inline]
    pub fn of_instance(instance: &Instance, capacity: Capacity) -> usize {
        Self::compute(instance.total_weight(), capacity)
    }

    /// Bound over raw second values, validating capacity and weights first.
    pub fn from_secs(weights: &[f64], capacity_secs: f64) -> Result<usize, LowerBoundError> {
        let capacity = Capacity::from_secs_f64(capacity_secs)?;
        let mut total = Weight::ZERO;
        for (index, &secs) in weights.iter().enumerate() {
            let w = Weight::from_secs_f64(secs)
                .map_err(|error| LowerBoundError::InvalidWeight { index, error })?;
            total = total
                .checked_add(w)
                .ok_or(LowerBoundError::TotalWeightOverflow)?;
        }
        Ok(Self::compute(total, capacity))
    }
}
