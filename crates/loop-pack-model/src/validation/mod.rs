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

pub mod err;

use crate::{
    common::{BinIdentifier, ItemIdentifier},
    problem::instance::Instance,
    solution::sol::PackingResult,
    validation::err::{LoadMismatchError, OverCapacityError, ValidationError},
};
use fixedbitset::FixedBitSet;
use loop_pack_core::prelude::Weight;

/// Structural checks of a [`PackingResult`] against the instance it packed.
#[derive(Debug, Clone)]
pub struct PackingValidator;

impl PackingValidator {
    /// Runs every check, stopping at the first violation.
    pub fn validate(instance: &Instance, result: &PackingResult) -> Result<(), ValidationError> {
        Self::validate_bin_order(result)?;
        Self::validate_partition(instance, result)?;
        Self::validate_loads(instance, result)?;
        Self::validate_soft_capacity(result)?;
        Ok(())
    }

    /// Bins are numbered `1..=n` in creation order and none is empty.
    pub fn validate_bin_order(result: &PackingResult) -> Result<(), ValidationError> {
        for (i, bin) in result.bins().iter().enumerate() {
            if bin.id() != BinIdentifier::new(i + 1) {
                return Err(ValidationError::BinOrder(bin.id()));
            }
            if bin.is_empty() {
                return Err(ValidationError::EmptyBin(bin.id()));
            }
        }
        Ok(())
    }

    /// Every item is in exactly one bin.
    pub fn validate_partition(
        instance: &Instance,
        result: &PackingResult,
    ) -> Result<(), ValidationError> {
        let n = instance.len();
        let mut seen = FixedBitSet::with_capacity(n);

        for (bin, item) in result.assignments() {
            let i = item.get();
            if i >= n {
                return Err(ValidationError::UnknownItem(bin, item));
            }
            if seen.put(i) {
                return Err(ValidationError::DuplicateItem(item));
            }
        }

        match seen.zeroes().next() {
            Some(i) => Err(ValidationError::MissingItem(ItemIdentifier::new(i))),
            None => Ok(()),
        }
    }

    /// Each recorded load equals the sum of its members' weights.
    pub fn validate_loads(
        instance: &Instance,
        result: &PackingResult,
    ) -> Result<(), ValidationError> {
        for bin in result.bins() {
            let mut computed = Weight::ZERO;
            for &item in bin.items() {
                let w = instance
                    .weight_of(item)
                    .ok_or(ValidationError::UnknownItem(bin.id(), item))?;
                computed += w;
            }
            if computed != bin.load() {
                return Err(ValidationError::LoadMismatch(LoadMismatchError::new(
                    bin.id(),
                    bin.load(),
                    computed,
                )));
            }
        }
        Ok(())
    }

    /// Bins with more than one item stay within capacity.
    ///
    /// A solo bin may exceed capacity; it then holds exactly the oversized item.
    pub fn validate_soft_capacity(result: &PackingResult) -> Result<(), ValidationError> {
        let capacity = result.capacity();
        for bin in result.bins() {
            if !bin.is_solo() && capacity.is_exceeded_by(bin.load()) {
                return Err(ValidationError::OverCapacity(OverCapacityError::new(
                    bin.id(),
                    bin.load(),
                    capacity,
                )));
            }
        }
        Ok(())
    }
}
