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

use crate::{
    common::{BinIdentifier, ItemIdentifier},
    solution::bin::Bin,
};
use loop_pack_core::prelude::{Capacity, Weight};

/// The outcome of one packing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingResult {
    bins: Vec<Bin>,
    capacity: Capacity,
    total_weight: Weight,
    lower_bound: usize,
}

impl PackingResult {
    #[inline]
    pub fn new(bins: Vec<Bin>, capacity: Capacity, total_weight: Weight, lower_bound: usize) -> Self {
        Self {
            bins,
            capacity,
            total_weight,
            lower_bound,
        }
    }

    /// Bins in creation order.
    #[inline]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn bin(&self, id: BinIdentifier) -> Option<&Bin> {
        id.get().checked_sub(1).and_then(|i| self.bins.get(i))
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    #[inline]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    #[inline]
    pub fn meets_lower_bound(&self) -> bool {
        self.bins.len() <= self.lower_bound
    }

    /// Solo bins whose single item is heavier than the capacity.
    pub fn oversized_bins(&self) -> impl Iterator<Item = &Bin> + '_ {
        self.bins
            .iter()
            .filter(|b| self.capacity.is_exceeded_by(b.load()))
    }

    /// Every `(bin, item)` pair, grouped by bin in creation order.
    pub fn assignments(&self) -> impl Iterator<Item = (BinIdentifier, ItemIdentifier)> + '_ {
        self.bins
            .iter()
            .flat_map(|b| b.items().iter().map(move |&item| (b.id(), item)))
    }

    /// Total load divided by total bin capacity, in `[0, 1]` unless some bin is
    /// oversized. Zero when there are no bins.
    pub fn fill_ratio(&self) -> f64 {
        if self.bins.is_empty() {
            return 0.0;
        }
        self.total_weight.as_secs_f64() / (self.capacity.as_secs_f64() * self.bins.len() as f64)
    }
}
