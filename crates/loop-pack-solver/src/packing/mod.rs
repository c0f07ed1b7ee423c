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

pub mod first_fit;
pub mod first_fit_decreasing;

use crate::{bound::LowerBound, greedy::GreedyInsertion};
use loop_pack_core::prelude::Capacity;
use loop_pack_model::prelude::{Instance, Item, PackingResult};

pub use first_fit::FirstFitPacker;
pub use first_fit_decreasing::FirstFitDecreasingPacker;

/// A packing heuristic built on [`GreedyInsertion`].
///
/// Implementors only choose the order in which items are offered; placement
/// is always first fit. Packing never fails: capacity and weights are
/// validated by their types, and an item that does not fit any bin gets a new
/// one.
pub trait Packer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Order in which items are offered to the insertion core.
    fn order<'i>(&self, instance: &'i Instance) -> Vec<&'i Item>;

    fn pack(&self, instance: &Instance, capacity: Capacity) -> PackingResult {
        let bins = GreedyInsertion::insert(self.order(instance), capacity);
        let lower_bound = LowerBound::of_instance(instance, capacity);

        tracing::debug!(
            packer = self.name(),
            items = instance.len(),
            bins = bins.len(),
            lower_bound,
            "packing finished"
        );

        PackingResult::new(bins, capacity, instance.total_weight(), lower_bound)
    }
}
