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

use crate::packing::Packer;
use loop_pack_model::prelude::{Instance, Item};
use std::cmp::Reverse;

/// First-Fit-Decreasing: items are offered heaviest first.
///
/// Equal weights keep their input order, so results are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstFitDecreasingPacker;

impl FirstFitDecreasingPacker {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for FirstFitDecreasingPacker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FirstFitDecreasingPacker")
    }
}

impl Packer for FirstFitDecreasingPacker {
    fn name(&self) -> &'static str {
        "First-Fit-Decreasing"
    }

    fn order<'i>(&self, instance: &'i Instance) -> Vec<&'i Item> {
        let mut items: Vec<&Item> = instance.iter().collect();
        items.sort_by_key(|item| (Reverse(item.weight()), item.id()));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loop_pack_core::prelude::{Capacity, Weight};
    use loop_pack_model::prelude::ItemIdentifier;

    fn instance(secs: &[u32]) -> Instance {
        Instance::from_weights(secs.iter().map(|&s| Weight::from_secs(s))).unwrap()
    }

    fn cap(secs: f64) -> Capacity {
        Capacity::from_secs_f64(secs).unwrap()
    }

    #[test]
    fn test_order_is_descending_with_stable_ties() {
        let inst = instance(&[20, 60, 40, 20, 60]);
        let order: Vec<usize> = FirstFitDecreasingPacker
            .order(&inst)
            .iter()
            .map(|item| item.id().get())
            .collect();
        assert_eq!(order, vec![1, 4, 2, 0, 3]);
    }

    #[test]
    fn test_worked_example() {
        let inst = instance(&[60, 40, 20, 20]);
        let r = FirstFitDecreasingPacker::new().pack(&inst, cap(60.0));
        assert_eq!(r.bin_count(), 3);
        assert_eq!(r.lower_bound(), 3);
        let loads: Vec<Weight> = r.bins().iter().map(|b| b.load()).collect();
        assert_eq!(
            loads,
            vec![Weight::from_secs(60), Weight::from_secs(60), Weight::from_secs(20)]
        );
    }

    #[test]
    fn test_uses_fewer_bins_than_input_order() {
        let inst = instance(&[2, 5, 4, 7, 1, 3, 8]);
        let r = FirstFitDecreasingPacker.pack(&inst, cap(10.0));
        assert_eq!(r.bin_count(), 3);
        assert!(r.meets_lower_bound());

        let bins: Vec<Vec<usize>> = r
            .bins()
            .iter()
            .map(|b| b.items().iter().map(ItemIdentifier::get).collect())
            .collect();
        assert_eq!(bins, vec![vec![6, 0], vec![3, 5], vec![1, 2, 4]]);
    }

    #[test]
    fn test_name_and_display() {
        assert_eq!(FirstFitDecreasingPacker.name(), "First-Fit-Decreasing");
        assert_eq!(
            FirstFitDecreasingPacker.to_string(),
            "FirstFitDecreasingPacker"
        );
    }
}
