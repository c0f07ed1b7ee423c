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

//! First-fit insertion shared by every packer.
//!
//! Items are taken strictly in the order given. Each one goes into the first
//! existing bin, in creation order, whose load plus the item's weight stays
//! within capacity. When no bin admits it, a new bin is opened for it alone,
//! even if the item by itself exceeds the capacity; such a bin is reported
//! with a warning and can be found with `PackingResult::oversized_bins`.
//!
//! Runs in `O(n * B)` for `n` items and `B` bins produced. No sorting happens
//! here; ordering is the caller's concern.

use loop_pack_core::prelude::Capacity;
use loop_pack_model::prelude::{Bin, BinIdentifier, Item};

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyInsertion;

impl GreedyInsertion {
    pub fn insert<'a, I>(items: I, capacity: Capacity) -> Vec<Bin>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut bins: Vec<Bin> = Vec::new();

        for item in items {
            let target = bins
                .iter_mut()
                .find(|bin| capacity.admits(bin.load(), item.weight()));

            match target {
                Some(bin) => bin.push(item),
                None => {
                    let id = BinIdentifier::new(bins.len() + 1);
                    if capacity.is_exceeded_by(item.weight()) {
                        tracing::warn!(
                            item = item.id().get(),
                            weight = %item.weight(),
                            capacity = %capacity,
                            "item exceeds capacity on its own; opening an oversized bin"
                        );
                    }
                    bins.push(Bin::open(id, item));
                }
            }
        }

        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loop_pack_core::prelude::Weight;
    use loop_pack_model::prelude::{Instance, ItemIdentifier};

    fn cap(secs: f64) -> Capacity {
        Capacity::from_secs_f64(secs).unwrap()
    }

    fn instance(secs: &[u32]) -> Instance {
        Instance::from_weights(secs.iter().map(|&s| Weight::from_secs(s))).unwrap()
    }

    fn members(bins: &[Bin]) -> Vec<Vec<usize>> {
        bins.iter()
            .map(|b| b.items().iter().map(ItemIdentifier::get).collect())
            .collect()
    }

    #[test]
    fn test_places_into_first_bin_that_fits() {
        let inst = instance(&[60, 40, 20, 20]);
        let bins = GreedyInsertion::insert(inst.items(), cap(60.0));
        assert_eq!(members(&bins), vec![vec![0], vec![1, 2], vec![3]]);
        let loads: Vec<Weight> = bins.iter().map(Bin::load).collect();
        assert_eq!(
            loads,
            vec![Weight::from_secs(60), Weight::from_secs(60), Weight::from_secs(20)]
        );
    }

    #[test]
    fn test_revisits_earlier_bins() {
        // 50 opens bin 1, 30 opens bin 2, 10 goes back to bin 1.
        let inst = instance(&[50, 30, 10, 30]);
        let bins = GreedyInsertion::insert(inst.items(), cap(60.0));
        assert_eq!(members(&bins), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_oversized_item_gets_its_own_bin() {
        let inst = instance(&[70]);
        let bins = GreedyInsertion::insert(inst.items(), cap(60.0));
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].load(), Weight::from_secs(70));
    }

    #[test]
    fn test_nothing_joins_an_oversized_bin() {
        let inst = instance(&[70, 0, 5]);
        let bins = GreedyInsertion::insert(inst.items(), cap(60.0));
        assert_eq!(members(&bins), vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_zero_weight_items_share_the_first_bin() {
        let inst = instance(&[0, 0, 60, 0]);
        let bins = GreedyInsertion::insert(inst.items(), cap(60.0));
        assert_eq!(members(&bins), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_empty_input_yields_no_bins() {
        let inst = instance(&[]);
        assert!(GreedyInsertion::insert(inst.items(), cap(60.0)).is_empty());
    }

    #[test]
    fn test_bins_are_numbered_from_one() {
        let inst = instance(&[60, 60, 60]);
        let bins = GreedyInsertion::insert(inst.items(), cap(60.0));
        let ids: Vec<usize> = bins.iter().map(|b| b.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
