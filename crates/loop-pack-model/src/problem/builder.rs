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
    common::ItemIdentifier,
    problem::{err::TotalWeightOverflowError, instance::Instance, item::Item},
};
use loop_pack_core::prelude::Weight;

/// Assembles an [`Instance`], assigning identifiers in push order.
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    items: Vec<Item>,
    // `None` once the running sum has overflowed.
    total_weight: Option<Weight>,
}

impl Default for InstanceBuilder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_weight: Some(Weight::ZERO),
        }
    }
}

impl InstanceBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(items: usize) -> Self {
        Self {
            items: Vec::with_capacity(items),
            total_weight: Some(Weight::ZERO),
        }
    }

    #[inline]
    pub fn next_id(&self) -> ItemIdentifier {
        ItemIdentifier::new(self.items.len())
    }

    /// Appends an item and returns its identifier.
    #[inline]
    pub fn push(&mut self, weight: Weight) -> ItemIdentifier {
        let id = self.next_id();
        self.total_weight = self
            .total_weight
            .and_then(|total| total.checked_add(weight));
        self.items.push(Item::new(id, weight));
        id
    }

    #[inline]
    pub fn extend<I>(&mut self, weights: I) -> &mut Self
    where
        I: IntoIterator<Item = Weight>,
    {
        for w in weights {
            self.push(w);
        }
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> Result<Instance, TotalWeightOverflowError> {
        match self.total_weight {
            Some(total) => Ok(Instance::from_parts(self.items, total)),
            None => {
                let mut acc = Weight::ZERO;
                let culprit = self
                    .items
                    .iter()
                    .find(|it| match acc.checked_add(it.weight()) {
                        Some(next) => {
                            acc = next;
                            false
                        }
                        None => true,
                    })
                    .map(Item::id)
                    .unwrap_or_else(|| ItemIdentifier::new(0));
                Err(TotalWeightOverflowError::new(culprit))
            }
        }
    }
}

impl Instance {
    /// Builds an instance from weights in arrival order.
    pub fn from_weights<I>(weights: I) -> Result<Instance, TotalWeightOverflowError>
    where
        I: IntoIterator<Item = Weight>,
    {
        let mut builder = InstanceBuilder::new();
        builder.extend(weights);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(secs: u32) -> Weight {
        Weight::from_secs(secs)
    }

    #[test]
    fn test_assigns_dense_identifiers_in_push_order() {
        let mut b = InstanceBuilder::new();
        assert_eq!(b.push(w(60)), ItemIdentifier::new(0));
        assert_eq!(b.push(w(40)), ItemIdentifier::new(1));
        let inst = b.build().unwrap();

        assert_eq!(inst.len(), 2);
        assert_eq!(inst.items()[1].id(), ItemIdentifier::new(1));
        assert_eq!(inst.weight_of(ItemIdentifier::new(0)), Some(w(60)));
        assert_eq!(inst.weight_of(ItemIdentifier::new(2)), None);
    }

    #[test]
    fn test_tracks_total_weight() {
        let inst = Instance::from_weights([w(60), w(40), w(20), w(20)]).unwrap();
        assert_eq!(inst.total_weight(), w(140));
        let collected: Vec<Weight> = inst.weights().collect();
        assert_eq!(collected, vec![w(60), w(40), w(20), w(20)]);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::from_weights(std::iter::empty()).unwrap();
        assert!(inst.is_empty());
        assert_eq!(inst.total_weight(), Weight::ZERO);
    }

    #[test]
    fn test_default_builder_is_usable() {
        let mut b = InstanceBuilder::default();
        b.push(w(1));
        assert_eq!(b.build().unwrap().total_weight(), w(1));
    }

    #[test]
    fn test_reports_item_that_overflows_total() {
        let huge = Weight::try_from_micros(i64::MAX - 10).unwrap();
        let err = Instance::from_weights([w(1), huge, w(1)]).unwrap_err();
        assert_eq!(err.item(), ItemIdentifier::new(1));
    }
}
