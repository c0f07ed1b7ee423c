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

use crate::{common::ItemIdentifier, problem::item::Item};
use loop_pack_core::prelude::Weight;

/// An ordered batch of items, in arrival order.
///
/// Item identifiers are dense: the item at position `i` has identifier `i`.
/// The total weight is known to fit the fixed-point range, so any partial
/// sum over the items is safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    items: Vec<Item>,
    total_weight: Weight,
}

impl Instance {
    #[inline]
    pub(crate) fn from_parts(items: Vec<Item>, total_weight: Weight) -> Self {
        debug_assert!(items.iter().enumerate().all(|(i, it)| it.id().get() == i));
        Self {
            items,
            total_weight,
        }
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    #[inline]
    pub fn get(&self, id: ItemIdentifier) -> Option<&Item> {
        self.items.get(id.get())
    }

    #[inline]
    pub fn weight_of(&self, id: ItemIdentifier) -> Option<Weight> {
        self.get(id).map(Item::weight)
    }

    #[inline]
    pub fn weights(&self) -> impl ExactSizeIterator<Item = Weight> + '_ {
        self.items.iter().map(Item::weight)
    }
}

impl<'a> IntoIterator for &'a Instance {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
