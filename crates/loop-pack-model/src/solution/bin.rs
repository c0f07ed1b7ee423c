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
    problem::item::Item,
};
use loop_pack_core::prelude::Weight;
use smallvec::SmallVec;

/// A container of items in insertion order.
///
/// The load is the running sum of member weights; it only changes through
/// [`Bin::push`]. Bins are never merged or split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    id: BinIdentifier,
    items: SmallVec<[ItemIdentifier; 8]>,
    load: Weight,
}

impl Bin {
    /// Opens a bin holding only `first`.
    #[inline]
    pub fn open(id: BinIdentifier, first: &Item) -> Self {
        let mut items = SmallVec::new();
        items.push(first.id());
        Self {
            id,
            items,
            load: first.weight(),
        }
    }

    /// Appends an item.
    ///
    /// # Panics
    ///
    /// Panics if the load overflows, which cannot happen for items of a
    /// single [`Instance`](crate::problem::instance::Instance).
    #[inline]
    pub fn push(&mut self, item: &Item) {
        self.items.push(item.id());
        self.load += item.weight();
    }

    #[inline]
    pub fn id(&self) -> BinIdentifier {
        self.id
    }

    #[inline]
    pub fn items(&self) -> &[ItemIdentifier] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for bins built by [`Bin::open`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn load(&self) -> Weight {
        self.load
    }

    #[inline]
    pub fn is_solo(&self) -> bool {
        self.items.len() == 1
    }
}

impl std::fmt::Display for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bin({}, load {:.2}s, {} items)",
            self.id.get(),
            self.load,
            self.items.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(i: usize, secs: u32) -> Item {
        Item::new(ItemIdentifier::new(i), Weight::from_secs(secs))
    }

    #[test]
    fn test_open_and_push_accumulate_load_in_order() {
        let mut bin = Bin::open(BinIdentifier::new(1), &item(0, 40));
        assert!(bin.is_solo());
        bin.push(&item(2, 20));

        assert_eq!(bin.load(), Weight::from_secs(60));
        assert_eq!(
            bin.items(),
            &[ItemIdentifier::new(0), ItemIdentifier::new(2)]
        );
        assert_eq!(bin.len(), 2);
        assert!(!bin.is_empty());
        assert!(!bin.is_solo());
    }

    #[test]
    fn test_display() {
        let bin = Bin::open(BinIdentifier::new(3), &item(0, 70));
        assert_eq!(bin.to_string(), "Bin(3, load 70.00s, 1 items)");
    }
}
