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

use crate::common::{BinIdentifier, ItemIdentifier};
use loop_pack_core::prelude::{Capacity, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An item of the instance is in no bin.
    MissingItem(ItemIdentifier),
    /// An item appears more than once across the bins.
    DuplicateItem(ItemIdentifier),
    /// A bin references an item the instance does not have.
    UnknownItem(BinIdentifier, ItemIdentifier),
    /// A bin with no items.
    EmptyBin(BinIdentifier),
    /// Bin identifiers are not `1..=n` in order.
    BinOrder(BinIdentifier),
    /// A bin's load differs from the sum of its members.
    LoadMismatch(LoadMismatchError),
    /// A bin with several items is above capacity.
    OverCapacity(OverCapacityError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingItem(id) => write!(f, "Item {} is not packed", id),
            ValidationError::DuplicateItem(id) => write!(f, "Item {} is packed more than once", id),
            ValidationError::UnknownItem(bin, id) => {
                write!(f, "Bin {} holds unknown item {}", bin, id)
            }
            ValidationError::EmptyBin(bin) => write!(f, "Bin {} is empty", bin),
            ValidationError::BinOrder(bin) => write!(f, "Bin {} is out of creation order", bin),
            ValidationError::LoadMismatch(e) => write!(f, "{}", e),
            ValidationError::OverCapacity(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMismatchError {
    bin: BinIdentifier,
    recorded: Weight,
    computed: Weight,
}

impl LoadMismatchError {
    #[inline]
    pub fn new(bin: BinIdentifier, recorded: Weight, computed: Weight) -> Self {
        Self {
            bin,
            recorded,
            computed,
        }
    }

    #[inline]
    pub fn bin(&self) -> BinIdentifier {
        self.bin
    }

    #[inline]
    pub fn recorded(&self) -> Weight {
        self.recorded
    }

    #[inline]
    pub fn computed(&self) -> Weight {
        self.computed
    }
}

impl std::fmt::Display for LoadMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bin {} records load {}s but its items sum to {}s",
            self.bin, self.recorded, self.computed
        )
    }
}

impl std::error::Error for LoadMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverCapacityError {
    bin: BinIdentifier,
    load: Weight,
    capacity: Capacity,
}

impl OverCapacityError {
    #[inline]
    pub fn new(bin: BinIdentifier, load: Weight, capacity: Capacity) -> Self {
        Self {
            bin,
            load,
            capacity,
        }
    }

    #[inline]
    pub fn bin(&self) -> BinIdentifier {
        self.bin
    }

    #[inline]
    pub fn load(&self) -> Weight {
        self.load
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

impl std::fmt::Display for OverCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bin {} holds several items with load {}s above capacity {}s",
            self.bin, self.load, self.capacity
        )
    }
}

impl std::error::Error for OverCapacityError {}
