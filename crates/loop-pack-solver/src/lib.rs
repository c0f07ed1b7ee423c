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

//! Greedy bin-packing heuristics over duration batches.
//!
//! Both packers share one first-fit insertion core and differ only in the
//! order items are offered: [`FirstFitPacker`](packing::FirstFitPacker) keeps
//! input order, [`FirstFitDecreasingPacker`](packing::FirstFitDecreasingPacker)
//! offers the heaviest items first. [`LowerBound`](bound::LowerBound) gives the
//! yardstick both are measured against.

pub mod bound;
pub mod compare;
pub mod greedy;
pub mod packing;

pub mod prelude {
    pub use crate::bound::{LowerBound, LowerBoundError};
    pub use crate::compare::{AlgorithmRun, Comparison, ExecutionMode};
    pub use crate::greedy::GreedyInsertion;
    pub use crate::packing::{FirstFitDecreasingPacker, FirstFitPacker, Packer};
}
