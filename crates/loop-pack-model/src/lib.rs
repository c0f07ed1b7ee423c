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

//! # Loop Pack Model
//!
//! Domain types for packing durations into fixed-capacity loops.
//!
//! - `common`: strongly typed item and bin identifiers.
//! - `problem`: items, instances, duration units, the duration text parser and
//!   the CSV loader with its column detection.
//! - `solution`: bins and packing results.
//! - `validation`: structural checks of a packing against its instance.

pub mod common;
pub mod problem;
pub mod solution;
pub mod validation;

pub mod prelude {
    pub use crate::common::{BinIdentifier, ItemIdentifier};
    pub use crate::problem::{
        builder::InstanceBuilder,
        err::{LoadError, ValueError, WeightParseError},
        instance::Instance,
        item::Item,
        loader::{Diagnostic, InstanceLoader, LoadedInstance, UnparsablePolicy},
        parse::{WeightParser, parse_weight},
        unit::DurationUnit,
    };
    pub use crate::solution::{Bin, PackingResult};
    pub use crate::validation::{PackingValidator, err::ValidationError};
}
