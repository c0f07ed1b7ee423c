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

//! Runs several packers over the same batch and times each of them.

use crate::{bound::LowerBound, packing::Packer};
use loop_pack_core::prelude::Capacity;
use loop_pack_model::prelude::{Instance, PackingResult};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// One rayon task per packer. Each run still sees the same input.
    Parallel,
}

#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    name: &'static str,
    result: PackingResult,
    elapsed: Duration,
}

impl AlgorithmRun {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn result(&self) -> &PackingResult {
        &self.result
    }

    /// Wall-clock time of the packing call alone.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

#[derive(Debug, Clone)]
pub struct Comparison {
    capacity: Capacity,
    lower_bound: usize,
    runs: Vec<AlgorithmRun>,
}

impl Comparison {
    /// Packs `instance` once per packer. Runs are reported in `packers` order
    /// regardless of `mode`.
    pub fn run(
        instance: &Instance,
        capacity: Capacity,
        packers: &[&dyn Packer],
        mode: ExecutionMode,
    ) -> Self {
        let timed = |packer: &&dyn Packer| {
            let t0 = Instant::now();
            let result = packer.pack(instance, capacity);
            let elapsed = t0.elapsed();
            tracing::info!(
                packer = packer.name(),
                bins = result.bin_count(),
                elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
                "run complete"
            );
            AlgorithmRun {
                name: packer.name(),
                result,
                elapsed,
            }
        };

        let runs: Vec<AlgorithmRun> = match mode {
            ExecutionMode::Sequential => packers.iter().map(timed).collect(),
            ExecutionMode::Parallel => packers.par_iter().map(timed).collect(),
        };

        Self {
            capacity,
            lower_bound: LowerBound::of_instance(instance, capacity),
            runs,
        }
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    #[inline]
    pub fn runs(&self) -> &[AlgorithmRun] {
        &self.runs
    }

    pub fn get(&self, name: &str) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.name == name)
    }

    /// The run with the fewest bins; the earliest wins a tie.
    pub fn best(&self) -> Option<&AlgorithmRun> {
        self.runs
            .iter()
            .enumerate()
            .min_by_key(|(i, r)| (r.result.bin_count(), *i))
            .map(|(_, r)| r)
    }
}
