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

use crate::cli::Cli;
use anyhow::{Context, Result};
use loop_pack_core::prelude::Capacity;
use loop_pack_model::prelude::{DurationUnit, InstanceLoader, UnparsablePolicy};
use loop_pack_solver::prelude::ExecutionMode;
use std::path::{Path, PathBuf};

pub const SAMPLE_DATA: &str = "data/sample_tracks.csv";

/// Nearest ancestor of the crate manifest directory that contains `rel`.
pub fn find_bundled(rel: &str) -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join(rel);
        if cand.is_file() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

/// Everything one run needs, validated up front.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub column: Option<String>,
    pub capacity: Capacity,
    pub unit: DurationUnit,
    pub policy: UnparsablePolicy,
    pub mode: ExecutionMode,
    pub out_dir: Option<PathBuf>,
    pub verify: bool,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let capacity = Capacity::from_secs_f64(cli.capacity)?;

        let input = match cli.path {
            Some(p) => p,
            None => find_bundled(SAMPLE_DATA).with_context(|| {
                format!("No input file given and the bundled `{SAMPLE_DATA}` was not found")
            })?,
        };

        Ok(Self {
            input,
            column: cli.col,
            capacity,
            unit: cli.unit.into(),
            policy: if cli.strict {
                UnparsablePolicy::Fail
            } else {
                UnparsablePolicy::Zero
            },
            mode: if cli.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            },
            out_dir: cli.save.then_some(cli.out),
            verify: cli.verify,
        })
    }

    pub fn loader(&self) -> InstanceLoader {
        InstanceLoader::new()
            .column_opt(self.column.clone())
            .unit(self.unit)
            .policy(self.policy)
    }
}
