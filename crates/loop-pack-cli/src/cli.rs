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

use clap::{Parser, ValueEnum};
use loop_pack_model::prelude::DurationUnit;
use std::path::PathBuf;

pub const DEFAULT_CAPACITY_SECS: f64 = 60.0;
pub const DEFAULT_OUT_DIR: &str = "results";

#[derive(Parser, Debug)]
#[command(
    name = "loop-pack",
    version,
    about = "Pack durations into fixed-length loops with First-Fit and First-Fit-Decreasing"
)]
pub struct Cli {
    #[arg(help = "CSV file with a header row (defaults to the bundled sample)")]
    pub path: Option<PathBuf>,
    #[arg(long, help = "Header of the duration column (detected when omitted)")]
    pub col: Option<String>,
    #[arg(long, default_value_t = DEFAULT_CAPACITY_SECS, allow_negative_numbers = true, help = "Loop capacity in seconds")]
    pub capacity: f64,
    #[arg(long, value_enum, default_value_t = UnitArg::S, help = "Unit of plain numeric values")]
    pub unit: UnitArg,
    #[arg(long, default_value_t = false, help = "Write bin assignments and a summary to --out")]
    pub save: bool,
    #[arg(long, default_value = DEFAULT_OUT_DIR, help = "Directory for saved results")]
    pub out: PathBuf,
    #[arg(long, default_value_t = false, help = "Fail on values that are not a duration instead of reading them as 0")]
    pub strict: bool,
    #[arg(long, default_value_t = false, help = "Run the packers concurrently")]
    pub parallel: bool,
    #[arg(long, default_value_t = false, help = "Check every packing for consistency before reporting")]
    pub verify: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitArg {
    S,
    Ms,
    Min,
}

impl From<UnitArg> for DurationUnit {
    fn from(u: UnitArg) -> Self {
        match u {
            UnitArg::S => DurationUnit::Seconds,
            UnitArg::Ms => DurationUnit::Milliseconds,
            UnitArg::Min => DurationUnit::Minutes,
        }
    }
}
