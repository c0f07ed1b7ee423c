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

//! Console report of a comparison run.

use loop_pack_model::prelude::{Instance, LoadedInstance};
use loop_pack_solver::prelude::{AlgorithmRun, Comparison};
use std::{io::Write, path::Path};

pub fn write_header<W: Write>(
    w: &mut W,
    source: &Path,
    loaded: &LoadedInstance,
    comparison: &Comparison,
) -> std::io::Result<()> {
    writeln!(w, "Reading file: {}", source.display())?;
    writeln!(
        w,
        "Duration column: {} (unit {}, normalized to seconds). Items: {}",
        loaded.column(),
        loaded.unit(),
        loaded.instance().len()
    )?;
    writeln!(w, "Lower bound (ceil sum/capacity) = {}", comparison.lower_bound())?;
    if !loaded.diagnostics().is_empty() {
        writeln!(
            w,
            "Unparsable values read as 0: {}",
            loaded.diagnostics().len()
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, comparison: &Comparison) -> std::io::Result<()> {
    let width = comparison
        .runs()
        .iter()
        .map(|r| r.name().len())
        .max()
        .unwrap_or(0);

    writeln!(w)?;
    writeln!(w, "Summary:")?;
    for run in comparison.runs() {
        writeln!(
            w,
            " {:<width$} : bins = {}, time = {:.6}s",
            run.name(),
            run.result().bin_count(),
            run.elapsed().as_secs_f64(),
        )?;
    }
    Ok(())
}

/// One line per bin, members as `index(weight)`.
pub fn write_bins<W: Write>(w: &mut W, run: &AlgorithmRun, instance: &Instance) -> std::io::Result<()> {
    let result = run.result();

    writeln!(w)?;
    writeln!(w, "--- {} ---", run.name())?;
    writeln!(
        w,
        "Loops: {} (capacity per loop = {:.2}s)",
        result.bin_count(),
        result.capacity()
    )?;
    for bin in result.bins() {
        let members = bin
            .items()
            .iter()
            .map(|&id| match instance.weight_of(id) {
                Some(weight) => format!("{}({:.2}s)", id.get(), weight),
                None => format!("{}(?)", id.get()),
            })
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            w,
            " Loop {:02}: load = {:.2}s | items = {} | {}",
            bin.id().get(),
            bin.load(),
            bin.len(),
            members
        )?;
    }
    writeln!(w, "Total duration of all items: {:.2}s", result.total_weight())?;
    writeln!(w, "Lower bound (ceil sum/capacity): {}", result.lower_bound())?;

    let oversized = result.oversized_bins().count();
    if oversized > 0 {
        writeln!(w, "Oversized loops (single item above capacity): {oversized}")?;
    }
    Ok(())
}
