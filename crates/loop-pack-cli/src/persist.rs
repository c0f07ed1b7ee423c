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

//! Result files written with `--save`.
//!
//! Per packer, `<stem>_bins.csv` holds one `bin_id,item_index,duration_s` row
//! per assignment. `summary.txt` and `summary.json` describe the whole run.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use loop_pack_model::prelude::{Instance, LoadedInstance};
use loop_pack_solver::prelude::{AlgorithmRun, Comparison};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Serialize)]
struct BinRow {
    bin_id: usize,
    item_index: usize,
    duration_s: String,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    algorithm: &'a str,
    bins: usize,
    oversized_bins: usize,
    elapsed_s: f64,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    file: String,
    column: &'a str,
    unit: &'a str,
    capacity_s: f64,
    items: usize,
    total_duration_s: f64,
    unparsable_values: usize,
    lower_bound: usize,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runs: Vec<RunSummary<'a>>,
}

/// Wall-clock span of the packing phase, recorded in `summary.json`.
#[derive(Debug, Clone, Copy)]
pub struct RunWindow {
    pub start_ts: DateTime<Utc>,
    pub end_ts: DateTime<Utc>,
}

fn file_stem(algorithm: &str) -> String {
    match algorithm {
        "First-Fit" => "ff".to_string(),
        "First-Fit-Decreasing" => "ffd".to_string(),
        other => other
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect(),
    }
}

fn summary_label(algorithm: &str) -> &str {
    match algorithm {
        "First-Fit-Decreasing" => "FFD",
        other => other,
    }
}

pub fn write_bins_csv<W: Write>(w: W, run: &AlgorithmRun, instance: &Instance) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for (bin, item) in run.result().assignments() {
        let weight = instance
            .weight_of(item)
            .with_context(|| format!("{item} is not part of the instance"))?;
        wtr.serialize(BinRow {
            bin_id: bin.get(),
            item_index: item.get(),
            duration_s: weight.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_summary_txt<W: Write>(mut w: W, source: &Path, comparison: &Comparison) -> Result<()> {
    writeln!(w, "File: {}", source.display())?;
    writeln!(w, "Capacity: {} s", comparison.capacity().as_secs_f64())?;
    writeln!(w, "Lower bound: {}", comparison.lower_bound())?;
    for run in comparison.runs() {
        writeln!(
            w,
            "{}: bins={}, time={:.6}s",
            summary_label(run.name()),
            run.result().bin_count(),
            run.elapsed().as_secs_f64()
        )?;
    }
    Ok(())
}

fn summary_record<'a>(
    source: &Path,
    loaded: &'a LoadedInstance,
    comparison: &'a Comparison,
    window: RunWindow,
) -> SummaryRecord<'a> {
    SummaryRecord {
        file: source.display().to_string(),
        column: loaded.column(),
        unit: loaded.unit().as_str(),
        capacity_s: comparison.capacity().as_secs_f64(),
        items: loaded.instance().len(),
        total_duration_s: loaded.instance().total_weight().as_secs_f64(),
        unparsable_values: loaded.diagnostics().len(),
        lower_bound: comparison.lower_bound(),
        start_ts: window.start_ts,
        end_ts: window.end_ts,
        runs: comparison
            .runs()
            .iter()
            .map(|run| RunSummary {
                algorithm: run.name(),
                bins: run.result().bin_count(),
                oversized_bins: run.result().oversized_bins().count(),
                elapsed_s: run.elapsed().as_secs_f64(),
            })
            .collect(),
    }
}

/// Writes every result file into `dir`, creating it if needed, and returns
/// the paths written.
pub fn save(
    dir: &Path,
    source: &Path,
    loaded: &LoadedInstance,
    comparison: &Comparison,
    window: RunWindow,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();

    for run in comparison.runs() {
        let path = dir.join(format!("{}_bins.csv", file_stem(run.name())));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_bins_csv(file, run, loaded.instance())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    let path = dir.join("summary.txt");
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_summary_txt(file, source, comparison)?;
    written.push(path);

    let path = dir.join("summary.json");
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, &summary_record(source, loaded, comparison, window))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    written.push(path);

    tracing::info!(dir = %dir.display(), files = written.len(), "results saved");
    Ok(written)
}
