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

mod cli;
mod config;
mod persist;
mod report;

use crate::{cli::Cli, config::RunConfig, persist::RunWindow};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use loop_pack_model::prelude::PackingValidator;
use loop_pack_solver::prelude::{Comparison, FirstFitDecreasingPacker, FirstFitPacker, Packer};
use std::io::Write;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: RunConfig) -> Result<()> {
    let _span = tracing::info_span!("run", input = %config.input.display()).entered();

    let loaded = config
        .loader()
        .from_path(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    tracing::info!(
        column = loaded.column(),
        items = loaded.instance().len(),
        unparsable = loaded.diagnostics().len(),
        "input loaded"
    );

    let packers: [&dyn Packer; 2] = [&FirstFitPacker, &FirstFitDecreasingPacker];

    let start_ts = Utc::now();
    let comparison = Comparison::run(loaded.instance(), config.capacity, &packers, config.mode);
    let end_ts = Utc::now();

    if config.verify {
        for run in comparison.runs() {
            if let Err(e) = PackingValidator::validate(loaded.instance(), run.result()) {
                bail!("{} produced an inconsistent packing: {e}", run.name());
            }
        }
        tracing::info!(runs = comparison.runs().len(), "packings verified");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_header(&mut out, &config.input, &loaded, &comparison)?;
    report::write_summary(&mut out, &comparison)?;
    for run in comparison.runs() {
        report::write_bins(&mut out, run, loaded.instance())?;
    }

    if let Some(dir) = &config.out_dir {
        let written = persist::save(
            dir,
            &config.input,
            &loaded,
            &comparison,
            RunWindow { start_ts, end_ts },
        )?;
        let names: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        writeln!(out)?;
        writeln!(out, "Results saved: {}", names.join(", "))?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    enable_tracing();

    let config = RunConfig::from_cli(cli)?;
    run(config)
}
