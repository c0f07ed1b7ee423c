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

//! CSV loader for duration batches.
//!
//! The loader reads a header row and any number of data rows, picks the
//! duration column, and turns each row's value into an [`Item`] whose
//! identifier is the zero-based data-row position. Rows with fewer fields
//! than the header are accepted; a missing field reads as empty text.
//!
//! When no column is configured, [`select_duration_column`] decides: a header
//! named `duration` (any case) wins, then the first column whose first data
//! value is a bare number, then the first column.
//!
//! [`Item`]: crate::problem::item::Item

use crate::{
    common::ItemIdentifier,
    problem::{
        builder::InstanceBuilder,
        err::{LoadError, ValueError, WeightParseError},
        instance::Instance,
        parse::{WeightParser, is_bare_number},
        unit::DurationUnit,
    },
};
use loop_pack_core::prelude::Weight;
use std::{fs::File, io::Read, path::Path};

/// What to do with a value that matches no known duration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnparsablePolicy {
    /// Read it as zero and record a [`Diagnostic`].
    #[default]
    Zero,
    /// Abort the load with [`LoadError::Value`].
    Fail,
}

/// A value that was read as zero under [`UnparsablePolicy::Zero`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    index: ItemIdentifier,
    raw: String,
}

impl Diagnostic {
    #[inline]
    pub fn index(&self) -> ItemIdentifier {
        self.index
    }

    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}: unparsable duration '{}' read as 0",
            self.index.get(),
            self.raw
        )
    }
}

#[derive(Debug, Clone)]
pub struct LoadedInstance {
    instance: Instance,
    column: String,
    unit: DurationUnit,
    diagnostics: Vec<Diagnostic>,
}

impl LoadedInstance {
    #[inline]
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    #[inline]
    pub fn into_instance(self) -> Instance {
        self.instance
    }

    /// Header of the column the durations were read from.
    #[inline]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[inline]
    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstanceLoader {
    column: Option<String>,
    unit: DurationUnit,
    policy: UnparsablePolicy,
}

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads durations from the column with exactly this header.
    #[inline]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column = Some(name.into());
        self
    }

    #[inline]
    pub fn column_opt(mut self, name: Option<String>) -> Self {
        self.column = name;
        self
    }

    #[inline]
    pub fn unit(mut self, unit: DurationUnit) -> Self {
        self.unit = unit;
        self
    }

    #[inline]
    pub fn policy(mut self, policy: UnparsablePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_reader<R: Read>(&self, r: R) -> Result<LoadedInstance, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(r);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Err(LoadError::EmptyInput);
        }

        let col = match &self.column {
            Some(name) => headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::ColumnNotFound(name.clone()))?,
            None => {
                let first: Vec<&str> = rows[0].iter().collect();
                select_duration_column(&headers, &first).ok_or(LoadError::NoColumns)?
            }
        };
        let column = headers[col].clone();
        tracing::debug!(column = %column, unit = %self.unit, rows = rows.len(), "reading durations");

        let parser = WeightParser::new(self.unit);
        let mut builder = InstanceBuilder::with_capacity(rows.len());
        let mut diagnostics = Vec::new();

        for row in &rows {
            let index = builder.next_id();
            let raw = row.get(col).unwrap_or("");
            let weight = match parser.parse(raw) {
                Ok(w) => w,
                Err(WeightParseError::Unparsable(_)) if self.policy == UnparsablePolicy::Zero => {
                    tracing::warn!(row = index.get(), raw, "unparsable duration read as 0");
                    diagnostics.push(Diagnostic {
                        index,
                        raw: raw.to_string(),
                    });
                    Weight::ZERO
                }
                Err(e) => return Err(ValueError::new(index, raw, e).into()),
            };
            builder.push(weight);
        }

        Ok(LoadedInstance {
            instance: builder.build()?,
            column,
            unit: self.unit,
            diagnostics,
        })
    }

    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<LoadedInstance, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::SourceMissing(path.to_path_buf()));
        }
        let file = File::open(path)?;
        self.from_reader(file)
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<LoadedInstance, LoadError> {
        self.from_reader(s.as_bytes())
    }
}

/// Picks the duration column when none is configured.
///
/// Returns `None` only when there are no headers.
pub fn select_duration_column<H, V>(headers: &[H], first_row: &[V]) -> Option<usize>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    if headers.is_empty() {
        return None;
    }
    if let Some(i) = headers
        .iter()
        .position(|h| h.as_ref().eq_ignore_ascii_case("duration"))
    {
        return Some(i);
    }
    let numeric = (0..headers.len()).find(|&i| {
        first_row
            .get(i)
            .map(|v| is_bare_number(v.as_ref()))
            .unwrap_or(false)
    });
    Some(numeric.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRACKS: &str = "\
title,artist,duration
Intro,A,1:00
Verse,B,40
Bridge,C,0:00:20
Outro,D,\"20\"
";

    fn secs(inst: &Instance) -> Vec<f64> {
        inst.weights().map(Weight::as_secs_f64).collect()
    }

    #[test]
    fn test_loads_duration_column_by_name() {
        let loaded = InstanceLoader::new().from_str(TRACKS).unwrap();
        assert_eq!(loaded.column(), "duration");
        assert_eq!(secs(loaded.instance()), vec![60.0, 40.0, 20.0, 20.0]);
        assert!(loaded.diagnostics().is_empty());
        assert_eq!(loaded.unit(), DurationUnit::Seconds);
    }

    #[test]
    fn test_duration_header_match_is_case_insensitive() {
        let csv = "id,DURATION\n7,30\n";
        let loaded = InstanceLoader::new().from_str(csv).unwrap();
        assert_eq!(loaded.column(), "DURATION");
        assert_eq!(secs(loaded.instance()), vec![30.0]);
    }

    #[test]
    fn test_falls_back_to_first_numeric_column() {
        let csv = "name,length_ms,plays\nSong,\"210,000\",5\n";
        let loaded = InstanceLoader::new()
            .unit(DurationUnit::Milliseconds)
            .from_str(csv)
            .unwrap();
        assert_eq!(loaded.column(), "length_ms");
        assert_eq!(secs(loaded.instance()), vec![210.0]);
    }

    #[test]
    fn test_falls_back_to_first_column() {
        let csv = "len,name\n1:30,x\n";
        let loaded = InstanceLoader::new().from_str(csv).unwrap();
        assert_eq!(loaded.column(), "len");
        assert_eq!(secs(loaded.instance()), vec![90.0]);
    }

    #[test]
    fn test_explicit_column_must_exist() {
        let err = InstanceLoader::new()
            .column("seconds")
            .from_str(TRACKS)
            .unwrap_err();
        assert!(matches!(err, LoadError::ColumnNotFound(ref c) if c == "seconds"));
    }

    #[test]
    fn test_explicit_column_is_used() {
        let csv = "a,b\n1,2\n3,4\n";
        let loaded = InstanceLoader::new().column("b").from_str(csv).unwrap();
        assert_eq!(secs(loaded.instance()), vec![2.0, 4.0]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = InstanceLoader::new().from_str("duration\n").unwrap_err();
        assert!(matches!(err, LoadError::EmptyInput));
        let err = InstanceLoader::new().from_str("").unwrap_err();
        assert!(matches!(err, LoadError::EmptyInput));
    }

    #[test]
    fn test_unparsable_values_become_zero_with_diagnostics() {
        let csv = "duration\n30\nabc\n1:xx\n";
        let loaded = InstanceLoader::new().from_str(csv).unwrap();
        assert_eq!(secs(loaded.instance()), vec![30.0, 0.0, 0.0]);

        let rows: Vec<usize> = loaded
            .diagnostics()
            .iter()
            .map(|d| d.index().get())
            .collect();
        assert_eq!(rows, vec![1, 2]);
        assert_eq!(loaded.diagnostics()[0].raw(), "abc");
    }

    #[test]
    fn test_strict_policy_rejects_unparsable_values() {
        let csv = "duration\n30\nabc\n";
        let err = InstanceLoader::new()
            .policy(UnparsablePolicy::Fail)
            .from_str(csv)
            .unwrap_err();
        match err {
            LoadError::Value(e) => {
                assert_eq!(e.index(), ItemIdentifier::new(1));
                assert_eq!(e.raw(), "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_values_are_rejected_under_any_policy() {
        let csv = "duration\n-5\n";
        let err = InstanceLoader::new().from_str(csv).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Value(ref e) if matches!(e.error(), WeightParseError::Negative(_))
        ));
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let csv = "title,duration\nA,10\nB\n";
        let loaded = InstanceLoader::new().from_str(csv).unwrap();
        assert_eq!(secs(loaded.instance()), vec![10.0, 0.0]);
        assert_eq!(loaded.diagnostics().len(), 1);
    }

    #[test]
    fn test_from_path_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = InstanceLoader::new().from_path(&missing).unwrap_err();
        assert!(matches!(err, LoadError::SourceMissing(ref p) if p == &missing));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRACKS.as_bytes()).unwrap();
        let loaded = InstanceLoader::new().from_path(file.path()).unwrap();
        assert_eq!(loaded.instance().len(), 4);
        assert_eq!(loaded.into_instance().total_weight(), Weight::from_secs(140));
    }

    #[test]
    fn test_select_duration_column_policy() {
        assert_eq!(select_duration_column::<&str, &str>(&[], &[]), None);
        assert_eq!(
            select_duration_column(&["x", "Duration"], &["1", "2"]),
            Some(1)
        );
        assert_eq!(select_duration_column(&["x", "y"], &["a", "2"]), Some(1));
        assert_eq!(select_duration_column(&["x", "y"], &["a", "b"]), Some(0));
        assert_eq!(select_duration_column(&["x", "y"], &["a"]), Some(0));
    }
}
