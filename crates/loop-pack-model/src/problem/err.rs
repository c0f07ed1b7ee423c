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

use crate::common::ItemIdentifier;
use std::path::PathBuf;

/// Why a raw duration value could not become a weight.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightParseError {
    /// The text matches no supported format. Holds the cleaned text.
    Unparsable(String),
    /// The value parsed but is below zero after normalization.
    Negative(f64),
    /// The value parsed but does not fit the fixed-point range.
    OutOfRange(f64),
}

impl std::fmt::Display for WeightParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightParseError::Unparsable(s) => {
                write!(f, "'{s}' is not a number, mm:ss or hh:mm:ss duration")
            }
            WeightParseError::Negative(v) => write!(f, "duration {v} is negative"),
            WeightParseError::OutOfRange(v) => write!(f, "duration {v} is out of range"),
        }
    }
}

impl std::error::Error for WeightParseError {}

/// The sum of all item weights does not fit the fixed-point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TotalWeightOverflowError {
    item: ItemIdentifier,
}

impl TotalWeightOverflowError {
    #[inline]
    pub fn new(item: ItemIdentifier) -> Self {
        Self { item }
    }

    #[inline]
    pub fn item(&self) -> ItemIdentifier {
        self.item
    }
}

impl std::fmt::Display for TotalWeightOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Total weight overflows when adding item {}", self.item)
    }
}

impl std::error::Error for TotalWeightOverflowError {}

/// A record whose duration field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueError {
    index: ItemIdentifier,
    raw: String,
    error: WeightParseError,
}

impl ValueError {
    #[inline]
    pub fn new(index: ItemIdentifier, raw: impl Into<String>, error: WeightParseError) -> Self {
        Self {
            index,
            raw: raw.into(),
            error,
        }
    }

    #[inline]
    pub fn index(&self) -> ItemIdentifier {
        self.index
    }

    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn error(&self) -> &WeightParseError {
        &self.error
    }
}

impl std::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Row {} has invalid duration '{}': {}",
            self.index.get(),
            self.raw,
            self.error
        )
    }
}

impl std::error::Error for ValueError {}

#[derive(Debug)]
pub enum LoadError {
    /// The input file does not exist.
    SourceMissing(PathBuf),
    Io(std::io::Error),
    Csv(csv::Error),
    /// The input has a header but no data rows.
    EmptyInput,
    /// The input has no header fields to choose a column from.
    NoColumns,
    /// The configured duration column is not in the header.
    ColumnNotFound(String),
    Value(ValueError),
    TotalWeightOverflow(TotalWeightOverflowError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::SourceMissing(p) => write!(f, "Input file not found: {}", p.display()),
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Csv(e) => write!(f, "CSV error: {e}"),
            LoadError::EmptyInput => write!(f, "Input has no data rows"),
            LoadError::NoColumns => write!(f, "Input has no columns"),
            LoadError::ColumnNotFound(c) => write!(f, "Column '{c}' not found in header"),
            LoadError::Value(e) => write!(f, "{e}"),
            LoadError::TotalWeightOverflow(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::Value(e) => Some(e),
            LoadError::TotalWeightOverflow(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

impl From<ValueError> for LoadError {
    fn from(e: ValueError) -> Self {
        LoadError::Value(e)
    }
}

impl From<TotalWeightOverflowError> for LoadError {
    fn from(e: TotalWeightOverflowError) -> Self {
        LoadError::TotalWeightOverflow(e)
    }
}
