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

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("loop-pack").unwrap()
}

fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn packs_bundled_sample_by_default() {
    cmd()
        .assert()
        .success()
        .stdout(contains("sample_tracks.csv"))
        .stdout(contains("Duration column: duration"))
        .stdout(contains("Items: 20"))
        .stdout(contains("Lower bound (ceil sum/capacity) = 11"))
        .stdout(contains("--- First-Fit-Decreasing ---"));
}

#[test]
fn worked_example_uses_three_loops() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(tmp.path(), "t.csv", "title,duration\na,60\nb,40\nc,20\nd,20\n");
    cmd()
        .arg(&csv)
        .assert()
        .success()
        .stdout(contains(" First-Fit            : bins = 3"))
        .stdout(contains(" First-Fit-Decreasing : bins = 3"))
        .stdout(contains(" Loop 02: load = 60.00s | items = 2 | 1(40.00s), 2(20.00s)"));
}

#[test]
fn explicit_column_and_unit() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(tmp.path(), "t.csv", "name,len_ms\na,\"90,000\"\nb,30000\n");
    cmd()
        .args([csv.to_str().unwrap(), "--col", "len_ms", "--unit", "ms", "--capacity", "120"])
        .assert()
        .success()
        .stdout(contains("Duration column: len_ms (unit ms"))
        .stdout(contains(" Loop 01: load = 120.00s | items = 2"));
}

#[test]
fn missing_column_fails() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(tmp.path(), "t.csv", "duration\n10\n");
    cmd()
        .args([csv.to_str().unwrap(), "--col", "seconds"])
        .assert()
        .failure()
        .stderr(contains("Column 'seconds' not found"));
}

#[test]
fn invalid_capacity_fails_before_reading_input() {
    cmd()
        .args(["does-not-exist.csv", "--capacity", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid capacity"));
}

#[test]
fn missing_input_fails() {
    cmd()
        .arg("does-not-exist.csv")
        .assert()
        .failure()
        .stderr(contains("Input file not found"));
}

#[test]
fn unparsable_values_are_zero_unless_strict() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(tmp.path(), "t.csv", "duration\n30\nn/a\n");
    cmd()
        .arg(&csv)
        .assert()
        .success()
        .stdout(contains("Unparsable values read as 0: 1"));
    cmd()
        .arg(&csv)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("invalid duration 'n/a'"));
}

#[test]
fn oversized_item_gets_its_own_loop() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(tmp.path(), "t.csv", "duration\n70\n");
    cmd()
        .arg(&csv)
        .args(["--verify", "--parallel"])
        .assert()
        .success()
        .stdout(contains("Lower bound (ceil sum/capacity) = 2"))
        .stdout(contains(" Loop 01: load = 70.00s | items = 1 | 0(70.00s)"))
        .stdout(contains("Oversized loops (single item above capacity): 1"));
}

#[test]
fn save_writes_result_files() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(tmp.path(), "t.csv", "duration\n1:00\n0:40\n0:20\n0:20\n");
    let out = tmp.path().join("results");
    cmd()
        .arg(&csv)
        .arg("--save")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Results saved:"));

    let ffd = fs::read_to_string(out.join("ffd_bins.csv")).unwrap();
    assert_eq!(
        ffd,
        "bin_id,item_index,duration_s\n1,0,60.000000\n2,1,40.000000\n2,2,20.000000\n3,3,20.000000\n"
    );
    assert!(out.join("ff_bins.csv").is_file());

    let summary = fs::read_to_string(out.join("summary.txt")).unwrap();
    assert!(summary.contains("Capacity: 60 s"));
    assert!(summary.contains("Lower bound: 3"));
    assert!(summary.contains("FFD: bins=3"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["runs"][1]["algorithm"], "First-Fit-Decreasing");
}
