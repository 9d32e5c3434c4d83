// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error handling: exit codes, stderr diagnostics, and the historical
//! usage-is-help behavior.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn missing_file_reports_on_stderr_and_fails() {
    recs()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wasn't found"));
}

#[test]
fn oversized_line_count_fails_with_a_diagnostic() {
    let (_dir, path) = file_with(b"a\n");
    recs()
        .arg("--lines=1000000000000000000")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "number of lines must be from 0 to 1000000000000000000",
        ));
}

#[test]
fn non_numeric_line_count_shows_usage_and_exits_zero() {
    let (_dir, path) = file_with(b"a\n");
    recs()
        .arg("--lines=many")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn bad_delimiter_shows_usage_and_exits_zero() {
    let (_dir, path) = file_with(b"a\n");
    recs()
        .args(["--delimiter=abc"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_shows_usage_and_exits_zero() {
    let (_dir, path) = file_with(b"a\n");
    recs()
        .arg("--frobnicate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_argument_shows_usage_and_exits_zero() {
    recs()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
