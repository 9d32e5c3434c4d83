// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reverse selection: last N records from the end.

use crate::prelude::*;

#[test]
fn prints_the_last_record() {
    let (_dir, path) = file_with(b"a\nb\nc\n");
    recs()
        .args(["--tail", "--lines=1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("c\n\n");
}

#[test]
fn prints_the_last_two_records() {
    let (_dir, path) = file_with(b"a\nb\nc\n");
    recs()
        .args(["--tail", "--lines=2"])
        .arg(&path)
        .assert()
        .success()
        .stdout("b\nc\n\n");
}

#[test]
fn final_record_without_trailing_delimiter_is_fully_printed() {
    let (_dir, path) = file_with(b"a\nb\nc");
    recs()
        .args(["--tail", "--lines=1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("c\n");
}

#[test]
fn unbounded_tail_prints_the_entire_file() {
    let (_dir, path) = file_with(b"a\nb\nc\n");
    recs()
        .arg("--tail")
        .arg(&path)
        .assert()
        .success()
        .stdout("a\nb\nc\n\n");
}

#[test]
fn asking_for_more_records_than_exist_prints_everything() {
    let (_dir, path) = file_with(b"a\nb\nc\n");
    recs()
        .args(["--tail", "--lines=99"])
        .arg(&path)
        .assert()
        .success()
        .stdout("a\nb\nc\n\n");
}

#[test]
fn tab_delimiter_selects_the_last_record() {
    let (_dir, path) = file_with(b"x\ty\tz");
    recs()
        .args(["--tail", "--delimiter=\\t", "--lines=1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("z\n");
}

#[test]
fn empty_file_prints_a_single_newline() {
    let (_dir, path) = file_with(b"");
    recs()
        .args(["--tail", "--lines=4"])
        .arg(&path)
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn large_files_are_tailed_without_loading_everything() {
    let content: String = (0..3000).map(|i| format!("line-{i}\n")).collect();
    let (_dir, path) = file_with(content.as_bytes());
    recs()
        .args(["--tail", "--lines=2"])
        .arg(&path)
        .assert()
        .success()
        .stdout("line-2998\nline-2999\n\n");
}
