// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the behavioral specs.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn recs() -> Command {
    Command::cargo_bin("recs").unwrap()
}

/// Write `content` to a fresh temp file; keep the directory alive for
/// the duration of the test.
pub fn file_with(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
