// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch between the forward reader and the reverse scanner.

use crate::config::{Config, Direction};
use crate::emit::Emitter;
use crate::head::copy_head;
use crate::source::SeekSource;
use crate::tail::copy_tail;
use std::fs::File;
use std::io::{self, BufReader, Write};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while printing a file.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("file {path} wasn't found")]
    Open { path: String, source: io::Error },
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

/// Print the selected records of `config.path` to `out`.
///
/// Opens the file once, runs the forward reader for `Head` or the
/// reverse boundary scanner for `Tail`, and funnels the bytes through
/// the emitter, which closes the run with the trailing newline. Any
/// failure is fatal; nothing is retried.
pub fn print_file<W: Write>(config: &Config, out: W) -> Result<(), PrintError> {
    debug!(
        path = %config.path.display(),
        lines = config.lines,
        delimiter = config.delimiter,
        direction = ?config.direction,
        "printing"
    );

    let file = File::open(&config.path).map_err(|source| PrintError::Open {
        path: config.path.display().to_string(),
        source,
    })?;

    let mut emitter = Emitter::new(out);
    match config.direction {
        Direction::Head => {
            let mut reader = BufReader::new(file);
            copy_head(&mut reader, &mut emitter, config.lines, config.delimiter)?;
        }
        Direction::Tail => {
            let mut source = SeekSource::new(file)?;
            copy_tail(&mut source, &mut emitter, config.lines, config.delimiter)?;
        }
    }
    emitter.finish()?;
    Ok(())
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
