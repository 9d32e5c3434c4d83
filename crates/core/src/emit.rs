// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output emitter.
//!
//! Buffers the selected byte ranges and appends the single trailing
//! newline every run ends with, whichever selection produced the bytes.

use std::io::{self, BufWriter, Write};

/// Buffered writer that closes every run with one trailing newline.
pub struct Emitter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Write the closing newline, flush, and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> Write for Emitter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
