// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random-access byte sources.
//!
//! The reverse scanner needs the total length up front plus reads at
//! arbitrary offsets. Offsets are passed explicitly on every read so no
//! seek state is shared between the backward probe and the forward
//! re-emission.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Random access over a fixed-length byte source.
pub trait ByteSource {
    /// Total length in bytes.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read up to `buf.len()` bytes starting at `offset`.
    ///
    /// Returns the number of bytes read; 0 means `offset` is at or past
    /// the end.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;

    /// Fill `buf` exactly, starting at `offset`.
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let mut offset = offset;
        let mut buf = buf;
        while !buf.is_empty() {
            match self.read_at(offset, buf)? {
                0 => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "source ended before the requested range",
                    ))
                }
                read => {
                    offset += read as u64;
                    let rest = buf;
                    buf = &mut rest[read..];
                }
            }
        }
        Ok(())
    }

    /// Read the single byte at `offset`.
    fn byte_at(&mut self, offset: u64) -> io::Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact_at(offset, &mut byte)?;
        Ok(byte[0])
    }
}

/// [`ByteSource`] over anything seekable.
///
/// Production code wraps a [`File`]; tests wrap an [`io::Cursor`]. The
/// length is captured once at construction, matching the single-reader
/// model: nothing else mutates the file while a run is in progress.
pub struct SeekSource<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> SeekSource<R> {
    pub fn new(mut inner: R) -> io::Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.rewind()?;
        Ok(Self { inner, len })
    }
}

impl SeekSource<File> {
    pub fn open(path: &Path) -> io::Result<Self> {
        Self::new(File::open(path)?)
    }
}

impl<R: Read + Seek> ByteSource for SeekSource<R> {
    fn len(&self) -> u64 {
        self.len
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        if offset >= self.len {
            return Ok(0);
        }
        self.inner.seek(SeekFrom::Start(offset))?;
        self.inner.read(buf)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
