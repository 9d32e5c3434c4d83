// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reverse boundary scanner: the last N records from the end of a file.
//!
//! The scanner walks the file backward from the end in fixed-size
//! blocks, counting delimiters until the offset where the requested
//! region begins is known, then re-reads forward from that offset.
//! Memory use is bounded by the block size no matter how large the file
//! is. Backward probing and forward emission are separate phases over an
//! offset-addressed source, so no seek state is shared between them.

use crate::source::ByteSource;
use std::io::{self, Write};
use tracing::debug;

const BLOCK_SIZE: usize = 8192;

/// Progress of the backward walk.
#[derive(Debug)]
struct ScanState {
    bytes_scanned: u64,
    delimiters_seen: u64,
    start_offset: Option<u64>,
}

/// Emit the last `limit` records of `source` to `out`.
pub fn copy_tail<S: ByteSource, W: Write>(
    source: &mut S,
    out: &mut W,
    limit: u64,
    delimiter: u8,
) -> io::Result<()> {
    let start = find_start(source, limit, delimiter)?;
    copy_from(source, out, start)
}

/// Resolve the byte offset where the last `limit` records begin.
///
/// A delimiter occupying the final byte terminates the last record
/// rather than opening an empty one, so it is skipped before counting
/// begins. If the source holds fewer than `limit` records the whole
/// source qualifies and the offset is zero; `limit == 0` selects the
/// whole source as well (the unbounded tail).
pub fn find_start<S: ByteSource>(source: &mut S, limit: u64, delimiter: u8) -> io::Result<u64> {
    let size = source.len();
    if size == 0 || limit == 0 {
        return Ok(0);
    }

    let mut scan_end = size;
    if source.byte_at(size - 1)? == delimiter {
        scan_end -= 1;
    }

    let mut state = ScanState {
        bytes_scanned: 0,
        delimiters_seen: 0,
        start_offset: None,
    };
    let mut block = vec![0u8; BLOCK_SIZE];
    let mut block_end = scan_end;
    while block_end > 0 && state.start_offset.is_none() {
        let block_start = block_end.saturating_sub(BLOCK_SIZE as u64);
        let len = (block_end - block_start) as usize;
        source.read_exact_at(block_start, &mut block[..len])?;

        for i in (0..len).rev() {
            state.bytes_scanned += 1;
            if block[i] == delimiter {
                state.delimiters_seen += 1;
                if state.delimiters_seen == limit {
                    // The region starts just past the delimiter that
                    // completed the count.
                    state.start_offset = Some(block_start + i as u64 + 1);
                    break;
                }
            }
        }
        block_end = block_start;
    }

    // Fewer records than asked for: everything qualifies.
    let start = state.start_offset.unwrap_or(0);
    debug!(
        size,
        start,
        scanned = state.bytes_scanned,
        delimiters = state.delimiters_seen,
        "tail boundary resolved"
    );
    Ok(start)
}

/// Forward re-emission from a resolved offset to the end of the source.
fn copy_from<S: ByteSource, W: Write>(
    source: &mut S,
    out: &mut W,
    mut offset: u64,
) -> io::Result<()> {
    let mut block = vec![0u8; BLOCK_SIZE];
    loop {
        let read = source.read_at(offset, &mut block)?;
        if read == 0 {
            return Ok(());
        }
        out.write_all(&block[..read])?;
        offset += read as u64;
    }
}

#[cfg(test)]
#[path = "tail_tests.rs"]
mod tests;
