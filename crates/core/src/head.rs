// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forward reader: the first N records from the start of a file.

use std::io::{self, BufRead, Write};

/// Copy records from `input` until `limit` delimiters have been written.
///
/// The copy stops immediately after the byte completing the `limit`-th
/// delimiter occurrence. A `limit` of zero means no limit and the whole
/// input is copied; so is reaching end of input early — printing less
/// than requested is not a failure.
pub fn copy_head<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    limit: u64,
    delimiter: u8,
) -> io::Result<()> {
    let mut seen = 0u64;
    loop {
        let (consumed, done) = {
            let chunk = input.fill_buf()?;
            if chunk.is_empty() {
                return Ok(());
            }
            match split_after_limit(chunk, &mut seen, limit, delimiter) {
                Some(end) => {
                    out.write_all(&chunk[..end])?;
                    (end, true)
                }
                None => {
                    out.write_all(chunk)?;
                    (chunk.len(), false)
                }
            }
        };
        input.consume(consumed);
        if done {
            return Ok(());
        }
    }
}

/// Index one past the delimiter completing `limit`, if it lies in `chunk`.
///
/// `seen` carries the delimiter count across chunks.
fn split_after_limit(chunk: &[u8], seen: &mut u64, limit: u64, delimiter: u8) -> Option<usize> {
    if limit == 0 {
        return None;
    }
    for (i, &byte) in chunk.iter().enumerate() {
        if byte == delimiter {
            *seen += 1;
            if *seen == limit {
                return Some(i + 1);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "head_tests.rs"]
mod tests;
