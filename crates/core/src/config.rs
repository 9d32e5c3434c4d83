// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved invocation parameters and delimiter/line-count parsing.
//!
//! Parsing is split into pure functions so each rule can be tested in
//! isolation; the CLI decides what each error means for the process.

use std::path::PathBuf;
use thiserror::Error;

/// Line counts are capped at 18 decimal digits (values below 10^18).
pub const MAX_LINE_COUNT_DIGITS: usize = 18;

/// Errors produced while resolving an invocation into a [`Config`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line count must be a non-negative decimal number, got {0:?}")]
    LineCountNotNumeric(String),
    #[error("number of lines must be from 0 to 1000000000000000000")]
    LineCountTooLarge,
    #[error("delimiter must be a single character or an escape like \\t, got {0:?}")]
    BadDelimiter(String),
}

/// Which end of the file records are selected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Head,
    Tail,
}

/// A fully resolved invocation. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of records to select; 0 means the whole file.
    pub lines: u64,
    /// The single byte separating records.
    pub delimiter: u8,
    pub direction: Direction,
    pub path: PathBuf,
}

impl Config {
    /// Resolve raw CLI values into a validated configuration.
    ///
    /// Absent values fall back to the defaults: unbounded line count,
    /// newline delimiter, head direction.
    pub fn resolve(
        lines: Option<&str>,
        delimiter: Option<&str>,
        tail: bool,
        path: PathBuf,
    ) -> Result<Self, ConfigError> {
        let lines = match lines {
            Some(raw) => parse_line_count(raw)?,
            None => 0,
        };
        let delimiter = match delimiter {
            Some(raw) => parse_delimiter(raw)?,
            None => b'\n',
        };
        let direction = if tail { Direction::Tail } else { Direction::Head };
        Ok(Self {
            lines,
            delimiter,
            direction,
            path,
        })
    }
}

/// Parse a line count: non-empty, ASCII digits only, at most 18 digits.
///
/// Digit-ness is checked before length so that non-numeric input stays a
/// usage-class error while an oversized numeric value is the overflow
/// error, which the CLI maps to a failure exit.
pub fn parse_line_count(raw: &str) -> Result<u64, ConfigError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::LineCountNotNumeric(raw.to_string()));
    }
    if raw.len() > MAX_LINE_COUNT_DIGITS {
        return Err(ConfigError::LineCountTooLarge);
    }
    raw.parse().map_err(|_| ConfigError::LineCountTooLarge)
}

/// Parse a delimiter spec: a single byte, or a backslash escape.
///
/// Multi-byte UTF-8 characters are rejected; records are separated by
/// exactly one byte.
pub fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    match raw.as_bytes() {
        [byte] => Ok(*byte),
        [b'\\', escape] => {
            decode_escape(*escape).ok_or_else(|| ConfigError::BadDelimiter(raw.to_string()))
        }
        _ => Err(ConfigError::BadDelimiter(raw.to_string())),
    }
}

/// Decode the character after a backslash into a control byte.
pub fn decode_escape(escape: u8) -> Option<u8> {
    match escape {
        b't' => Some(b'\t'),
        b'b' => Some(0x08),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b'f' => Some(0x0C),
        b'v' => Some(0x0B),
        b'a' => Some(0x07),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
