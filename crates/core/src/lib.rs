// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! recs-core: record selection over byte sources
//!
//! This crate provides:
//! - Configuration resolution (line counts, delimiter escapes)
//! - A random-access byte source abstraction over seekable readers
//! - The forward reader (first N records) and the reverse boundary
//!   scanner (last N records without a full forward pass)
//! - The output emitter and the file-print orchestrator

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod emit;
pub mod head;
pub mod print;
pub mod source;
pub mod tail;

// Re-exports
pub use config::{decode_escape, parse_delimiter, parse_line_count, Config, ConfigError, Direction};
pub use emit::Emitter;
pub use head::copy_head;
pub use print::{print_file, PrintError};
pub use source::{ByteSource, SeekSource};
pub use tail::{copy_tail, find_start};
