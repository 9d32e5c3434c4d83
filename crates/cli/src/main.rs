// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! recs - print the first or last records of a file
//!
//! Thin glue around `recs-core`: argument parsing, usage text, and the
//! mapping from typed errors to exit codes. Logging goes to stderr via
//! `RUST_LOG` so stdout stays verbatim file content.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use recs_core::{Config, ConfigError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "recs",
    version,
    about = "Print the first or last records of a file"
)]
struct Cli {
    /// Number of records to print; 0 or omitted prints the whole file
    #[arg(short = 'l', long = "lines", value_name = "N")]
    lines: Option<String>,

    /// Select the last records instead of the first
    #[arg(short = 't', long = "tail")]
    tail: bool,

    /// Record delimiter: a literal character or an escape such as \t
    #[arg(short = 'd', long = "delimiter", value_name = "C")]
    delimiter: Option<String>,

    /// File to print
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Historical behavior: a bad invocation is answered with the
            // usage text on stdout and a success exit, like a help request.
            debug!(%err, "invalid invocation");
            show_usage();
            process::exit(0);
        }
    };

    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let config = match Config::resolve(
        cli.lines.as_deref(),
        cli.delimiter.as_deref(),
        cli.tail,
        cli.file,
    ) {
        Ok(config) => config,
        Err(err @ ConfigError::LineCountTooLarge) => {
            eprintln!("{err}");
            return 1;
        }
        Err(err) => {
            debug!(%err, "invalid invocation");
            show_usage();
            return 0;
        }
    };

    match recs_core::print_file(&config, io::stdout().lock()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn show_usage() {
    let _ = Cli::command().print_help();
}
