//! Command-line interface definitions for treedupe.
//!
//! This module defines all CLI arguments using the clap derive API.
//! The surface is deliberately small: two positional directory paths,
//! verbosity controls, and a reserved output-file flag.
//!
//! # Example
//!
//! ```bash
//! # Delete files under ./mirror that duplicate same-named files in ./master
//! treedupe ./master ./mirror
//!
//! # Verbose mode for debugging
//! treedupe -v ./master ./mirror
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Cross-tree duplicate file remover.
///
/// Treedupe compares two directory trees by file name, confirms
/// candidates by content hashing (BLAKE3), and deletes every file in
/// the second tree whose name and content match a file in the first
/// tree. Files in the first tree are never touched.
#[derive(Debug, Parser)]
#[command(name = "treedupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reference tree; files here are kept
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Tree to deduplicate; matching files here are deleted
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Report file name (accepted but not yet wired to any output)
    ///
    /// Reserved for a future match report. The flag parses and is
    /// otherwise inert.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report fatal errors as JSON instead of plain text
    #[arg(long)]
    pub json_errors: bool,
}
