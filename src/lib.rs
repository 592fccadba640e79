//! Treedupe - Cross-Tree Duplicate File Remover
//!
//! A Rust CLI application that compares two directory trees and deletes
//! files from the second tree whose name and content (BLAKE3 digest)
//! match a file in the first tree. The first tree is never modified.

pub mod actions;
pub mod cli;
pub mod dedupe;
pub mod error;
pub mod logging;
pub mod scanner;

use anyhow::Result;

use crate::cli::Cli;
use crate::dedupe::{collect_candidate_hashes, delete_matches};
use crate::error::ExitCode;
use crate::scanner::{IgnoreRules, Walker};

/// Run the full comparison pipeline for a parsed CLI.
///
/// Scans both roots, joins them by basename, hashes candidates, and
/// deletes confirmed duplicates from the second tree. Emits the fixed
/// progress messages on stdout. A missing root (or any traversal
/// failure) is fatal and surfaces as an error; per-file read and delete
/// failures are absorbed by the pipeline.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    if let Some(output) = &cli.output {
        log::warn!(
            "--output is reserved and not yet wired up; ignoring {}",
            output.display()
        );
    }

    let rules = IgnoreRules::default();

    println!("Retrieving files");
    let first = Walker::new(&cli.first, rules.clone()).scan()?;
    let second = Walker::new(&cli.second, rules).scan()?;

    println!("Comparing file names");
    let (first_cache, second_cache) = collect_candidate_hashes(&first, &second);

    println!("Comparing hash values and deleting");
    let stats = delete_matches(&first, &second, &first_cache, &second_cache);
    log::debug!(
        "Run complete: {} repeat deletion(s), {} failure(s)",
        stats.already_gone,
        stats.failures.len()
    );

    println!();
    Ok(ExitCode::Success)
}
