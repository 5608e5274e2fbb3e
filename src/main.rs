//! archetype-catalog - Read, update and write local archetype catalogs
//!
//! archetype-catalog provides:
//! - Catalog loading from an explicit location, a local repository or ~/.m2
//! - Key-based upsert of archetype entries
//! - Unified output format (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    crate::core::logging::init(cli.verbose, cli.quiet)?;
    cli::run(cli)
}
