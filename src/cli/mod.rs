//! Command-line interface for genome-mapping.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **map**: Filter the hits in a JSON record file and write the records in another format
//! - **list**: List the available filters and formatters
//!
//! ## Usage
//!
//! ```text
//! # Keep exact hits and write GFF3
//! genome-mapping map hits.json --filter exact
//!
//! # Keep hits at 95-100% identity, write JSON to a file
//! genome-mapping map hits.json --filter identity --min 95 --format json -o kept.json
//!
//! # Read records from stdin
//! cat hits.json | genome-mapping map -
//! ```

use clap::{Parser, Subcommand};

pub mod list;
pub mod map;

#[derive(Parser)]
#[command(name = "genome-mapping")]
#[command(version)]
#[command(about = "Select valid alignment hits and write them as JSON or GFF3")]
#[command(
    long_about = "genome-mapping decides which alignment hits count as genuine matches against a genome and serializes hits, features and hit/feature comparisons.\n\nInput is a JSON array of records produced by an upstream aligner."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter hits and write records in the chosen format
    Map(map::MapArgs),

    /// List the available filters and formatters
    List(list::ListArgs),
}
