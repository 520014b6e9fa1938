//! CLI argument definitions using clap derive API

use clap::{Args, Parser};
use std::path::PathBuf;

/// placeprobe - list distinct provinces and jurisdictions in a historic places database
#[derive(Parser, Debug)]
#[command(name = "placeprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options for the report
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the database file path
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Override the number of values listed per section
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Config file (defaults to placeprobe.yml in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
