//! placeprobe CLI - report distinct provinces and jurisdictions from a
//! historic places SQLite database

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{common, report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match report::execute(&cli.global).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<common::ExitCode>() {
            Some(code) => std::process::ExitCode::from(u8::try_from(code.0).unwrap_or(1)),
            None => {
                // Unexpected failures are reported, not treated as a crash.
                println!("Error: {:#}", err);
                std::process::ExitCode::SUCCESS
            }
        },
    }
}
