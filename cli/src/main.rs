//! Harmonia CLI
//!
//! Test and benchmark driver for the Harmonia hash family.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{benchmark, hash_files, hash_strings, self_test, Algorithm};
use std::path::PathBuf;
use std::process::ExitCode;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "harmonia")]
#[command(about = "HARMONIA 256-bit hash family (v2.2 / Fast / NG)", long_about = None)]
#[command(version)]
struct Cli {
    /// Run the embedded self-tests for every variant
    #[arg(short, long)]
    test: bool,

    /// Run the throughput benchmark
    #[arg(short, long)]
    benchmark: bool,

    /// Treat arguments as file paths instead of literal strings
    #[arg(short, long)]
    file: bool,

    /// Hash variant to use
    #[arg(short, long, value_enum, default_value_t = Algorithm::V2)]
    algo: Algorithm,

    /// Strings (or files, with --file) to hash
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.test {
        return Ok(self_test());
    }

    if cli.benchmark {
        benchmark(cli.algo);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.inputs.is_empty() {
        // No arguments: run the self-test, like the reference driver.
        return Ok(self_test());
    }

    if cli.file {
        let paths: Vec<PathBuf> = cli.inputs.iter().map(PathBuf::from).collect();
        hash_files(&paths, cli.algo)?;
    } else {
        hash_strings(&cli.inputs, cli.algo);
    }

    Ok(ExitCode::SUCCESS)
}
