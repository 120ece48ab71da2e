//! Build automation for the icon tooling.
//!
//! Usage:
//!   cargo xtask codegen          - Regenerate icon headers from codegen.toml
//!   cargo xtask codegen --check  - Fail if a checked-in header is out of date
//!   cargo xtask test             - Run host tests

mod codegen;
mod config;
mod test;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the icon tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run code generators from codegen.toml
    Codegen {
        /// Compare against checked-in headers instead of writing them
        #[arg(long)]
        check: bool,
    },

    /// Run tests for host crates
    Test {
        /// Package to test (default: all host crates)
        #[arg(short, long)]
        package: Option<String>,

        /// Extra arguments passed after -- (forwarded to test binary)
        #[arg(last = true)]
        extra_args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Codegen { check } => {
            codegen::run_codegen(&config, check)?;
        }

        Commands::Test {
            package,
            extra_args,
        } => {
            test::run_tests(&config, package.as_deref(), &extra_args)?;
        }
    }

    Ok(())
}
