//! Command-line interface definitions for mdi-codegen.

use std::path::PathBuf;

use clap::Parser;
use mdi_codegen::config::{BoundOrder, DEFAULT_PREFIX};

/// Generate the Material Design icon X-macro header from a `codepoints` table.
///
/// With no arguments, reads `./codepoints` and prints the header to stdout.
#[derive(Parser)]
#[command(name = "mdi-codegen", version, about)]
pub struct Cli {
    /// Path to the `codepoints` table.
    #[arg(default_value = "codepoints")]
    pub input: PathBuf,

    /// Write the header to this file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Ordering used for the ICON_MIN / ICON_MAX bounds.
    #[arg(long, value_enum, default_value_t)]
    pub order: BoundOrder,

    /// Macro name prefix.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Print errors only.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print table statistics and timings to stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
