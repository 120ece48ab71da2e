//! Material Design icon header generator.
//!
//! Usage:
//!   mdi-codegen                          - read ./codepoints, print header to stdout
//!   mdi-codegen <table> -o <header>      - write header to a file
//!   mdi-codegen --order numeric          - numeric ICON_MIN / ICON_MAX bounds

mod cli;
mod verbose;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use mdi_codegen::{HeaderOptions, IconTable, render_header};

use crate::verbose::{Timer, dprintln, vprintln};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    let table = {
        let _t = Timer::start("load");
        IconTable::load(&cli.input).context("Failed to load icon table")?
    };
    vprintln!("{}: {} icons", cli.input.display(), table.len());

    let duplicates = table.duplicate_names();
    if !duplicates.is_empty() {
        dprintln!(
            "warning: {} icon name(s) appear more than once in {}",
            duplicates.len(),
            cli.input.display()
        );
        vprintln!("  duplicates: {}", duplicates.join(", "));
    }

    let options = HeaderOptions {
        prefix: cli.prefix,
        order: cli.order,
    };
    let header = {
        let _t = Timer::start("render");
        render_header(&table, &options).context("Failed to generate header")?
    };

    match cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            std::fs::write(&path, &header)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            dprintln!("  -> {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(header.as_bytes())
                .context("Failed to write header to stdout")?;
            stdout.flush().context("Failed to write header to stdout")?;
        }
    }

    Ok(())
}
