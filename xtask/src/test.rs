//! Test execution for the icon tooling.
//!
//! Runs `cargo test -p <crate>` for each host crate using the host toolchain.

use crate::config::Config;
use anyhow::Result;
use xshell::{Shell, cmd};

/// Crates whose tests run on the host.
const HOST_TESTABLE_CRATES: &[&str] = &["mdi-codegen", "xtask"];

/// Run unit and integration tests for `package`, or for every host crate.
pub fn run_tests(config: &Config, package: Option<&str>, extra_args: &[String]) -> Result<()> {
    let sh = Shell::new()?;
    sh.change_dir(&config.workspace_root);

    let crates: Vec<&str> = match package {
        Some(name) => vec![name],
        None => HOST_TESTABLE_CRATES.to_vec(),
    };

    println!("Running host tests...");

    for crate_name in crates {
        println!("  Testing {crate_name}...");
        cmd!(sh, "cargo test -p {crate_name} -- {extra_args...}")
            .run()
            .map_err(|e| anyhow::anyhow!("cargo test -p {crate_name} failed: {e}"))?;
    }

    println!("All host tests passed.");
    Ok(())
}
