//! Code generation command for `cargo xtask codegen`.
//!
//! Reads `codegen.toml` from the workspace root, generates the icon header for
//! each configured table, and writes it to the specified output path. With
//! `--check`, compares against the checked-in headers instead of writing.

use anyhow::{Context, Result};

use mdi_codegen::HeaderOptions;
use mdi_codegen::config::CodegenConfig;

use crate::config::Config;

/// Reads and parses `codegen.toml`.
fn load_codegen_config(config: &Config) -> Result<CodegenConfig> {
    let path = &config.codegen_config;
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&config_str).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Runs the code generation pipeline.
///
/// Reads `codegen.toml`, generates all configured headers, and writes output
/// files. In check mode nothing is written; stale or missing headers are an
/// error.
pub fn run_codegen(config: &Config, check: bool) -> Result<()> {
    let codegen = load_codegen_config(config)?;
    let mut stale = Vec::new();

    for spec in &codegen.icons {
        println!("Generating icons '{}'...", spec.name);

        let source = mdi_codegen::generate(&config.resolve(&spec.input), &HeaderOptions::from(spec))
            .with_context(|| format!("Failed to generate icons '{}'", spec.name))?;

        let output_path = config.resolve(&spec.output);

        if check {
            let current = std::fs::read_to_string(&output_path).ok();
            if current.as_deref() != Some(source.as_str()) {
                println!("  stale: {}", spec.output.display());
                stale.push(spec.output.display().to_string());
            }
            continue;
        }

        // Ensure parent directory exists.
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&output_path, source)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        println!("  -> {}", spec.output.display());
    }

    if !stale.is_empty() {
        anyhow::bail!(
            "Generated headers are out of date: {} (run `cargo xtask codegen`)",
            stale.join(", ")
        );
    }

    println!("Code generation complete.");
    Ok(())
}
