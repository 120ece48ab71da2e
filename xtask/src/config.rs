//! Configuration loading from workspace metadata.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Codegen config file used when the workspace does not name one.
const DEFAULT_CODEGEN_CONFIG: &str = "codegen.toml";

/// `[workspace.metadata.mdi]` in the root Cargo.toml.
#[derive(Debug, Deserialize)]
struct MdiMetadata {
    /// Path of the codegen config, relative to the workspace root.
    #[serde(rename = "codegen-config")]
    codegen_config: Option<PathBuf>,
}

/// Workspace configuration.
#[derive(Debug, Deserialize)]
struct WorkspaceConfig {
    workspace: WorkspaceSection,
}

#[derive(Debug, Deserialize)]
struct WorkspaceSection {
    metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    mdi: Option<MdiMetadata>,
}

/// Configuration for xtask commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root directory.
    pub workspace_root: PathBuf,
    /// Absolute path of `codegen.toml`.
    pub codegen_config: PathBuf,
}

impl Config {
    /// Load configuration from workspace.
    pub fn load() -> Result<Self> {
        let workspace_root = find_workspace_root()?;
        Self::from_root(workspace_root)
    }

    /// Load configuration for the workspace rooted at `workspace_root`.
    pub fn from_root(workspace_root: PathBuf) -> Result<Self> {
        let cargo_toml = workspace_root.join("Cargo.toml");
        let content = std::fs::read_to_string(&cargo_toml)
            .with_context(|| format!("Failed to read {}", cargo_toml.display()))?;

        let codegen_config = codegen_config_path(&content)
            .context("Failed to parse Cargo.toml")?;

        Ok(Self {
            codegen_config: workspace_root.join(codegen_config),
            workspace_root,
        })
    }

    /// Resolve a path from `codegen.toml` against the workspace root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.workspace_root.join(path)
    }
}

/// Extract the codegen config location from root Cargo.toml contents.
fn codegen_config_path(cargo_toml: &str) -> Result<PathBuf> {
    let config: WorkspaceConfig = toml::from_str(cargo_toml)?;
    Ok(config
        .workspace
        .metadata
        .and_then(|m| m.mdi)
        .and_then(|m| m.codegen_config)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CODEGEN_CONFIG)))
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root() -> Result<PathBuf> {
    let mut dir = std::env::current_dir().context("Failed to get current directory")?;

    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml)?;
            if content.contains("[workspace]") {
                return Ok(dir);
            }
        }

        if !dir.pop() {
            anyhow::bail!("Could not find workspace root (no Cargo.toml with [workspace] found)");
        }
    }
}
