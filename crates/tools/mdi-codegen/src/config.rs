//! Configuration types for the code generator.
//!
//! Deserialized from `codegen.toml` at the workspace root.

use serde::Deserialize;
use std::path::PathBuf;

/// Macro prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "MD";

/// Ordering used to pick the `*_ICON_MIN` / `*_ICON_MAX` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BoundOrder {
    /// Compare the codepoint text as strings.
    ///
    /// Matches headers generated so far. For codepoints of differing length
    /// this is not numeric order (`"F0001" < "F8FF"`).
    #[default]
    Lexicographic,
    /// Compare the scalar values.
    Numeric,
}

/// Specification for a single icon header to generate.
#[derive(Debug, Clone, Deserialize)]
pub struct IconSetSpec {
    /// Short name used in diagnostics (e.g. "material").
    pub name: String,
    /// Path to the `codepoints` table, relative to workspace root.
    pub input: PathBuf,
    /// Output header path, relative to workspace root.
    pub output: PathBuf,
    /// Macro prefix (`MD` gives `MD_ICON_MIN` and `MD_FOR_EACH_ICON`).
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Ordering used for the bound constants.
    #[serde(default)]
    pub order: BoundOrder,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Top-level codegen configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CodegenConfig {
    /// Icon header specifications.
    #[serde(default)]
    pub icons: Vec<IconSetSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_entry_uses_defaults() {
        let config: CodegenConfig = toml::from_str(
            r#"
[[icons]]
name = "material"
input = "thirdparty/material-design-icons/codepoints"
output = "thirdparty/material-design-icons/icons.h"
"#,
        )
        .unwrap();

        assert_eq!(config.icons.len(), 1);
        let spec = &config.icons[0];
        assert_eq!(spec.name, "material");
        assert_eq!(spec.prefix, "MD");
        assert_eq!(spec.order, BoundOrder::Lexicographic);
        assert_eq!(spec.output, PathBuf::from("thirdparty/material-design-icons/icons.h"));
    }

    #[test]
    fn parse_explicit_order_and_prefix() {
        let config: CodegenConfig = toml::from_str(
            r#"
[[icons]]
name = "symbols"
input = "a"
output = "b.h"
prefix = "MS"
order = "numeric"
"#,
        )
        .unwrap();

        assert_eq!(config.icons[0].prefix, "MS");
        assert_eq!(config.icons[0].order, BoundOrder::Numeric);
    }

    #[test]
    fn empty_config_has_no_icons() {
        let config: CodegenConfig = toml::from_str("").unwrap();
        assert!(config.icons.is_empty());
    }

    #[test]
    fn unknown_order_is_rejected() {
        let result: Result<CodegenConfig, _> = toml::from_str(
            r#"
[[icons]]
name = "x"
input = "a"
output = "b.h"
order = "random"
"#,
        );
        assert!(result.is_err());
    }
}
