//! Build-time generator for the Material Design icon header.
//!
//! Turns a `codepoints` table (`<name> <hex-codepoint>` per line) into a C/C++
//! header defining `MD_ICON_MIN`, `MD_ICON_MAX` and the `MD_FOR_EACH_ICON`
//! X-macro. Generated headers are checked into the repository.
//!
//! # Usage
//!
//! Run `mdi-codegen > icons.h` next to a `codepoints` file, or invoke
//! `cargo xtask codegen`, which reads `codegen.toml` at the workspace root and
//! writes every configured header.

pub mod bounds;
pub mod codepoints;
pub mod config;
pub mod error;
pub mod header;

pub use codepoints::{Codepoint, IconEntry, IconTable};
pub use error::CodegenError;
pub use header::{HeaderOptions, render_header, write_header};

use std::path::Path;

/// Loads the table at `input` and renders its header.
pub fn generate(input: &Path, options: &HeaderOptions) -> Result<String, CodegenError> {
    let table = IconTable::load(input)?;
    render_header(&table, options)
}
