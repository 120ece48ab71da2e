//! C/C++ header emission.
//!
//! For a table `add 0041`, `zoo_outlined 007A` the default output is:
//!
//! ```text
//! #pragma once
//!
//! #define MD_ICON_MIN 0x0041
//! #define MD_ICON_MAX 0x007A
//!
//! #define MD_FOR_EACH_ICON(_) \
//! _(add, u8"\u0041") \
//! _(zoo_outlined, u8"\u007A") \
//! ```
//!
//! Invocation lines follow table order, not bound order.

use std::io::{self, Write};

use crate::bounds::IconBounds;
use crate::codepoints::{Codepoint, IconTable};
use crate::config::{BoundOrder, DEFAULT_PREFIX, IconSetSpec};
use crate::error::CodegenError;

/// Options controlling header output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Macro name prefix.
    pub prefix: String,
    /// Ordering used for the bound constants.
    pub order: BoundOrder,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            order: BoundOrder::default(),
        }
    }
}

impl From<&IconSetSpec> for HeaderOptions {
    fn from(spec: &IconSetSpec) -> Self {
        Self {
            prefix: spec.prefix.clone(),
            order: spec.order,
        }
    }
}

/// Writes the header for `table` to `out`.
pub fn write_header<W: Write + ?Sized>(
    out: &mut W,
    table: &IconTable,
    options: &HeaderOptions,
) -> Result<(), CodegenError> {
    let prefix = options.prefix.as_str();
    if !is_identifier(prefix) {
        return Err(CodegenError::InvalidPrefix(options.prefix.clone()));
    }
    let bounds = IconBounds::of(table, options.order)?;

    writeln!(out, "#pragma once")?;
    writeln!(out)?;
    writeln!(out, "#define {prefix}_ICON_MIN 0x{}", bounds.min.as_str())?;
    writeln!(out, "#define {prefix}_ICON_MAX 0x{}", bounds.max.as_str())?;
    writeln!(out)?;
    writeln!(out, "#define {prefix}_FOR_EACH_ICON(_) \\")?;
    for entry in table {
        writeln!(
            out,
            "_({}, u8\"{}\") \\",
            entry.name,
            unicode_escape(&entry.codepoint)
        )?;
    }
    Ok(())
}

/// Renders the header for `table` into a string.
pub fn render_header(table: &IconTable, options: &HeaderOptions) -> Result<String, CodegenError> {
    let mut buf = Vec::new();
    write_header(&mut buf, table, options)?;
    String::from_utf8(buf)
        .map_err(|e| CodegenError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// C/C++ universal character name for `cp`.
///
/// Four-digit table text is kept verbatim as `\uXXXX`. `\u` takes exactly
/// four digits, so any other width becomes `\UXXXXXXXX`.
fn unicode_escape(cp: &Codepoint) -> String {
    if cp.as_str().len() == 4 {
        format!("\\u{}", cp.as_str())
    } else {
        format!("\\U{:08X}", cp.value())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
