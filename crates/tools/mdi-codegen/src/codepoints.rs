//! `codepoints` table loading.
//!
//! The table is one icon per line, `<name> <hex-codepoint>`, separated by a
//! single space and terminated by a newline:
//!
//! ```text
//! 10k e951
//! 3d_rotation e84d
//! add e145
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CodegenError;

/// A codepoint as written in the table, with its scalar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepoint {
    text: String,
    value: u32,
}

impl Codepoint {
    /// Parses hexadecimal codepoint text.
    ///
    /// Returns `None` unless the text is non-empty hex naming a Unicode
    /// scalar value.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(text, 16).ok()?;
        char::from_u32(value)?;
        Some(Self {
            text: text.to_string(),
            value,
        })
    }

    /// The hex digits exactly as written in the table.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The scalar value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Icon name, emitted as a macro token.
    pub name: String,
    /// Icon codepoint.
    pub codepoint: Codepoint,
}

/// All entries of a `codepoints` file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconTable {
    entries: Vec<IconEntry>,
}

impl IconTable {
    /// Reads and parses the table at `path`.
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let src = fs::read_to_string(path).map_err(|source| CodegenError::ReadTable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&src)
    }

    /// Parses table text.
    pub fn parse(src: &str) -> Result<Self, CodegenError> {
        let mut lines: Vec<&str> = src.split('\n').collect();
        // The final newline leaves one empty trailing piece.
        if lines.last() == Some(&"") {
            lines.pop();
        }

        let entries = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| parse_line(i + 1, line.strip_suffix('\r').unwrap_or(line)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    /// Iterates entries in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, IconEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that occur more than once, in order of first occurrence.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.name.as_str()).or_default() += 1;
        }

        let mut dups = Vec::new();
        for entry in &self.entries {
            let name = entry.name.as_str();
            if counts[name] > 1 && !dups.contains(&name) {
                dups.push(name);
            }
        }
        dups
    }
}

impl<'a> IntoIterator for &'a IconTable {
    type Item = &'a IconEntry;
    type IntoIter = std::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_line(line: usize, content: &str) -> Result<IconEntry, CodegenError> {
    let malformed = || CodegenError::MalformedLine {
        line,
        content: content.to_string(),
    };

    let (name, codepoint) = content.split_once(' ').ok_or_else(malformed)?;
    if name.is_empty() || codepoint.is_empty() || codepoint.contains(' ') {
        return Err(malformed());
    }

    let codepoint = Codepoint::parse(codepoint).ok_or_else(|| CodegenError::InvalidCodepoint {
        line,
        text: codepoint.to_string(),
    })?;

    Ok(IconEntry {
        name: name.to_string(),
        codepoint,
    })
}
