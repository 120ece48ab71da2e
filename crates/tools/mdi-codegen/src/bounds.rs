//! Codepoint bounds of an icon table.

use std::cmp::Ordering;

use crate::codepoints::{Codepoint, IconTable};
use crate::config::BoundOrder;
use crate::error::CodegenError;

impl BoundOrder {
    /// Compares two codepoints under this ordering.
    pub fn compare(self, a: &Codepoint, b: &Codepoint) -> Ordering {
        match self {
            Self::Lexicographic => a.as_str().cmp(b.as_str()),
            Self::Numeric => a.value().cmp(&b.value()),
        }
    }
}

/// Smallest and largest codepoint of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconBounds<'a> {
    /// First codepoint in sorted order.
    pub min: &'a Codepoint,
    /// Last codepoint in sorted order.
    pub max: &'a Codepoint,
}

impl<'a> IconBounds<'a> {
    /// Computes the bounds of `table` under `order`.
    pub fn of(table: &'a IconTable, order: BoundOrder) -> Result<Self, CodegenError> {
        let sorted = sorted_codepoints(table, order);
        match (sorted.first(), sorted.last()) {
            (Some(&min), Some(&max)) => Ok(Self { min, max }),
            _ => Err(CodegenError::EmptyTable),
        }
    }
}

/// All codepoints of `table` in ascending `order`.
///
/// The sort is stable, so equal keys keep file order.
pub fn sorted_codepoints(table: &IconTable, order: BoundOrder) -> Vec<&Codepoint> {
    let mut codepoints: Vec<&Codepoint> = table.iter().map(|e| &e.codepoint).collect();
    codepoints.sort_by(|a, b| order.compare(a, b));
    codepoints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(cps: &[&'a Codepoint]) -> Vec<&'a str> {
        cps.iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn equal_width_bounds() {
        let table = IconTable::parse("zoo_outlined 007A\nadd 0041\nmid 0050\n").unwrap();
        let bounds = IconBounds::of(&table, BoundOrder::Lexicographic).unwrap();
        assert_eq!(bounds.min.as_str(), "0041");
        assert_eq!(bounds.max.as_str(), "007A");
    }

    #[test]
    fn lexicographic_order_differs_from_numeric_for_mixed_widths() {
        let table = IconTable::parse("a e000\nb F0001\nc f8ff\n").unwrap();

        let lex = sorted_codepoints(&table, BoundOrder::Lexicographic);
        assert_eq!(texts(&lex), ["F0001", "e000", "f8ff"]);
        let bounds = IconBounds::of(&table, BoundOrder::Lexicographic).unwrap();
        assert_eq!(bounds.min.as_str(), "F0001");
        assert_eq!(bounds.max.as_str(), "f8ff");

        let num = sorted_codepoints(&table, BoundOrder::Numeric);
        assert_eq!(texts(&num), ["e000", "f8ff", "F0001"]);
        let bounds = IconBounds::of(&table, BoundOrder::Numeric).unwrap();
        assert_eq!(bounds.min.as_str(), "e000");
        assert_eq!(bounds.max.as_str(), "F0001");
    }

    #[test]
    fn numeric_ties_keep_file_order() {
        let table = IconTable::parse("a 041\nb 0041\nc 41\n").unwrap();
        let num = sorted_codepoints(&table, BoundOrder::Numeric);
        assert_eq!(texts(&num), ["041", "0041", "41"]);
    }

    #[test]
    fn single_entry_is_both_bounds() {
        let table = IconTable::parse("only e145\n").unwrap();
        let bounds = IconBounds::of(&table, BoundOrder::Numeric).unwrap();
        assert_eq!(bounds.min, bounds.max);
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let table = IconTable::default();
        assert!(matches!(
            IconBounds::of(&table, BoundOrder::Lexicographic),
            Err(CodegenError::EmptyTable)
        ));
    }
}
