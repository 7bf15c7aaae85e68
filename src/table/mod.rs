//! Ordered row/column accumulator.
//!
//! Lookups go through hash maps, while iteration order for both rows and
//! columns is the order in which keys were first written. The exported CSV
//! depends on that order being stable.

pub mod row;

pub use row::Row;

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
    row_index: HashMap<String, usize>,
    columns: Vec<String>,
    column_set: HashSet<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at (`row`, `column`), registering either key on first use.
    /// An existing value is overwritten.
    pub fn set(&mut self, row: &str, column: &str, value: f64) {
        if !self.column_set.contains(column) {
            self.column_set.insert(column.to_string());
            self.columns.push(column.to_string());
        }

        let idx = match self.row_index.get(row) {
            Some(&idx) => idx,
            None => {
                self.rows.push(Row::new(row));
                self.row_index.insert(row.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        self.rows[idx].set(column, value);
    }

    /// `None` when the row is unknown or has no value for `column`.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        self.row(row).and_then(|r| r.get(column))
    }

    pub fn row(&self, name: &str) -> Option<&Row> {
        self.row_index.get(name).map(|&idx| &self.rows[idx])
    }

    /// Rows in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Column names in first-seen order, across all rows.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(table: &Table) -> Vec<&str> {
        table.rows().map(Row::name).collect()
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut t = Table::new();
        t.set("zeta", "b", 1.0);
        t.set("alpha", "a", 2.0);
        t.set("zeta", "a", 3.0);
        t.set("mid", "c", 4.0);

        assert_eq!(names(&t), vec!["zeta", "alpha", "mid"]);
        assert_eq!(t.columns(), ["b", "a", "c"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn last_write_wins() {
        let mut t = Table::new();
        t.set("f", "x", 1.0);
        t.set("f", "x", 7.5);

        assert_eq!(t.get("f", "x"), Some(7.5));
        assert_eq!(t.columns(), ["x"]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn missing_values_are_none() {
        let mut t = Table::new();
        t.set("f", "x", 1.0);
        t.set("g", "y", 2.0);

        assert_eq!(t.get("f", "y"), None);
        assert_eq!(t.get("nope", "x"), None);
        assert!(t.row("nope").is_none());
    }

    #[test]
    fn starts_empty() {
        let t = Table::new();
        assert!(t.is_empty());
        assert!(t.columns().is_empty());
    }
}
