use std::collections::HashMap;

/// One named row (a function or a statistic) and its sparse column values.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    name: String,
    values: HashMap<String, f64>,
}

impl Row {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value stored under `column`, if this row has one.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    pub(crate) fn set(&mut self, column: &str, value: f64) {
        self.values.insert(column.to_string(), value);
    }
}
