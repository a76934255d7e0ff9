use super::{Scalar, Values};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("column {column} has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Row-indexed table of named, equal-length columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Vec<u64>,
    columns: Vec<(String, Values)>,
}

impl Table {
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Assembles a table from parts that were already checked.
    pub(crate) fn from_parts(index: Vec<u64>, columns: Vec<(String, Values)>) -> Self {
        Self { index, columns }
    }

    pub fn index(&self) -> &[u64] {
        &self.index
    }

    pub fn columns(&self) -> &[(String, Values)] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Values> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, values)| values)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn num_rows(&self) -> usize {
        self.index.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Row-major cell values, one inner vec per row in column order.
    pub fn values(&self) -> Vec<Vec<Scalar>> {
        (0..self.num_rows())
            .map(|row| {
                self.columns
                    .iter()
                    .filter_map(|(_, values)| values.get(row))
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct TableBuilder {
    index: Option<Vec<u64>>,
    columns: Vec<(String, Values)>,
}

impl TableBuilder {
    pub fn column(mut self, name: impl Into<String>, values: impl Into<Values>) -> Self {
        self.columns.push((name.into(), values.into()));
        self
    }

    /// Row labels. Defaults to `0..n` when not set.
    pub fn index(mut self, index: Vec<u64>) -> Self {
        self.index = Some(index);
        self
    }

    pub fn build(self) -> Result<Table, TableError> {
        let rows = match (&self.index, self.columns.first()) {
            (Some(index), _) => index.len(),
            (None, Some((_, values))) => values.len(),
            (None, None) => 0,
        };

        for (i, (name, values)) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|(other, _)| other == name) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
            if values.len() != rows {
                return Err(TableError::LengthMismatch {
                    column: name.clone(),
                    expected: rows,
                    found: values.len(),
                });
            }
        }

        let index = self.index.unwrap_or_else(|| (0..rows as u64).collect());
        Ok(Table {
            index,
            columns: self.columns,
        })
    }
}
