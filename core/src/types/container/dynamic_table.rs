use super::Container;
use crate::types::value::{Table, TableError, Values};
use crate::types::Name;
use std::any::Any;
use std::sync::Arc;

/// A single named column of a [`DynamicTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct VectorData {
    pub name: String,
    pub description: String,
    pub data: Values,
}

/// Named table container: row ids plus described columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicTable {
    name: Name,
    description: String,
    id: Vec<u64>,
    columns: Vec<VectorData>,
}

impl DynamicTable {
    /// Creates a table with no rows and no columns.
    pub fn new(name: Name, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            id: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Builds a table container from tabular data. The table index becomes the row ids.
    pub fn from_table(name: Name, description: impl Into<String>, table: &Table) -> Self {
        let columns = table
            .columns()
            .iter()
            .map(|(column, values)| VectorData {
                name: column.clone(),
                description: String::new(),
                data: values.clone(),
            })
            .collect();

        Self {
            name,
            description: description.into(),
            id: table.index().to_vec(),
            columns,
        }
    }

    /// Appends a column. On a table without rows the column defines them, with ids `0..n`.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        data: impl Into<Values>,
    ) -> Result<(), TableError> {
        let name = name.into();
        let data = data.into();

        if self.columns.iter().any(|c| c.name == name) {
            return Err(TableError::DuplicateColumn(name));
        }

        if self.columns.is_empty() && self.id.is_empty() {
            self.id = (0..data.len() as u64).collect();
        } else if data.len() != self.id.len() {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.id.len(),
                found: data.len(),
            });
        }

        self.columns.push(VectorData {
            name,
            description: description.into(),
            data,
        });
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn id(&self) -> &[u64] {
        &self.id
    }

    pub fn columns(&self) -> &[VectorData] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.id.len()
    }

    /// Converts back to tabular data, indexed by row id.
    pub fn to_table(&self) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| (c.name.clone(), c.data.clone()))
            .collect();
        Table::from_parts(self.id.clone(), columns)
    }
}

impl Container for DynamicTable {
    fn name(&self) -> &Name {
        &self.name
    }

    fn neurodata_type(&self) -> &'static str {
        "DynamicTable"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
