//! In-memory value types accepted as raw scratch payloads.
//!
//! These cover what the scratch store needs to ingest and hand back: scalars,
//! homogeneous buffers, fixed-shape arrays and column tables. They carry no
//! arithmetic.

mod array;
mod table;

pub use array::{Array, ArrayError};
pub use table::{Table, TableBuilder, TableError};

/// A single opaque value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(value: Vec<u8>) -> Self {
        Scalar::Bytes(value)
    }
}

/// Element type of a [`Values`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Int,
    Float,
    Bool,
    Text,
}

/// Homogeneous one-dimensional buffer. Backs both array elements and table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Bool(Vec<bool>),
    Text(Vec<String>),
}

impl Values {
    pub fn dtype(&self) -> DType {
        match self {
            Values::Int(_) => DType::Int,
            Values::Float(_) => DType::Float,
            Values::Bool(_) => DType::Bool,
            Values::Text(_) => DType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Int(v) => v.len(),
            Values::Float(v) => v.len(),
            Values::Bool(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `i` as a [`Scalar`].
    pub fn get(&self, i: usize) -> Option<Scalar> {
        match self {
            Values::Int(v) => v.get(i).copied().map(Scalar::Int),
            Values::Float(v) => v.get(i).copied().map(Scalar::Float),
            Values::Bool(v) => v.get(i).copied().map(Scalar::Bool),
            Values::Text(v) => v.get(i).cloned().map(Scalar::Text),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl From<Vec<i64>> for Values {
    fn from(value: Vec<i64>) -> Self {
        Values::Int(value)
    }
}

impl From<Vec<f64>> for Values {
    fn from(value: Vec<f64>) -> Self {
        Values::Float(value)
    }
}

impl From<Vec<bool>> for Values {
    fn from(value: Vec<bool>) -> Self {
        Values::Bool(value)
    }
}

impl From<Vec<String>> for Values {
    fn from(value: Vec<String>) -> Self {
        Values::Text(value)
    }
}

impl From<Vec<&str>> for Values {
    fn from(value: Vec<&str>) -> Self {
        Values::Text(value.into_iter().map(str::to_string).collect())
    }
}
