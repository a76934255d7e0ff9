use super::{Scalar, Values};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrayError {
    #[error("shape {shape:?} holds {expected} elements but {len} were given")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        len: usize,
    },

    #[error("shape {shape:?} has more elements than fit in usize")]
    ShapeOverflow { shape: Vec<usize> },
}

/// Fixed-shape array stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    values: Values,
}

impl Array {
    pub fn new(shape: Vec<usize>, values: impl Into<Values>) -> Result<Self, ArrayError> {
        let values = values.into();
        let expected = if shape.contains(&0) {
            Some(0)
        } else {
            shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        };
        let Some(expected) = expected else {
            return Err(ArrayError::ShapeOverflow { shape });
        };
        if expected != values.len() {
            return Err(ArrayError::ShapeMismatch {
                shape,
                expected,
                len: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn into_values(self) -> Values {
        self.values
    }

    /// Element at a multi-dimensional index, `None` if the index has the wrong
    /// rank or is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<Scalar> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.values.get(offset)
    }
}

impl From<Values> for Array {
    fn from(values: Values) -> Self {
        Self {
            shape: vec![values.len()],
            values,
        }
    }
}

impl From<Vec<i64>> for Array {
    fn from(value: Vec<i64>) -> Self {
        Values::from(value).into()
    }
}

impl From<Vec<f64>> for Array {
    fn from(value: Vec<f64>) -> Self {
        Values::from(value).into()
    }
}

impl From<Vec<bool>> for Array {
    fn from(value: Vec<bool>) -> Self {
        Values::from(value).into()
    }
}

impl From<Vec<String>> for Array {
    fn from(value: Vec<String>) -> Self {
        Values::from(value).into()
    }
}
