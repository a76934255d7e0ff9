use super::Container;
use crate::types::value::{Array, Scalar};
use crate::types::Name;
use std::any::Any;
use std::sync::Arc;

/// Raw payload wrapped by [`ScratchData`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawData {
    Scalar(Scalar),
    Array(Array),
}

impl From<Scalar> for RawData {
    fn from(scalar: Scalar) -> Self {
        RawData::Scalar(scalar)
    }
}

impl From<Array> for RawData {
    fn from(array: Array) -> Self {
        RawData::Array(array)
    }
}

/// Unstructured scalar or array data with free-text notes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScratchData {
    name: Name,
    data: RawData,
    notes: String,
}

impl ScratchData {
    pub fn new(name: Name, data: impl Into<RawData>, notes: impl Into<String>) -> Self {
        Self {
            name,
            data: data.into(),
            notes: notes.into(),
        }
    }

    pub fn data(&self) -> &RawData {
        &self.data
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl Container for ScratchData {
    fn name(&self) -> &Name {
        &self.name
    }

    fn neurodata_type(&self) -> &'static str {
        "ScratchData"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
