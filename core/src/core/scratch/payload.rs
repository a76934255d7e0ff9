use crate::types::{
    Array, DynamicTable, RawData, Scalar, ScratchData, ScratchObject, Table, TimeSeries,
};
use std::sync::Arc;

/// Anything that can be added to or read back from scratch.
///
/// Raw kinds (`Scalar`, `Array`, `Table`) are wrapped on ingestion; `Object`
/// is stored as-is under its own name.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Scalar(Scalar),
    Array(Array),
    Table(Table),
    Object(ScratchObject),
}

impl Payload {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Payload::Scalar(_) => "scalar",
            Payload::Array(_) => "array",
            Payload::Table(_) => "table",
            Payload::Object(_) => "object",
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Payload::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Payload::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Payload::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ScratchObject> {
        match self {
            Payload::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<RawData> for Payload {
    fn from(data: RawData) -> Self {
        match data {
            RawData::Scalar(scalar) => Payload::Scalar(scalar),
            RawData::Array(array) => Payload::Array(array),
        }
    }
}

impl From<Scalar> for Payload {
    fn from(scalar: Scalar) -> Self {
        Payload::Scalar(scalar)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Scalar(value.into())
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Payload::Scalar(value.into())
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Scalar(value.into())
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Scalar(value.into())
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Scalar(value.into())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Scalar(value.into())
    }
}

impl From<Array> for Payload {
    fn from(array: Array) -> Self {
        Payload::Array(array)
    }
}

impl From<Vec<i64>> for Payload {
    fn from(value: Vec<i64>) -> Self {
        Payload::Array(value.into())
    }
}

impl From<Vec<f64>> for Payload {
    fn from(value: Vec<f64>) -> Self {
        Payload::Array(value.into())
    }
}

impl From<Vec<bool>> for Payload {
    fn from(value: Vec<bool>) -> Self {
        Payload::Array(value.into())
    }
}

impl From<Vec<String>> for Payload {
    fn from(value: Vec<String>) -> Self {
        Payload::Array(value.into())
    }
}

impl From<Table> for Payload {
    fn from(table: Table) -> Self {
        Payload::Table(table)
    }
}

impl From<ScratchObject> for Payload {
    fn from(object: ScratchObject) -> Self {
        Payload::Object(object)
    }
}

impl From<Arc<ScratchData>> for Payload {
    fn from(data: Arc<ScratchData>) -> Self {
        Payload::Object(data.into())
    }
}

impl From<Arc<DynamicTable>> for Payload {
    fn from(table: Arc<DynamicTable>) -> Self {
        Payload::Object(table.into())
    }
}

impl From<Arc<TimeSeries>> for Payload {
    fn from(series: Arc<TimeSeries>) -> Self {
        Payload::Object(series.into())
    }
}
