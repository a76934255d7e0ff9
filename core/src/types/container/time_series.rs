use super::Container;
use crate::types::value::Values;
use crate::types::Name;
use std::any::Any;
use std::sync::Arc;

/// Sampled data with a unit and per-sample timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    name: Name,
    data: Values,
    unit: String,
    timestamps: Vec<f64>,
}

impl TimeSeries {
    pub fn new(
        name: Name,
        data: impl Into<Values>,
        unit: impl Into<String>,
        timestamps: Vec<f64>,
    ) -> Self {
        Self {
            name,
            data: data.into(),
            unit: unit.into(),
            timestamps,
        }
    }

    pub fn data(&self) -> &Values {
        &self.data
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }
}

impl Container for TimeSeries {
    fn name(&self) -> &Name {
        &self.name
    }

    fn neurodata_type(&self) -> &'static str {
        "TimeSeries"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
