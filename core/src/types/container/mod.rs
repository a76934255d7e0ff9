//! Typed objects that carry their own name.

use crate::types::Name;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

mod dynamic_table;
mod scratch_data;
mod time_series;

pub use dynamic_table::{DynamicTable, VectorData};
pub use scratch_data::{RawData, ScratchData};
pub use time_series::TimeSeries;

/// A named domain object that can live in a file hierarchy.
pub trait Container: Any + fmt::Debug + Send + Sync {
    fn name(&self) -> &Name;

    /// Schema type name, e.g. `"TimeSeries"`.
    fn neurodata_type(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// An object as held by the scratch store.
///
/// The two wrapper types get their own variants so retrieval can unwrap them;
/// every other container is kept behind a trait object.
#[derive(Debug, Clone)]
pub enum ScratchObject {
    Data(Arc<ScratchData>),
    Table(Arc<DynamicTable>),
    Container(Arc<dyn Container>),
}

impl ScratchObject {
    /// Wraps any container. `ScratchData` and `DynamicTable` land in their own
    /// variants so retrieval can still unwrap them.
    pub fn container<T: Container>(container: Arc<T>) -> Self {
        ScratchObject::Container(container).normalized()
    }

    /// Moves a `ScratchData` or `DynamicTable` held as a trait object into its
    /// dedicated variant. The allocation is unchanged.
    pub fn normalized(self) -> Self {
        match self {
            ScratchObject::Container(container) => {
                let any = Arc::clone(&container).into_any_arc();
                match any.downcast::<ScratchData>() {
                    Ok(data) => ScratchObject::Data(data),
                    Err(any) => match any.downcast::<DynamicTable>() {
                        Ok(table) => ScratchObject::Table(table),
                        Err(_) => ScratchObject::Container(container),
                    },
                }
            }
            other => other,
        }
    }

    fn inner(&self) -> &dyn Container {
        match self {
            ScratchObject::Data(data) => &**data,
            ScratchObject::Table(table) => &**table,
            ScratchObject::Container(container) => &**container,
        }
    }

    pub fn name(&self) -> &Name {
        self.inner().name()
    }

    pub fn neurodata_type(&self) -> &'static str {
        self.inner().neurodata_type()
    }

    pub fn as_scratch_data(&self) -> Option<&Arc<ScratchData>> {
        match self {
            ScratchObject::Data(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_dynamic_table(&self) -> Option<&Arc<DynamicTable>> {
        match self {
            ScratchObject::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Container>(&self) -> Option<&T> {
        self.inner().as_any().downcast_ref::<T>()
    }

    /// True if this holds the very allocation behind `other`.
    pub fn ptr_eq<T: Container>(&self, other: &Arc<T>) -> bool {
        std::ptr::addr_eq(self.inner(), Arc::as_ptr(other))
    }

    /// True if both hold the same allocation.
    pub fn same_object(&self, other: &ScratchObject) -> bool {
        std::ptr::addr_eq(self.inner(), other.inner())
    }
}

/// Objects compare by identity.
impl PartialEq for ScratchObject {
    fn eq(&self, other: &Self) -> bool {
        self.same_object(other)
    }
}

impl From<Arc<ScratchData>> for ScratchObject {
    fn from(data: Arc<ScratchData>) -> Self {
        ScratchObject::Data(data)
    }
}

impl From<Arc<DynamicTable>> for ScratchObject {
    fn from(table: Arc<DynamicTable>) -> Self {
        ScratchObject::Table(table)
    }
}

impl From<Arc<TimeSeries>> for ScratchObject {
    fn from(series: Arc<TimeSeries>) -> Self {
        ScratchObject::Container(series)
    }
}
