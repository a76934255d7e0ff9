pub(crate) mod config;
pub use config::{ConfigError, DuplicatePolicy, ScratchConfig};

pub(crate) mod name;
pub use name::{MAX_NAME_LENGTH, Name, NameError};

pub(crate) mod value;
pub use value::{Array, ArrayError, DType, Scalar, Table, TableBuilder, TableError, Values};

pub(crate) mod container;
pub use container::{
    Container, DynamicTable, RawData, ScratchData, ScratchObject, TimeSeries, VectorData,
};
