pub mod core;
pub mod types;

pub use crate::core::NwbFile;
pub use crate::core::scratch::error::ScratchError;
pub use crate::core::scratch::{
    AddOutcome, Argument, Conversion, Payload, ScratchOptions, ScratchStore, ScratchWarning,
};
