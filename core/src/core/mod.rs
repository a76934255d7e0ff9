//! The file object that owns scratch data.

use crate::types::ScratchConfig;
use scratch::error::ScratchError;
use scratch::{AddOutcome, Conversion, Payload, ScratchOptions, ScratchStore};
use std::time::SystemTime;

pub mod scratch;

pub struct NwbFile {
    session_description: String,
    identifier: String,
    session_start_time: SystemTime,
    scratch: ScratchStore,
}

impl NwbFile {
    pub fn new(
        session_description: impl Into<String>,
        identifier: impl Into<String>,
        session_start_time: SystemTime,
    ) -> Self {
        Self::with_config(
            session_description,
            identifier,
            session_start_time,
            &ScratchConfig::default(),
        )
    }

    pub fn with_config(
        session_description: impl Into<String>,
        identifier: impl Into<String>,
        session_start_time: SystemTime,
        config: &ScratchConfig,
    ) -> Self {
        Self {
            session_description: session_description.into(),
            identifier: identifier.into(),
            session_start_time,
            scratch: ScratchStore::new(config),
        }
    }

    pub fn session_description(&self) -> &str {
        &self.session_description
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn session_start_time(&self) -> SystemTime {
        self.session_start_time
    }
}

/// Scratch operations.
impl NwbFile {
    /// Adds scratch data. See [`ScratchStore::add`].
    pub fn add_scratch(
        &mut self,
        payload: impl Into<Payload>,
        options: ScratchOptions,
    ) -> Result<AddOutcome, ScratchError> {
        self.scratch.add(payload, options)
    }

    pub fn get_scratch(&self, name: &str, conversion: Conversion) -> Result<Payload, ScratchError> {
        self.scratch.get(name, conversion)
    }

    /// Read-only view of everything in scratch.
    pub fn scratch(&self) -> &ScratchStore {
        &self.scratch
    }
}

#[cfg(test)]
mod tests;
