//! Name-keyed scratch store with type-directed ingestion and retrieval.

use crate::types::{
    DuplicatePolicy, DynamicTable, Name, ScratchConfig, ScratchData, ScratchObject,
};
use error::ScratchError;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::Index;
use std::sync::Arc;

mod payload;
mod warning;

pub use payload::Payload;
pub use warning::{Argument, ScratchWarning};

pub mod error {
    use crate::types::NameError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ScratchError {
        #[error(
            "A name is required when adding a numpy.ndarray, pandas.DataFrame, list, or tuple as scratch data."
        )]
        MissingName,

        #[error("invalid scratch name: {0}")]
        InvalidName(#[from] NameError),

        #[error("'{0}' already exists in scratch")]
        NameAlreadyExists(String),

        #[error("scratch entry not found: {0}")]
        NotFound(String),
    }
}

/// Optional arguments to [`ScratchStore::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchOptions {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub table_description: Option<String>,
}

impl ScratchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn table_description(mut self, description: impl Into<String>) -> Self {
        self.table_description = Some(description.into());
        self
    }
}

/// Whether [`ScratchStore::get`] unwraps the stored wrapper types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Conversion {
    /// `ScratchData` yields its raw data, `DynamicTable` its table.
    #[default]
    Unwrap,
    /// The stored object, untouched.
    Stored,
}

#[derive(Debug)]
pub struct AddOutcome {
    /// Key the entry was stored under.
    pub name: Name,
    pub warnings: Vec<ScratchWarning>,
    /// An existing entry was overwritten.
    pub replaced: bool,
}

#[derive(Debug)]
pub struct ScratchStore {
    entries: BTreeMap<String, ScratchObject>,
    on_duplicate: DuplicatePolicy,
    log_warnings: bool,
}

impl ScratchStore {
    pub fn new(config: &ScratchConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            on_duplicate: config.on_duplicate,
            log_warnings: config.log_warnings,
        }
    }
}

impl Default for ScratchStore {
    fn default() -> Self {
        Self::new(&ScratchConfig::default())
    }
}

/// Write operations.
impl ScratchStore {
    /// Adds a payload, wrapping raw data into `ScratchData` or `DynamicTable`.
    ///
    /// Fails without inserting anything when a raw payload has no name, the name
    /// is invalid, or the name is taken under [`DuplicatePolicy::Reject`].
    pub fn add(
        &mut self,
        payload: impl Into<Payload>,
        options: ScratchOptions,
    ) -> Result<AddOutcome, ScratchError> {
        let payload = payload.into();
        let kind = payload.kind();
        let (object, warnings) = ingest(payload, options)?;
        let name = object.name().clone();

        let replaced = match self.entries.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(object);
                false
            }
            Entry::Occupied(mut slot) => match self.on_duplicate {
                DuplicatePolicy::Reject => {
                    tracing::debug!(name = %name, kind, "rejected duplicate scratch entry");
                    return Err(ScratchError::NameAlreadyExists(name.to_string()));
                }
                DuplicatePolicy::Replace => {
                    slot.insert(object);
                    true
                }
            },
        };

        tracing::debug!(name = %name, kind, replaced, "added scratch entry");
        if self.log_warnings {
            for warning in &warnings {
                tracing::warn!(name = %name, "{warning}");
            }
        }

        Ok(AddOutcome {
            name,
            warnings,
            replaced,
        })
    }
}

/// Read operations.
impl ScratchStore {
    pub fn get(&self, name: &str, conversion: Conversion) -> Result<Payload, ScratchError> {
        let object = self
            .lookup(name)
            .ok_or_else(|| ScratchError::NotFound(name.to_string()))?;

        let payload: Payload = match (conversion, object) {
            (Conversion::Unwrap, ScratchObject::Data(data)) => data.data().clone().into(),
            (Conversion::Unwrap, ScratchObject::Table(table)) => Payload::Table(table.to_table()),
            _ => Payload::Object(object.clone()),
        };
        Ok(payload)
    }

    /// The stored object, never unwrapped.
    pub fn entry(&self, name: &str) -> Option<&ScratchObject> {
        self.lookup(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Resolves `name` the way [`ScratchStore::add`] stores it, so surrounding
    /// whitespace is ignored.
    fn lookup(&self, name: &str) -> Option<&ScratchObject> {
        let name = Name::try_from(name).ok()?;
        self.entries.get(name.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScratchObject)> {
        self.entries.iter().map(|(name, object)| (name.as_str(), object))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for ScratchStore {
    type Output = ScratchObject;

    /// # Panics
    /// If there is no entry named `name`.
    fn index(&self, name: &str) -> &ScratchObject {
        match self.lookup(name) {
            Some(object) => object,
            None => panic!("no scratch entry named '{name}'"),
        }
    }
}

/// Normalizes a payload into the object to store, collecting advisory warnings.
fn ingest(
    payload: Payload,
    options: ScratchOptions,
) -> Result<(ScratchObject, Vec<ScratchWarning>), ScratchError> {
    let ScratchOptions {
        name,
        notes,
        table_description,
    } = options;
    let mut warnings = Vec::new();

    let raw_name = |name: Option<String>| -> Result<Name, ScratchError> {
        let name = name.ok_or(ScratchError::MissingName)?;
        Ok(Name::try_from(name)?)
    };

    let object = match payload {
        Payload::Scalar(scalar) => {
            let name = raw_name(name)?;
            if table_description.is_some() {
                warnings.push(ScratchWarning::TableDescriptionIgnoredForData);
            }
            let data = ScratchData::new(name, scalar, notes.unwrap_or_default());
            ScratchObject::Data(Arc::new(data))
        }
        Payload::Array(array) => {
            let name = raw_name(name)?;
            if notes.is_none() {
                warnings.push(ScratchWarning::NotesRecommended);
            }
            if table_description.is_some() {
                warnings.push(ScratchWarning::TableDescriptionIgnoredForData);
            }
            let data = ScratchData::new(name, array, notes.unwrap_or_default());
            ScratchObject::Data(Arc::new(data))
        }
        Payload::Table(table) => {
            let name = raw_name(name)?;
            if table_description.is_none() {
                warnings.push(ScratchWarning::TableDescriptionRecommended);
            }
            if notes.is_some() {
                warnings.push(ScratchWarning::NotesIgnoredForTable);
            }
            let description = table_description.unwrap_or_default();
            let table = DynamicTable::from_table(name, description, &table);
            ScratchObject::Table(Arc::new(table))
        }
        Payload::Object(object) => {
            let supplied = [
                (Argument::Notes, notes.is_some()),
                (Argument::TableDescription, table_description.is_some()),
                (Argument::Name, name.is_some()),
            ];
            warnings.extend(
                supplied
                    .into_iter()
                    .filter(|(_, given)| *given)
                    .map(|(argument, _)| ScratchWarning::IgnoredForContainer(argument)),
            );
            object.normalized()
        }
    };

    Ok((object, warnings))
}
