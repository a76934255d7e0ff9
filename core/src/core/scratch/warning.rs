use std::fmt;

/// An optional argument to [`ScratchStore::add`](super::ScratchStore::add).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    Name,
    Notes,
    TableDescription,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Name => write!(f, "name"),
            Argument::Notes => write!(f, "notes"),
            Argument::TableDescription => write!(f, "table_description"),
        }
    }
}

/// Advisory diagnostic raised while adding scratch data. The entry is still added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScratchWarning {
    /// Array added without notes.
    NotesRecommended,
    /// Table added without a description.
    TableDescriptionRecommended,
    /// Notes passed with a table.
    NotesIgnoredForTable,
    /// Table description passed with a scalar or array.
    TableDescriptionIgnoredForData,
    /// Argument passed with an already typed object.
    IgnoredForContainer(Argument),
}

impl fmt::Display for ScratchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScratchWarning::NotesRecommended => write!(
                f,
                "The notes argument for NWBFile.add_scratch is highly recommended when passing a \
                 numpy.ndarray, list, or tuple, and may become required in a future version of PyNWB."
            ),
            ScratchWarning::TableDescriptionRecommended => write!(
                f,
                "The table_description argument for NWBFile.add_scratch is highly recommended when \
                 passing a pandas.DataFrame and may become required in a future version of PyNWB."
            ),
            ScratchWarning::NotesIgnoredForTable => write!(
                f,
                "The notes argument is ignored when adding a pandas.DataFrame to scratch."
            ),
            ScratchWarning::TableDescriptionIgnoredForData => write!(
                f,
                "The table_description argument is ignored when adding a numpy.ndarray, list, \
                 or tuple to scratch."
            ),
            ScratchWarning::IgnoredForContainer(argument) => write!(
                f,
                "The {argument} argument is ignored when adding an NWBContainer, ScratchData, \
                 or DynamicTable to scratch."
            ),
        }
    }
}
