use thiserror::Error;

use crate::label::LabelError;
use crate::molfile::MolfileError;
use crate::smiles::SmilesError;

/// Errors surfaced by [`LabeledStructure`](crate::LabeledStructure).
#[derive(Debug, Error)]
pub enum Error {
    #[error("chemical name is empty")]
    EmptyName,

    #[error("no structure available for {name:?}")]
    StructureUnavailable { name: String },

    #[error("failed to read structure: {0}")]
    Smiles(#[from] SmilesError),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Molfile(#[from] MolfileError),
}
