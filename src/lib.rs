//! Numbered atom labels for small-molecule structures.
//!
//! A name-to-structure service hands back extended SMILES whose metadata
//! may carry one label per atom. This crate splits that text
//! ([`parse_extended_smiles`]), builds the structure ([`parse_smiles`]),
//! picks the atoms a [`LabelRule`] allows to be labeled, and writes the
//! labels twice: as display notes for a depiction ([`apply_atom_notes`])
//! and as atom map numbers for file export ([`sync_map_numbers`],
//! [`molfile`]). [`LabeledStructure`] runs the whole flow.
//!
//! ```
//! use chemlabel::{LabelRule, LabeledStructure};
//!
//! let labeled = LabeledStructure::from_extended_smiles("CCO |$_AV:(1;2;)$|", LabelRule::CarbonOnly)?;
//! let notes: Vec<_> = labeled.mol().atoms().map(|i| labeled.mol().atom(i).note.clone()).collect();
//! assert_eq!(notes, [Some("1".to_string()), Some("2".to_string()), None]);
//!
//! let exported = labeled.export_mol()?;
//! let maps: Vec<_> = exported.atoms().map(|i| exported.atom(i).map_num).collect();
//! assert_eq!(maps, [1, 2, 0]);
//! # Ok::<(), chemlabel::Error>(())
//! ```

pub mod atom;
pub mod bond;
pub mod cxsmiles;
pub mod element;
mod error;
pub mod label;
pub mod mol;
pub mod molfile;
pub mod session;
pub mod smiles;
pub mod traits;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use cxsmiles::{parse_extended_smiles, ExtendedSmiles};
pub use element::Element;
pub use error::Error;
pub use label::{
    apply_atom_notes, eligible_atoms, proton_rule_labels, sync_map_numbers, LabelError, LabelRule,
};
pub use mol::Mol;
pub use session::{LabeledStructure, NameResolver};
pub use smiles::{parse_smiles, SmilesError};
pub use traits::{
    HasAtomMapNum, HasAtomMapNumMut, HasAtomNote, HasAtomNoteMut, HasAtomicNum, HasBondOrder,
    HasFormalCharge, HasHydrogenCount, HasIsotope,
};
