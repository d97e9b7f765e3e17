//! A SMILES reader producing [`Mol<Atom, Bond>`](crate::Mol).
//!
//! Aromatic input is kept aromatic (no kekulization) and stereo marks are
//! accepted but not stored. Bracket atom classes (`[CH3:4]`) become the
//! atom's initial map number.

mod builder;
pub mod error;
mod parse_tree;
mod tokenizer;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;
pub use error::SmilesError;

/// Reads one SMILES string into a molecule, atoms in written order.
///
/// Hydrogens written as their own atoms (`[H]OC`) stay graph nodes and count
/// toward [`Mol::atom_count`]; they are not folded into the neighbour's
/// hydrogen count. A label list for such input needs one entry per written
/// atom, hydrogens included (three for `[H]OC`, not two).
pub fn parse_smiles(s: &str) -> Result<Mol<Atom, Bond>, SmilesError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(SmilesError::EmptyInput);
    }
    let tokens = tokenizer::tokenize(trimmed)?;
    if tokens.is_empty() {
        return Err(SmilesError::EmptyInput);
    }
    let tree = parse_tree::build_parse_tree(&tokens)?;
    Ok(builder::build_mol(&tree))
}
