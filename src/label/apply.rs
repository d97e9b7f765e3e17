use crate::label::error::{check_length, LabelError};
use crate::label::rule::LabelRule;
use crate::label::select::eligible_atoms;
use crate::mol::Mol;
use crate::traits::{HasAtomNote, HasAtomNoteMut, HasAtomicNum, HasHydrogenCount};

/// Writes `labels` onto the atoms' display notes.
///
/// Eligible atoms with a non-empty label get that label; every other atom
/// has its note cleared, so notes left by an earlier rule do not survive.
/// `None` leaves the structure untouched.
///
/// Fails without writing anything when `labels` is not one entry per atom.
pub fn apply_atom_notes<A, B>(
    mol: &mut Mol<A, B>,
    labels: Option<&[String]>,
    rule: LabelRule,
) -> Result<(), LabelError>
where
    A: HasAtomicNum + HasHydrogenCount + HasAtomNoteMut,
{
    let Some(labels) = labels else {
        return Ok(());
    };
    check_length(labels, mol.atom_count())?;

    let picks = eligible_atoms(mol, rule);
    for idx in mol.atoms().collect::<Vec<_>>() {
        let label = &labels[idx.index()];
        if picks.contains(&idx.index()) && !label.is_empty() {
            *mol.atom_mut(idx).atom_note_mut() = Some(label.clone());
        } else if mol.atom(idx).atom_note().is_some() {
            *mol.atom_mut(idx).atom_note_mut() = None;
        }
    }
    Ok(())
}
