use crate::label::error::{check_length, LabelError};
use crate::label::rule::LabelRule;
use crate::label::select::eligible_atoms;
use crate::mol::Mol;
use crate::traits::{HasAtomMapNumMut, HasAtomicNum, HasHydrogenCount};

/// Sets every atom's map number from `labels` for file export.
///
/// Eligible atoms with a non-empty label get the first run of digits in the
/// label (`"H-12b"` → 12), or 0 when it has none. Every other atom gets 0,
/// so the result depends only on the labels and the rule. `None` leaves the
/// structure untouched.
///
/// Fails without writing anything when `labels` is not one entry per atom.
pub fn sync_map_numbers<A, B>(
    mol: &mut Mol<A, B>,
    labels: Option<&[String]>,
    rule: LabelRule,
) -> Result<(), LabelError>
where
    A: HasAtomicNum + HasHydrogenCount + HasAtomMapNumMut,
{
    let Some(labels) = labels else {
        return Ok(());
    };
    check_length(labels, mol.atom_count())?;

    let picks = eligible_atoms(mol, rule);
    for idx in mol.atoms().collect::<Vec<_>>() {
        let map_num = if picks.contains(&idx.index()) {
            map_number_from_label(&labels[idx.index()])
        } else {
            0
        };
        *mol.atom_mut(idx).atom_map_num_mut() = map_num;
    }
    Ok(())
}

/// The first maximal run of ASCII digits in `label`, or 0 when there is
/// none. Runs too large for `u32` saturate.
pub fn map_number_from_label(label: &str) -> u32 {
    let digits = label
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    digits.bytes().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}
