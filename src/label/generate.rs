use crate::label::rule::LabelRule;
use crate::label::select::eligible_atoms;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasHydrogenCount};

/// Numbers the [`ProtonRule`](LabelRule::ProtonRule) atoms `1, 2, 3, …` in
/// ascending atom order. All other positions get an empty label.
///
/// The result always has one entry per atom.
pub fn proton_rule_labels<A, B>(mol: &Mol<A, B>) -> Vec<String>
where
    A: HasAtomicNum + HasHydrogenCount,
{
    let mut labels = vec![String::new(); mol.atom_count()];
    for (n, idx) in eligible_atoms(mol, LabelRule::ProtonRule).into_iter().enumerate() {
        labels[idx] = (n + 1).to_string();
    }
    labels
}
