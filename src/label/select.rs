use std::collections::BTreeSet;

use petgraph::graph::NodeIndex;

use crate::element::Element;
use crate::label::rule::LabelRule;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasHydrogenCount};

/// Positional indices of the atoms allowed to carry a label, in ascending
/// order.
pub type EligibleAtoms = BTreeSet<usize>;

/// Returns the atoms eligible for a label under `rule`.
///
/// | rule          | eligible when                                              |
/// |---------------|------------------------------------------------------------|
/// | `CarbonOnly`  | the atom is carbon                                         |
/// | `ProtonRule`  | the atom is carbon, or it is neither C nor H and carries H |
///
/// Every other labeling function defers to this one.
pub fn eligible_atoms<A, B>(mol: &Mol<A, B>, rule: LabelRule) -> EligibleAtoms
where
    A: HasAtomicNum + HasHydrogenCount,
{
    mol.atoms()
        .filter(|&idx| is_eligible(mol, idx, rule))
        .map(|idx| idx.index())
        .collect()
}

pub fn is_eligible<A, B>(mol: &Mol<A, B>, idx: NodeIndex, rule: LabelRule) -> bool
where
    A: HasAtomicNum + HasHydrogenCount,
{
    let atomic_num = mol.atom(idx).atomic_num();
    let is_carbon = atomic_num == Element::C.atomic_num();
    match rule {
        LabelRule::CarbonOnly => is_carbon,
        LabelRule::ProtonRule => {
            is_carbon
                || (atomic_num != Element::H.atomic_num() && total_hydrogens(mol, idx) > 0)
        }
    }
}

/// Virtual hydrogens plus hydrogen atoms bonded as explicit graph nodes.
pub fn total_hydrogens<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> u32
where
    A: HasAtomicNum + HasHydrogenCount,
{
    let explicit = mol
        .neighbors(idx)
        .filter(|&n| mol.atom(n).atomic_num() == Element::H.atomic_num())
        .count() as u32;
    u32::from(mol.atom(idx).hydrogen_count()) + explicit
}
