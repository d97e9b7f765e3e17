use petgraph::graph::NodeIndex;
use proptest::prelude::*;

use chemlabel::{
    apply_atom_notes, eligible_atoms, parse_extended_smiles, proton_rule_labels, sync_map_numbers,
    Atom, Bond, Element, LabelError, LabelRule, Mol,
};

const ELEMENTS: [Element; 7] = [
    Element::C,
    Element::C,
    Element::H,
    Element::N,
    Element::O,
    Element::S,
    Element::CL,
];

fn arb_atom() -> impl Strategy<Value = Atom> {
    (prop::sample::select(ELEMENTS.to_vec()), 0u8..4).prop_map(|(e, h)| Atom::new(e, h))
}

/// A chain of atoms; the bonds only matter for explicit-hydrogen neighbours.
fn arb_mol() -> impl Strategy<Value = Mol<Atom, Bond>> {
    prop::collection::vec(arb_atom(), 0..12).prop_map(|atoms| {
        let mut mol = Mol::new();
        let mut prev: Option<NodeIndex> = None;
        for atom in atoms {
            let idx = mol.add_atom(atom);
            if let Some(p) = prev {
                mol.add_bond(p, idx, Bond::default());
            }
            prev = Some(idx);
        }
        mol
    })
}

fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9]{1,3}",
        "[A-Za-z'-]{0,3}[0-9]{0,4}[a-z]{0,2}",
    ]
}

fn arb_rule() -> impl Strategy<Value = LabelRule> {
    prop::sample::select(LabelRule::ALL.to_vec())
}

fn arb_mol_with_labels() -> impl Strategy<Value = (Mol<Atom, Bond>, Vec<String>)> {
    arb_mol().prop_flat_map(|mol| {
        let n = mol.atom_count();
        (Just(mol), prop::collection::vec(arb_label(), n))
    })
}

fn notes(mol: &Mol<Atom, Bond>) -> Vec<Option<String>> {
    mol.atoms().map(|i| mol.atom(i).note.clone()).collect()
}

fn map_nums(mol: &Mol<Atom, Bond>) -> Vec<u32> {
    mol.atoms().map(|i| mol.atom(i).map_num).collect()
}

proptest! {
    #[test]
    fn selection_is_pure(mol in arb_mol(), rule in arb_rule()) {
        let first = eligible_atoms(&mol, rule);
        let again = eligible_atoms(&mol.clone(), rule);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn proton_rule_contains_carbon_only(mol in arb_mol()) {
        let carbon = eligible_atoms(&mol, LabelRule::CarbonOnly);
        let proton = eligible_atoms(&mol, LabelRule::ProtonRule);
        prop_assert!(carbon.is_subset(&proton));
    }

    #[test]
    fn generated_labels_count_up_from_one(mol in arb_mol()) {
        let labels = proton_rule_labels(&mol);
        prop_assert_eq!(labels.len(), mol.atom_count());

        let eligible = eligible_atoms(&mol, LabelRule::ProtonRule);
        let mut expected = 1usize;
        for (i, label) in labels.iter().enumerate() {
            if eligible.contains(&i) {
                prop_assert_eq!(label, &expected.to_string());
                expected += 1;
            } else {
                prop_assert!(label.is_empty());
            }
        }
    }

    #[test]
    fn applying_notes_is_idempotent(
        (mol, labels) in arb_mol_with_labels(),
        rule in arb_rule(),
    ) {
        let mut once = mol.clone();
        apply_atom_notes(&mut once, Some(&labels), rule).unwrap();
        let mut twice = once.clone();
        apply_atom_notes(&mut twice, Some(&labels), rule).unwrap();
        prop_assert_eq!(notes(&once), notes(&twice));
    }

    #[test]
    fn notes_only_on_eligible_atoms(
        (mol, labels) in arb_mol_with_labels(),
        first in arb_rule(),
        second in arb_rule(),
    ) {
        let mut mol = mol;
        apply_atom_notes(&mut mol, Some(&labels), first).unwrap();
        apply_atom_notes(&mut mol, Some(&labels), second).unwrap();

        let eligible = eligible_atoms(&mol, second);
        for (i, note) in notes(&mol).into_iter().enumerate() {
            if eligible.contains(&i) && !labels[i].is_empty() {
                prop_assert_eq!(note.as_deref(), Some(labels[i].as_str()));
            } else {
                prop_assert_eq!(note, None);
            }
        }
    }

    #[test]
    fn map_numbers_are_total_and_idempotent(
        (mol, labels) in arb_mol_with_labels(),
        rule in arb_rule(),
    ) {
        let mut once = mol.clone();
        for idx in once.atoms().collect::<Vec<_>>() {
            once.atom_mut(idx).map_num = 77;
        }
        sync_map_numbers(&mut once, Some(&labels), rule).unwrap();
        let mut twice = once.clone();
        sync_map_numbers(&mut twice, Some(&labels), rule).unwrap();
        prop_assert_eq!(map_nums(&once), map_nums(&twice));

        let eligible = eligible_atoms(&mol, rule);
        for (i, map_num) in map_nums(&once).into_iter().enumerate() {
            if !eligible.contains(&i) {
                prop_assert_eq!(map_num, 0);
            }
        }
    }

    #[test]
    fn length_mismatch_changes_nothing(
        (mol, labels) in arb_mol_with_labels(),
        extra in arb_label(),
        rule in arb_rule(),
    ) {
        let mut labels = labels;
        labels.push(extra);
        let mut target = mol.clone();

        let err = apply_atom_notes(&mut target, Some(&labels), rule).unwrap_err();
        prop_assert_eq!(err, LabelError::LengthMismatch { labels: labels.len(), atoms: mol.atom_count() });
        let err = sync_map_numbers(&mut target, Some(&labels), rule).unwrap_err();
        prop_assert_eq!(err, LabelError::LengthMismatch { labels: labels.len(), atoms: mol.atom_count() });
        prop_assert_eq!(target, mol);
    }

    #[test]
    fn annotation_parsing_never_panics(text in "\\PC{0,40}") {
        let parsed = parse_extended_smiles(&text);
        prop_assert!(!parsed.base.contains('\n'));
    }

    #[test]
    fn block_labels_are_recovered(labels in prop::collection::vec("[0-9a-z]{0,3}", 1..8)) {
        let text = format!("C |$_AV:({})$|", labels.join(";"));
        let parsed = parse_extended_smiles(&text);
        if labels.iter().all(String::is_empty) && labels.len() == 1 {
            prop_assert_eq!(parsed.labels, None);
        } else {
            prop_assert_eq!(parsed.labels, Some(labels));
        }
        prop_assert_eq!(parsed.base, "C");
    }
}
