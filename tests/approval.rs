use serde::Deserialize;

use chemlabel::{LabelRule, LabeledStructure, Mol};

// ---------------------------------------------------------------------------
// End-to-end labeling: extended SMILES in, notes and map numbers out
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct LabelingEntry {
    input: String,
    rule: String,
    base: String,
    labels: Option<Vec<String>>,
    notes: Vec<Option<String>>,
    map_nums: Vec<u32>,
}

fn notes(mol: &Mol<chemlabel::Atom, chemlabel::Bond>) -> Vec<Option<String>> {
    mol.atoms().map(|i| mol.atom(i).note.clone()).collect()
}

fn map_nums(mol: &Mol<chemlabel::Atom, chemlabel::Bond>) -> Vec<u32> {
    mol.atoms().map(|i| mol.atom(i).map_num).collect()
}

#[test]
fn approval_labeling() {
    let data: Vec<LabelingEntry> =
        serde_json::from_str(include_str!("approval_data/labeling.json")).unwrap();

    let mut failures = Vec::new();
    for entry in &data {
        let rule: LabelRule = entry.rule.parse().unwrap();
        let labeled = match LabeledStructure::from_extended_smiles(&entry.input, rule) {
            Ok(l) => l,
            Err(e) => {
                failures.push(format!("[build] {:?} ({}): {e}", entry.input, entry.rule));
                continue;
            }
        };

        if labeled.base_smiles() != entry.base {
            failures.push(format!(
                "[base] {:?}: expected {:?}, got {:?}",
                entry.input,
                entry.base,
                labeled.base_smiles()
            ));
        }

        if labeled.labels() != entry.labels.as_deref() {
            failures.push(format!(
                "[labels] {:?} ({}): expected {:?}, got {:?}",
                entry.input,
                entry.rule,
                entry.labels,
                labeled.labels()
            ));
        }

        let got_notes = notes(labeled.mol());
        if got_notes != entry.notes {
            failures.push(format!(
                "[notes] {:?} ({}): expected {:?}, got {:?}",
                entry.input, entry.rule, entry.notes, got_notes
            ));
        }

        let exported = labeled.export_mol().unwrap();
        let got_maps = map_nums(&exported);
        if got_maps != entry.map_nums {
            failures.push(format!(
                "[map_nums] {:?} ({}): expected {:?}, got {:?}",
                entry.input, entry.rule, entry.map_nums, got_maps
            ));
        }

        if notes(&exported) != got_notes {
            failures.push(format!("[export] {:?}: export changed notes", entry.input));
        }
    }

    if !failures.is_empty() {
        panic!(
            "labeling approval: {} failures out of {} entries:\n{}",
            failures.len(),
            data.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn approval_molfile_carries_map_numbers() {
    let labeled =
        LabeledStructure::from_extended_smiles("CC(=O)O |$_AV:(2;1;;)$|", LabelRule::CarbonOnly)
            .unwrap();
    let mut buf = Vec::new();
    labeled.write_v3000(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let atom_lines: Vec<&str> = text
        .lines()
        .skip_while(|l| *l != "M  V30 BEGIN ATOM")
        .skip(1)
        .take_while(|l| *l != "M  V30 END ATOM")
        .collect();
    assert_eq!(
        atom_lines,
        [
            "M  V30 1 C 0.0000 0.0000 0.0000 2",
            "M  V30 2 C 0.0000 0.0000 0.0000 1",
            "M  V30 3 O 0.0000 0.0000 0.0000 0",
            "M  V30 4 O 0.0000 0.0000 0.0000 0",
        ]
    );
    assert_eq!(text.lines().next(), Some("CC(=O)O"));
}
