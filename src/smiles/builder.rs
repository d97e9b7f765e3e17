use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;
use crate::smiles::parse_tree::ParseTree;
use crate::smiles::tokenizer::{AtomToken, BondToken};

pub fn build_mol(tree: &ParseTree) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    let indices: Vec<NodeIndex> = tree
        .atoms
        .iter()
        .map(|tok| {
            mol.add_atom(Atom {
                atomic_num: tok.element.atomic_num(),
                formal_charge: tok.charge,
                isotope: tok.isotope,
                hydrogen_count: 0,
                is_aromatic: tok.is_aromatic,
                note: None,
                map_num: tok.atom_class,
            })
        })
        .collect();

    for (i, neighbors) in tree.neighbors.iter().enumerate() {
        for neighbor in neighbors {
            let j = neighbor.atom_idx;
            if j < i {
                continue;
            }
            let order = resolve_bond_order(
                neighbor.bond,
                tree.atoms[i].is_aromatic,
                tree.atoms[j].is_aromatic,
            );
            mol.add_bond(indices[i], indices[j], Bond { order });
        }
    }

    for (i, tok) in tree.atoms.iter().enumerate() {
        let h = match tok.hcount {
            Some(h) if tok.is_bracket => h,
            _ => implicit_hydrogens(&mol, indices[i], tok),
        };
        mol.atom_mut(indices[i]).hydrogen_count = h;
    }

    mol
}

fn resolve_bond_order(bond: Option<BondToken>, from_aromatic: bool, to_aromatic: bool) -> BondOrder {
    match bond {
        Some(BondToken::Single) => BondOrder::Single,
        Some(BondToken::Double) => BondOrder::Double,
        Some(BondToken::Triple) => BondOrder::Triple,
        Some(BondToken::Aromatic) => BondOrder::Aromatic,
        None if from_aromatic && to_aromatic => BondOrder::Aromatic,
        None => BondOrder::Single,
    }
}

/// Hydrogens needed to bring a bare atom up to its lowest default valence
/// that accommodates its bonds. Aromatic atoms give one up to the ring.
fn implicit_hydrogens(mol: &Mol<Atom, Bond>, node: NodeIndex, tok: &AtomToken) -> u8 {
    let bond_order_sum: u8 = mol
        .neighbors(node)
        .filter_map(|other| mol.bond_between(node, other))
        .map(|edge| mol.bond(edge).order.valence_contribution())
        .fold(0, u8::saturating_add);

    let Some(target) = tok
        .element
        .default_valences()
        .iter()
        .copied()
        .find(|&v| v >= bond_order_sum)
    else {
        return 0;
    };

    let h = target - bond_order_sum;
    if tok.is_aromatic {
        h.saturating_sub(1)
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_tree::build_parse_tree;
    use crate::smiles::tokenizer::tokenize;

    fn parse(s: &str) -> Mol<Atom, Bond> {
        let tokens = tokenize(s).unwrap();
        let tree = build_parse_tree(&tokens).unwrap();
        build_mol(&tree)
    }

    fn h(mol: &Mol<Atom, Bond>, i: usize) -> u8 {
        mol.atom(NodeIndex::new(i)).hydrogen_count
    }

    #[test]
    fn methane_h_count() {
        let mol = parse("C");
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(h(&mol, 0), 4);
    }

    #[test]
    fn ethene_h_counts() {
        let mol = parse("C=C");
        assert_eq!(h(&mol, 0), 2);
        assert_eq!(h(&mol, 1), 2);
    }

    #[test]
    fn bracket_atoms_keep_explicit_h() {
        assert_eq!(h(&parse("[CH4]"), 0), 4);
        assert_eq!(h(&parse("[C]"), 0), 0);
    }

    #[test]
    fn hypervalent_sulfur() {
        let mol = parse("CS(=O)(=O)C");
        assert_eq!(h(&mol, 1), 0);
    }

    #[test]
    fn aromatic_rings() {
        let mol = parse("c1ccccc1");
        for i in 0..6 {
            assert!(mol.atom(NodeIndex::new(i)).is_aromatic);
            assert_eq!(h(&mol, i), 1, "atom {i} should have 1 H");
        }
        let pyridine = parse("c1ccncc1");
        assert_eq!(h(&pyridine, 3), 0);
        let pyrrole = parse("c1cc[nH]c1");
        assert_eq!(h(&pyrrole, 3), 1);
    }

    #[test]
    fn implicit_bond_orders() {
        let mol = parse("c1ccccc1C");
        let ring = mol.bond_between(NodeIndex::new(0), NodeIndex::new(1)).unwrap();
        let exo = mol.bond_between(NodeIndex::new(5), NodeIndex::new(6)).unwrap();
        assert_eq!(mol.bond(ring).order, BondOrder::Aromatic);
        assert_eq!(mol.bond(exo).order, BondOrder::Single);
    }

    #[test]
    fn atom_class_becomes_map_number() {
        let mol = parse("[CH3:1][OH:7]");
        assert_eq!(mol.atom(NodeIndex::new(0)).map_num, 1);
        assert_eq!(mol.atom(NodeIndex::new(1)).map_num, 7);
    }
}
