use std::collections::BTreeMap;

use crate::smiles::error::SmilesError;
use crate::smiles::tokenizer::{AtomToken, BondToken, Token};

#[derive(Debug, Clone)]
pub struct Neighbor {
    pub bond: Option<BondToken>,
    pub atom_idx: usize,
}

/// Atoms in the order they were written, each with its explicit neighbour
/// list. Ring closures are resolved; branches are flattened.
#[derive(Debug, Clone)]
pub struct ParseTree {
    pub atoms: Vec<AtomToken>,
    pub neighbors: Vec<Vec<Neighbor>>,
}

impl ParseTree {
    fn connect(&mut self, a: usize, b: usize, bond: Option<BondToken>) {
        self.neighbors[a].push(Neighbor { bond, atom_idx: b });
        self.neighbors[b].push(Neighbor { bond, atom_idx: a });
    }

    fn connected(&self, a: usize, b: usize) -> bool {
        a == b || self.neighbors[a].iter().any(|n| n.atom_idx == b)
    }
}

pub fn build_parse_tree(tokens: &[Token]) -> Result<ParseTree, SmilesError> {
    let mut tree = ParseTree {
        atoms: Vec::new(),
        neighbors: Vec::new(),
    };
    let mut branches: Vec<(usize, usize)> = Vec::new(); // (atom, paren position)
    let mut current: Option<usize> = None;
    let mut pending_bond: Option<BondToken> = None;
    let mut ring_opens: BTreeMap<u16, (usize, Option<BondToken>)> = BTreeMap::new();

    for token in tokens {
        match token {
            Token::Atom(atom_tok) => {
                let idx = tree.atoms.len();
                tree.atoms.push(atom_tok.clone());
                tree.neighbors.push(Vec::new());

                let bond = pending_bond.take();
                if let Some(cur) = current {
                    tree.connect(cur, idx, bond);
                }
                current = Some(idx);
            }
            Token::Bond(b) => {
                pending_bond = Some(*b);
            }
            Token::RingClosure { bond, digit, pos } => {
                let cur = current.ok_or(SmilesError::InvalidRingBond {
                    digit: *digit,
                    pos: *pos,
                })?;
                let bond = bond.or(pending_bond.take());

                match ring_opens.remove(digit) {
                    Some((open_idx, open_bond)) => {
                        let ring_bond = match (bond, open_bond) {
                            (Some(b1), Some(b2)) if b1 != b2 => {
                                return Err(SmilesError::RingBondConflict { digit: *digit });
                            }
                            (b1, b2) => b1.or(b2),
                        };
                        if tree.connected(open_idx, cur) {
                            return Err(SmilesError::DuplicateBond { digit: *digit });
                        }
                        tree.connect(open_idx, cur, ring_bond);
                    }
                    None => {
                        ring_opens.insert(*digit, (cur, bond));
                    }
                }
            }
            Token::OpenParen(pos) => {
                let cur = current.ok_or(SmilesError::UnmatchedParen { pos: *pos })?;
                branches.push((cur, *pos));
            }
            Token::CloseParen(pos) => {
                let (anchor, _) = branches
                    .pop()
                    .ok_or(SmilesError::UnmatchedParen { pos: *pos })?;
                current = Some(anchor);
                pending_bond = None;
            }
            Token::Dot => {
                current = None;
                pending_bond = None;
            }
        }
    }

    if let Some(&(_, pos)) = branches.last() {
        return Err(SmilesError::UnmatchedParen { pos });
    }

    if let Some((&digit, _)) = ring_opens.iter().next() {
        return Err(SmilesError::UnclosedRing { digit });
    }

    Ok(tree)
}
