//! Per-atom and per-bond accessors.
//!
//! The labeling functions are generic over these traits so any atom type
//! that can report its element and hydrogen count, and that stores a note
//! and a map number, can be labeled.

use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasIsotope {
    fn isotope(&self) -> u16;
}

/// Number of virtual (suppressed) hydrogens on an atom.
pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

/// Display annotation drawn next to an atom. `None` means no note.
pub trait HasAtomNote {
    fn atom_note(&self) -> Option<&str>;
}

pub trait HasAtomNoteMut: HasAtomNote {
    fn atom_note_mut(&mut self) -> &mut Option<String>;
}

/// Atom map number written to exported files. `0` means unmapped.
pub trait HasAtomMapNum {
    fn atom_map_num(&self) -> u32;
}

pub trait HasAtomMapNumMut {
    fn atom_map_num_mut(&mut self) -> &mut u32;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}
