use crate::element::Element;

/// Default atom type for a molecular graph node.
///
/// Besides the intrinsic properties read off a structural formula, an
/// `Atom` carries the two mutable annotation fields the labeling functions
/// write: a display [`note`](Atom::note) and an integer
/// [`map_num`](Atom::map_num).
///
/// # Examples
///
/// ```
/// use chemlabel::Atom;
///
/// let carbon = Atom {
///     atomic_num: 6,
///     hydrogen_count: 3,
///     ..Atom::default()
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// assert_eq!(carbon.note, None);
/// assert_eq!(carbon.map_num, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Mass number. `0` means natural isotopic abundance.
    pub isotope: u16,
    /// Number of virtual (suppressed) hydrogens on this atom.
    ///
    /// Explicit hydrogen atoms written as graph nodes (`[H]O`) are not
    /// included here.
    pub hydrogen_count: u8,
    /// Whether the atom was written aromatic (lowercase) in SMILES.
    pub is_aromatic: bool,
    /// Text drawn next to the atom in a depiction. `None` means no note.
    pub note: Option<String>,
    /// Atom map number for file export. `0` means unmapped.
    pub map_num: u32,
}

impl Atom {
    /// A neutral, non-aromatic atom of `element` with `hydrogen_count`
    /// virtual hydrogens.
    pub fn new(element: Element, hydrogen_count: u8) -> Self {
        Self {
            atomic_num: element.atomic_num(),
            hydrogen_count,
            ..Self::default()
        }
    }

    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_num(self.atomic_num)
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasIsotope for Atom {
    fn isotope(&self) -> u16 {
        self.isotope
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasAtomNote for Atom {
    fn atom_note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl crate::traits::HasAtomNoteMut for Atom {
    fn atom_note_mut(&mut self) -> &mut Option<String> {
        &mut self.note
    }
}

impl crate::traits::HasAtomMapNum for Atom {
    fn atom_map_num(&self) -> u32 {
        self.map_num
    }
}

impl crate::traits::HasAtomMapNumMut for Atom {
    fn atom_map_num_mut(&mut self) -> &mut u32 {
        &mut self.map_num
    }
}
