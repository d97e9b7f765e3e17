//! MDL Molfile V3000 export.
//!
//! Only connectivity, charges, isotopes, and atom map numbers are written.
//! All coordinates are zero; 2D layout is left to whatever consumes the
//! file. Display notes never reach the file; run
//! [`sync_map_numbers`](crate::sync_map_numbers) first to carry labels over.

use std::fmt::{self, Write as _};
use std::io;

use thiserror::Error;

use crate::bond::BondOrder;
use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{HasAtomMapNum, HasAtomicNum, HasBondOrder, HasFormalCharge, HasIsotope};

#[derive(Debug, Error)]
pub enum MolfileError {
    #[error("failed to write molfile: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Writes `mol` as a V3000 molfile with `title` on the header line.
pub fn write_v3000<W, A, B>(mut writer: W, mol: &Mol<A, B>, title: &str) -> Result<(), MolfileError>
where
    W: io::Write,
    A: HasAtomicNum + HasFormalCharge + HasIsotope + HasAtomMapNum,
    B: HasBondOrder,
{
    writer.write_all(to_v3000_string(mol, title).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn to_v3000_string<A, B>(mol: &Mol<A, B>, title: &str) -> String
where
    A: HasAtomicNum + HasFormalCharge + HasIsotope + HasAtomMapNum,
    B: HasBondOrder,
{
    let mut out = String::new();
    // `fmt::Write for String` never returns an error.
    render(&mut out, mol, title).expect("formatting into a String does not fail");
    out
}

fn render<A, B>(out: &mut String, mol: &Mol<A, B>, title: &str) -> fmt::Result
where
    A: HasAtomicNum + HasFormalCharge + HasIsotope + HasAtomMapNum,
    B: HasBondOrder,
{
    let title = title.lines().next().unwrap_or_default();
    writeln!(out, "{title}")?;
    writeln!(out, "     chemlabel")?;
    writeln!(out)?;
    writeln!(out, "  0  0  0     0  0            999 V3000")?;
    writeln!(out, "M  V30 BEGIN CTAB")?;
    writeln!(
        out,
        "M  V30 COUNTS {} {} 0 0 0",
        mol.atom_count(),
        mol.bond_count()
    )?;

    writeln!(out, "M  V30 BEGIN ATOM")?;
    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        let symbol = Element::from_atomic_num(atom.atomic_num()).map_or("*", Element::symbol);
        write!(
            out,
            "M  V30 {} {} 0.0000 0.0000 0.0000 {}",
            idx.index() + 1,
            symbol,
            atom.atom_map_num()
        )?;
        if atom.formal_charge() != 0 {
            write!(out, " CHG={}", atom.formal_charge())?;
        }
        if atom.isotope() != 0 {
            write!(out, " MASS={}", atom.isotope())?;
        }
        writeln!(out)?;
    }
    writeln!(out, "M  V30 END ATOM")?;

    if mol.bond_count() > 0 {
        writeln!(out, "M  V30 BEGIN BOND")?;
        for (n, edge) in mol.bonds().enumerate() {
            let Some((a, b)) = mol.bond_endpoints(edge) else {
                continue;
            };
            writeln!(
                out,
                "M  V30 {} {} {} {}",
                n + 1,
                bond_type(mol.bond(edge).bond_order()),
                a.index() + 1,
                b.index() + 1
            )?;
        }
        writeln!(out, "M  V30 END BOND")?;
    }

    writeln!(out, "M  V30 END CTAB")?;
    writeln!(out, "M  END")
}

fn bond_type(order: BondOrder) -> u8 {
    match order {
        BondOrder::Single => 1,
        BondOrder::Double => 2,
        BondOrder::Triple => 3,
        BondOrder::Aromatic => 4,
    }
}
