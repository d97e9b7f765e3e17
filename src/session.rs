//! End-to-end labeling: resolve a name, build the structure, label it for
//! display, and prepare a map-numbered copy for export.

use std::io;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::cxsmiles::parse_extended_smiles;
use crate::error::Error;
use crate::label::{apply_atom_notes, proton_rule_labels, sync_map_numbers, LabelRule};
use crate::mol::Mol;
use crate::molfile;
use crate::smiles::parse_smiles;

/// A chemical-name-to-structure service returning extended SMILES.
///
/// `None` means the name was not recognized. Closures work directly:
///
/// ```
/// use chemlabel::NameResolver;
///
/// let lookup = |name: &str| (name == "ethanol").then(|| "CCO".to_string());
/// assert_eq!(lookup.resolve("ethanol").as_deref(), Some("CCO"));
/// assert_eq!(lookup.resolve("unobtainium"), None);
/// ```
pub trait NameResolver {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> NameResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// A structure with its display notes applied and the labels that produced
/// them.
///
/// The structure held here is the display copy: its notes are set and its
/// map numbers are whatever the input specified. [`export_mol`] derives a
/// separate copy with map numbers synchronized, so exporting never
/// disturbs the display state.
///
/// [`export_mol`]: LabeledStructure::export_mol
#[derive(Debug, Clone)]
pub struct LabeledStructure {
    mol: Mol<Atom, Bond>,
    name: Option<String>,
    base_smiles: String,
    labels: Option<Vec<String>>,
    rule: LabelRule,
}

impl LabeledStructure {
    /// Resolves `name` and labels the resulting structure.
    pub fn from_name<R>(resolver: &R, name: &str, rule: LabelRule) -> Result<Self, Error>
    where
        R: NameResolver + ?Sized,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        let text = resolver
            .resolve(name)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| Error::StructureUnavailable {
                name: name.to_string(),
            })?;
        log::debug!("resolved {name:?} to {text:?}");

        let mut labeled = Self::from_extended_smiles(&text, rule)?;
        labeled.name = Some(name.to_string());
        Ok(labeled)
    }

    /// Builds and labels the structure described by extended SMILES `text`.
    ///
    /// Under [`LabelRule::ProtonRule`] the embedded labels are ignored and
    /// numbers are generated; otherwise the embedded labels are used as-is.
    pub fn from_extended_smiles(text: &str, rule: LabelRule) -> Result<Self, Error> {
        let parsed = parse_extended_smiles(text);
        let mut mol = build_structure(&parsed.base, text)?;

        let labels = if rule.generates_labels() {
            Some(proton_rule_labels(&mol))
        } else {
            parsed.labels
        };
        if labels.is_none() {
            log::warn!("no atom-value annotation found; the structure will carry no labels");
        }

        apply_atom_notes(&mut mol, labels.as_deref(), rule)?;

        Ok(Self {
            mol,
            name: None,
            base_smiles: parsed.base,
            labels,
            rule,
        })
    }

    pub fn mol(&self) -> &Mol<Atom, Bond> {
        &self.mol
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn rule(&self) -> LabelRule {
        self.rule
    }

    pub fn base_smiles(&self) -> &str {
        &self.base_smiles
    }

    /// The resolved name, when built through [`from_name`](Self::from_name).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A copy of the structure with map numbers derived from the labels.
    pub fn export_mol(&self) -> Result<Mol<Atom, Bond>, Error> {
        let mut copy = self.mol.clone();
        sync_map_numbers(&mut copy, self.labels.as_deref(), self.rule)?;
        Ok(copy)
    }

    /// [`export_mol`](Self::export_mol) rendered as a V3000 molfile, titled
    /// with the name if there is one and the base SMILES otherwise.
    pub fn export_v3000(&self) -> Result<String, Error> {
        let mol = self.export_mol()?;
        Ok(molfile::to_v3000_string(&mol, self.title()))
    }

    pub fn write_v3000<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let mol = self.export_mol()?;
        molfile::write_v3000(writer, &mol, self.title())?;
        Ok(())
    }

    fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.base_smiles)
    }
}

/// Reads the structure from the base SMILES, falling back to the trimmed
/// first line and then the whole text. Reports the first failure if none
/// parses.
fn build_structure(base: &str, text: &str) -> Result<Mol<Atom, Bond>, Error> {
    let first_line = text.lines().next().unwrap_or_default().trim();
    let mut first_err = None;
    for candidate in [base, first_line, text] {
        match parse_smiles(candidate) {
            Ok(mol) => {
                if candidate != base {
                    log::debug!("base SMILES {base:?} unreadable, used {candidate:?}");
                }
                return Ok(mol);
            }
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }
    Err(first_err.map_or(Error::StructureUnavailable { name: text.to_string() }, Error::from))
}
