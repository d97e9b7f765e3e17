//! Choosing, generating, and writing per-atom labels.
//!
//! [`eligible_atoms`] decides which atoms may carry a label under a
//! [`LabelRule`]. [`apply_atom_notes`] writes labels as display notes and
//! [`sync_map_numbers`] turns them into integer map numbers for export;
//! the two touch different fields, so a depiction and an exported copy can
//! be prepared from the same labels.

mod apply;
mod error;
mod generate;
mod map_num;
mod rule;
mod select;

pub use apply::apply_atom_notes;
pub use error::LabelError;
pub use generate::proton_rule_labels;
pub use map_num::{map_number_from_label, sync_map_numbers};
pub use rule::LabelRule;
pub use select::{eligible_atoms, is_eligible, total_hydrogens, EligibleAtoms};
