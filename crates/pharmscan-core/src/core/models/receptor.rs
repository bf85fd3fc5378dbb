use super::atom::Atom;
use super::residue::ResidueIdentity;
use crate::core::utils::identifiers::is_water_residue;
use std::collections::HashSet;

/// The receptor side of an analysis: its atoms in file order, with water removed, and
/// the distinct residues they belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receptor {
    atoms: Vec<Atom>,
    residues: Vec<ResidueIdentity>,
}

impl Receptor {
    /// Builds a receptor from parsed atoms, dropping every atom of a water residue.
    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        let mut seen = HashSet::new();
        let mut residues = Vec::new();
        let atoms: Vec<Atom> = atoms
            .into_iter()
            .filter(|atom| !is_water_residue(&atom.residue_name))
            .inspect(|atom| {
                let identity = atom.residue_identity();
                if seen.insert(identity.clone()) {
                    residues.push(identity);
                }
            })
            .collect();

        Self { atoms, residues }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Distinct residues in order of first appearance.
    pub fn residues(&self) -> &[ResidueIdentity] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
