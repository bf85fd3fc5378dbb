use super::atom::Atom;
use super::residue::ResidueIdentity;
use crate::core::rules::kind::InteractionKind;

/// A classified receptor–ligand contact, borrowing both atoms from the structures
/// it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionCandidate<'a> {
    pub kind: InteractionKind,
    pub distance: f64,
    pub receptor_atom: &'a Atom,
    pub ligand_atom: &'a Atom,
    /// Index of the ligand pose the ligand atom belongs to.
    pub pose: usize,
}

impl<'a> InteractionCandidate<'a> {
    pub fn key(&self) -> InteractionKey {
        InteractionKey {
            residue: self.receptor_atom.residue_identity(),
            receptor_atom: self.receptor_atom.name.clone(),
            ligand_atom: self.ligand_atom.name.clone(),
            ligand_serial: self.ligand_atom.serial,
            kind: self.kind,
            pose: self.pose,
        }
    }

    /// Detaches the candidate from the atom collections it references.
    pub fn to_retained(&self) -> RetainedInteraction {
        RetainedInteraction {
            key: self.key(),
            distance: self.distance,
        }
    }
}

/// Identifies one specific contact independently of the atom collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionKey {
    pub residue: ResidueIdentity,
    pub receptor_atom: String,
    pub ligand_atom: String,
    pub ligand_serial: usize,
    pub kind: InteractionKind,
    pub pose: usize,
}

/// A contact that survived deduplication, with the best distance observed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedInteraction {
    pub key: InteractionKey,
    pub distance: f64,
}

impl RetainedInteraction {
    pub fn residue(&self) -> &ResidueIdentity {
        &self.key.residue
    }

    pub fn kind(&self) -> InteractionKind {
        self.key.kind
    }

    pub fn pose(&self) -> usize {
        self.key.pose
    }
}
