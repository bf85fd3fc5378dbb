use super::interaction::RetainedInteraction;
use super::residue::ResidueIdentity;

/// A combination of retained interactions on pairwise distinct receptor residues,
/// scored by the sum of its members' kind weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Pharmacophore {
    members: Vec<RetainedInteraction>,
    score: u32,
}

impl Pharmacophore {
    pub fn new(members: Vec<RetainedInteraction>) -> Self {
        let score = score_interactions(&members);
        Self { members, score }
    }

    pub fn members(&self) -> &[RetainedInteraction] {
        &self.members
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member residues in sorted order; two pharmacophores with the same residue
    /// set are duplicates of each other.
    pub fn residue_set(&self) -> Vec<ResidueIdentity> {
        let mut residues: Vec<ResidueIdentity> =
            self.members.iter().map(|m| m.residue().clone()).collect();
        residues.sort();
        residues
    }
}

pub fn score_interactions(interactions: &[RetainedInteraction]) -> u32 {
    interactions.iter().map(|i| i.kind().weight()).sum()
}
