use serde::Serialize;
use std::fmt;

/// The fixed set of receptor–ligand interaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    /// Cationic receptor side chain against a negatively polarised ligand atom.
    PositiveIonNegativePartial,
    /// Anionic receptor side chain against a positively polarised ligand atom.
    NegativeIonPositivePartial,
    /// Hydrogen bond, with the donor hydrogen on either side.
    HydrogenBond,
    /// Polar receptor atom against a positively polarised ligand atom.
    DipoleDipole,
    /// Carbon of a hydrophobic residue against a ligand aromatic carbon.
    Hydrophobic,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 5] = [
        InteractionKind::PositiveIonNegativePartial,
        InteractionKind::NegativeIonPositivePartial,
        InteractionKind::HydrogenBond,
        InteractionKind::DipoleDipole,
        InteractionKind::Hydrophobic,
    ];

    /// Contribution of one interaction of this kind to a pharmacophore score.
    pub fn weight(self) -> u32 {
        match self {
            InteractionKind::PositiveIonNegativePartial
            | InteractionKind::NegativeIonPositivePartial => 4,
            InteractionKind::HydrogenBond => 3,
            InteractionKind::DipoleDipole => 2,
            InteractionKind::Hydrophobic => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionKind::PositiveIonNegativePartial => "positive ion - negative partial charge",
            InteractionKind::NegativeIonPositivePartial => "negative ion - positive partial charge",
            InteractionKind::HydrogenBond => "hydrogen bonding",
            InteractionKind::DipoleDipole => "negative partial charge - positive partial charge",
            InteractionKind::Hydrophobic => "hydrophobic interaction",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
