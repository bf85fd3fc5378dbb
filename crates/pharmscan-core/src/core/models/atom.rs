use super::residue::ResidueIdentity;
use nalgebra::Point3;
use std::str::FromStr;

/// The record name an atom was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordKind {
    /// A standard `ATOM` record.
    #[default]
    Atom,
    /// A `HETATM` record, used for non-polymer groups.
    Hetatm,
}

impl FromStr for RecordKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ATOM" => Ok(RecordKind::Atom),
            "HETATM" => Ok(RecordKind::Hetatm),
            _ => Err(()),
        }
    }
}

/// A single atom record from a receptor or a docked ligand pose.
///
/// Text fields hold trimmed tokens (`"GLU"`, not `" GLU"`), so the interaction rules
/// can compare them directly. Serial numbers restart in every pose of a docking
/// result and are therefore not unique across a ligand pose set.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Whether the atom came from an `ATOM` or a `HETATM` record.
    pub record: RecordKind,
    /// The serial number from the source file.
    pub serial: usize,
    /// The atom name (e.g. "NZ", "OD1", "C12").
    pub name: String,
    /// The three-letter residue name (e.g. "LYS", "UNL").
    pub residue_name: String,
    /// The chain identifier, or a blank when the file leaves it empty.
    pub chain_id: char,
    /// The residue sequence number from the source file.
    pub residue_number: isize,
    /// The 3D coordinates in Angstroms.
    pub position: Point3<f64>,
    /// The partial charge in elementary charge units.
    pub partial_charge: f64,
    /// The AutoDock force-field atom type (e.g. "OA", "HD", "A", "C").
    pub ad_type: String,
}

impl Atom {
    /// Creates a new `Atom` with a neutral charge, no AutoDock type and a blank chain.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number of the atom.
    /// * `name` - The atom name.
    /// * `residue_name` - The name of the residue the atom belongs to.
    /// * `residue_number` - The sequence number of that residue.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        serial: usize,
        name: &str,
        residue_name: &str,
        residue_number: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            record: RecordKind::default(),
            serial,
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            chain_id: ' ',
            residue_number,
            position,
            partial_charge: 0.0,
            ad_type: String::new(),
        }
    }

    pub fn with_charge(mut self, partial_charge: f64) -> Self {
        self.partial_charge = partial_charge;
        self
    }

    pub fn with_ad_type(mut self, ad_type: &str) -> Self {
        self.ad_type = ad_type.to_string();
        self
    }

    pub fn with_chain(mut self, chain_id: char) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Euclidean distance to another atom, in Angstroms.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    /// The identity of the residue this atom belongs to (name plus sequence number).
    pub fn residue_identity(&self) -> ResidueIdentity {
        ResidueIdentity::new(&self.residue_name, self.residue_number)
    }
}
