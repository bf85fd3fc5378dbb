use phf::{Set, phf_set};

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD",
};

// Basic side chains carrying a formal positive charge at physiological pH.
static CATIONIC_RESIDUES: Set<&'static str> = phf_set! { "ARG", "LYS" };

// Acidic side chains carrying a formal negative charge at physiological pH.
static ANIONIC_RESIDUES: Set<&'static str> = phf_set! { "ASP", "GLU" };

static POLAR_RESIDUES: Set<&'static str> = phf_set! {
    "SER", "THR", "CYS", "ASN", "GLN",
};

static HYDROPHOBIC_RESIDUES: Set<&'static str> = phf_set! {
    "ALA", "VAL", "ILE", "LEU", "PHE", "MET", "TYR", "TRP",
};

static HBOND_ACCEPTOR_TYPES: Set<&'static str> = phf_set! { "NA", "OA", "F", "S" };

static POLAR_ATOM_TYPES: Set<&'static str> = phf_set! { "OA", "S", "N" };

pub const HBOND_DONOR_HYDROGEN_TYPE: &str = "HD";
pub const AROMATIC_CARBON_TYPE: &str = "A";
pub const ALIPHATIC_CARBON_TYPE: &str = "C";
pub const NITROGEN_TYPE: &str = "N";
pub const ACCEPTOR_OXYGEN_TYPE: &str = "OA";

pub fn is_water_residue(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(residue_name.trim())
}

pub fn is_cationic_residue(residue_name: &str) -> bool {
    CATIONIC_RESIDUES.contains(residue_name.trim())
}

pub fn is_anionic_residue(residue_name: &str) -> bool {
    ANIONIC_RESIDUES.contains(residue_name.trim())
}

pub fn is_polar_residue(residue_name: &str) -> bool {
    POLAR_RESIDUES.contains(residue_name.trim())
}

pub fn is_hydrophobic_residue(residue_name: &str) -> bool {
    HYDROPHOBIC_RESIDUES.contains(residue_name.trim())
}

pub fn is_hbond_acceptor_type(ad_type: &str) -> bool {
    HBOND_ACCEPTOR_TYPES.contains(ad_type.trim())
}

pub fn is_hbond_donor_hydrogen_type(ad_type: &str) -> bool {
    ad_type.trim() == HBOND_DONOR_HYDROGEN_TYPE
}

pub fn is_polar_atom_type(ad_type: &str) -> bool {
    POLAR_ATOM_TYPES.contains(ad_type.trim())
}

pub fn is_nitrogen_type(ad_type: &str) -> bool {
    ad_type.trim() == NITROGEN_TYPE
}

pub fn is_acceptor_oxygen_type(ad_type: &str) -> bool {
    ad_type.trim() == ACCEPTOR_OXYGEN_TYPE
}

pub fn is_aliphatic_carbon_type(ad_type: &str) -> bool {
    ad_type.trim() == ALIPHATIC_CARBON_TYPE
}

pub fn is_aromatic_carbon_type(ad_type: &str) -> bool {
    ad_type.trim() == AROMATIC_CARBON_TYPE
}
