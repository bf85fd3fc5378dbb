//! # Core Module
//!
//! Fundamental building blocks for pharmacophore analysis: atom and structure models,
//! the chemical vocabularies used by the interaction rules, the rulebook itself, and
//! file I/O.
//!
//! - **Structure Representation** ([`models`]) - Atoms, receptors, ligand poses and residue identities
//! - **Interaction Rules** ([`rules`]) - Interaction kinds, distance windows and the rulebook
//! - **File I/O** ([`io`]) - PDBQT reading and CSV report writing
//! - **Chemical Vocabulary** ([`utils`]) - Residue classes and AutoDock atom type sets

pub mod io;
pub mod models;
pub mod rules;
pub mod utils;
