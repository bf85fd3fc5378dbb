//! # Core Models Module
//!
//! Data structures describing the two inputs of a pharmacophore analysis: the
//! receptor and the set of docked ligand poses.
//!
//! ## Key Components
//!
//! - [`atom`] - A single parsed atom record with coordinates, partial charge and AutoDock type
//! - [`residue`] - The residue identity used to group competing receptor contacts
//! - [`receptor`] - The receptor atoms (water removed) and their distinct residues
//! - [`ligand`] - Docked ligand poses, each an ordered list of atoms
//! - [`interaction`] - Classified contacts, their competition keys and the retained survivors
//! - [`pharmacophore`] - A scored combination of retained contacts on distinct residues
//!
//! Atoms are created once by a reader and never mutated afterwards; every later stage
//! only borrows them.
//!
//! ```ignore
//! use pharmscan::core::models::{atom::Atom, receptor::Receptor};
//!
//! let lys = Atom::new(1, "NZ", "LYS", 47, Point3::new(0.0, 0.0, 0.0)).with_ad_type("N");
//! let receptor = Receptor::from_atoms(vec![lys]);
//! assert_eq!(receptor.residues()[0].to_string(), "LYS47");
//! ```

pub mod atom;
pub mod interaction;
pub mod ligand;
pub mod pharmacophore;
pub mod receptor;
pub mod residue;
