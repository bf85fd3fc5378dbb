//! # pharmscan Core Library
//!
//! A library for mining candidate pharmacophores out of molecular docking output:
//! it classifies non-covalent receptor–ligand contacts, collapses competing contacts
//! into one representative per residue and interaction kind, and enumerates and ranks
//! combinations of those contacts across distinct receptor residues.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Atom`, `Receptor`,
//!   `LigandPoseSet`), the interaction rulebook expressed as data, and file I/O
//!   collaborators (PDBQT reader, CSV report writer).
//!
//! - **[`engine`]: The Logic Core.** The classifier, the deduplicator with its
//!   replace-if-better merge, the lazy pharmacophore generator and the ranker, along
//!   with configuration, errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties the stages together into a single
//!   analysis run over one receptor and one set of docked poses.

pub mod core;
pub mod engine;
pub mod workflows;
