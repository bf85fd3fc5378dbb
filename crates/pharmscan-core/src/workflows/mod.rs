//! # Workflows Module
//!
//! High-level entry points that run the complete pharmacophore analysis over a
//! parsed receptor and its docked ligand poses.
//!
//! - **Analysis Workflow** ([`analyze`]) - classification, deduplication,
//!   pharmacophore generation and ranking, with progress events and structured logs
//!   for every stage.

pub mod analyze;
