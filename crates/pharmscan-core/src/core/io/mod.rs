//! Provides input/output functionality for docking files and analysis reports.
//!
//! Structures are read from AutoDock PDBQT files through a trait-based interface, and
//! ranked pharmacophores are written out as CSV spreadsheets.

pub mod pdbqt;
pub mod report;
pub mod traits;
