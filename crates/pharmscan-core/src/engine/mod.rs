//! # Engine Module
//!
//! The four analysis stages and the machinery around them.
//!
//! ## Architecture
//!
//! - **Classification** ([`classifier`]) - Evaluates every receptor/ligand atom pair against the rulebook
//! - **Deduplication** ([`dedup`]) - Folds candidates into one retained contact per residue, kind and pose
//! - **Generation** ([`generator`]) - Lazily enumerates scored pharmacophores over distinct residues
//! - **Ranking** ([`ranker`]) - Orders pharmacophores by score and serves top-N requests
//! - **Configuration** ([`config`]) - Analysis parameters with validation
//! - **Error Handling** ([`error`]) - Engine-level error type
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//!
//! Every stage is a pure transform over an immutable input; no state is shared
//! between stages.

pub mod classifier;
pub mod config;
pub mod dedup;
pub mod error;
pub mod generator;
pub mod progress;
pub mod ranker;
