//! Non-covalent interaction rules.
//!
//! Each rule binds an [`kind::InteractionKind`] to a receptor-atom predicate, a
//! ligand-atom predicate and an open [`window::DistanceWindow`]. The rulebook is plain
//! data, so adding an interaction kind means adding an entry, not a branch.

pub mod kind;
pub mod rulebook;
pub mod window;
