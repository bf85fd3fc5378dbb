use crate::core::models::interaction::RetainedInteraction;
use crate::core::models::pharmacophore::Pharmacophore;
use crate::core::models::residue::ResidueIdentity;
use crate::engine::config::validate_pharmacophore_size;
use crate::engine::dedup::RetainedSet;
use crate::engine::error::EngineError;
use std::collections::HashSet;
use tracing::{info, instrument};

/// Lazily enumerates pharmacophores of `k` retained interactions on `k` distinct
/// residues.
///
/// Selections are walked depth-first in index order, so a branch is abandoned as soon
/// as it repeats a residue. Each selection comes out as an index-ascending
/// combination, which is exactly the first-seen ordering of that member set; a later
/// selection whose sorted residue set was already accepted is skipped as a duplicate.
#[derive(Debug, Clone)]
pub struct PharmacophoreGenerator<'a> {
    interactions: Vec<&'a RetainedInteraction>,
    size: usize,
    stack: Vec<usize>,
    cursor: usize,
    exhausted: bool,
    accepted: HashSet<Vec<ResidueIdentity>>,
}

impl<'a> PharmacophoreGenerator<'a> {
    pub fn new(retained: &'a RetainedSet, size: usize) -> Result<Self, EngineError> {
        Self::from_interactions(retained.iter().collect(), size)
    }

    pub fn from_interactions(
        interactions: Vec<&'a RetainedInteraction>,
        size: usize,
    ) -> Result<Self, EngineError> {
        let size = validate_pharmacophore_size(size)?;
        Ok(Self {
            interactions,
            size,
            stack: Vec::with_capacity(size),
            cursor: 0,
            exhausted: false,
            accepted: HashSet::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rewinds the enumeration to its first pharmacophore.
    pub fn restart(&mut self) {
        self.stack.clear();
        self.cursor = 0;
        self.exhausted = false;
        self.accepted.clear();
    }

    fn residue_taken(&self, index: usize) -> bool {
        let residue = self.interactions[index].residue();
        self.stack
            .iter()
            .any(|&chosen| self.interactions[chosen].residue() == residue)
    }

    /// Moves the stack to the next selection of `size` interactions on distinct
    /// residues. Returns `false` once every selection has been visited.
    fn advance(&mut self) -> bool {
        let n = self.interactions.len();

        if self.stack.len() == self.size {
            if let Some(last) = self.stack.pop() {
                self.cursor = last + 1;
            }
        }

        loop {
            if self.stack.len() == self.size {
                return true;
            }
            let still_needed = self.size - self.stack.len();
            if self.cursor + still_needed > n {
                match self.stack.pop() {
                    Some(last) => self.cursor = last + 1,
                    None => return false,
                }
                continue;
            }

            let candidate = self.cursor;
            self.cursor += 1;
            if !self.residue_taken(candidate) {
                self.stack.push(candidate);
            }
        }
    }

    fn residue_set(&self) -> Vec<ResidueIdentity> {
        let mut residues: Vec<ResidueIdentity> = self
            .stack
            .iter()
            .map(|&i| self.interactions[i].residue().clone())
            .collect();
        residues.sort();
        residues
    }
}

impl Iterator for PharmacophoreGenerator<'_> {
    type Item = Pharmacophore;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            if !self.advance() {
                self.exhausted = true;
                break;
            }
            if self.accepted.insert(self.residue_set()) {
                let members = self
                    .stack
                    .iter()
                    .map(|&i| self.interactions[i].clone())
                    .collect();
                return Some(Pharmacophore::new(members));
            }
        }
        None
    }
}

/// Collects every pharmacophore of the given size.
///
/// # Errors
///
/// Returns [`EngineError::Config`] when `size` is zero. Fewer retained interactions
/// than `size` is not an error and yields an empty list.
#[instrument(skip_all, name = "generation", fields(size = size))]
pub fn generate(retained: &RetainedSet, size: usize) -> Result<Vec<Pharmacophore>, EngineError> {
    let pharmacophores: Vec<Pharmacophore> = PharmacophoreGenerator::new(retained, size)?.collect();
    info!(
        retained = retained.len(),
        accepted = pharmacophores.len(),
        "Pharmacophore generation complete."
    );
    Ok(pharmacophores)
}
