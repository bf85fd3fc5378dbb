use crate::core::models::interaction::{InteractionCandidate, InteractionKey, RetainedInteraction};
use crate::core::models::residue::ResidueIdentity;
use crate::core::rules::kind::InteractionKind;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::{info, instrument, trace};

/// The unit competing candidates are resolved over: one residue, one interaction
/// kind, one ligand pose. At most one retained interaction occupies each slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueSlot {
    pub residue: ResidueIdentity,
    pub kind: InteractionKind,
    pub pose: usize,
}

impl From<&InteractionKey> for ResidueSlot {
    fn from(key: &InteractionKey) -> Self {
        Self {
            residue: key.residue.clone(),
            kind: key.kind,
            pose: key.pose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The slot was empty.
    Inserted,
    /// The incoming interaction was shorter and evicted the previous one.
    Replaced,
    /// The existing interaction was at least as short and stays.
    Kept,
}

/// The retained-interaction map produced by deduplication, ordered by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetainedSet {
    slots: BTreeMap<ResidueSlot, RetainedInteraction>,
}

impl RetainedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace-if-better merge of one interaction into its slot. Ties keep the
    /// interaction that arrived first.
    pub fn merge(&mut self, incoming: RetainedInteraction) -> MergeOutcome {
        match self.slots.entry(ResidueSlot::from(&incoming.key)) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
                MergeOutcome::Inserted
            }
            Entry::Occupied(mut slot) => {
                if incoming.distance < slot.get().distance {
                    slot.insert(incoming);
                    MergeOutcome::Replaced
                } else {
                    MergeOutcome::Kept
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RetainedInteraction> + '_ {
        self.slots.values()
    }

    pub fn get(&self, key: &InteractionKey) -> Option<&RetainedInteraction> {
        self.slots
            .get(&ResidueSlot::from(key))
            .filter(|retained| &retained.key == key)
    }

    pub fn get_slot(&self, slot: &ResidueSlot) -> Option<&RetainedInteraction> {
        self.slots.get(slot)
    }

    pub fn to_vec(&self) -> Vec<RetainedInteraction> {
        self.slots.values().cloned().collect()
    }
}

impl FromIterator<RetainedInteraction> for RetainedSet {
    fn from_iter<I: IntoIterator<Item = RetainedInteraction>>(iter: I) -> Self {
        let mut set = Self::new();
        for interaction in iter {
            set.merge(interaction);
        }
        set
    }
}

/// Folds classified candidates into the retained-interaction map.
///
/// A residue may keep several interactions as long as they differ in kind or pose;
/// within one (residue, kind, pose) slot only the shortest contact survives.
#[instrument(skip_all, name = "deduplication")]
pub fn deduplicate(candidates: &[InteractionCandidate<'_>]) -> RetainedSet {
    let mut set = RetainedSet::new();
    let (mut replaced, mut kept) = (0usize, 0usize);

    for candidate in candidates {
        let incoming = candidate.to_retained();
        let outcome = set.merge(incoming);
        trace!(
            residue = %candidate.receptor_atom.residue_identity(),
            kind = %candidate.kind,
            pose = candidate.pose,
            distance = candidate.distance,
            ?outcome,
            "Candidate merged."
        );
        match outcome {
            MergeOutcome::Replaced => replaced += 1,
            MergeOutcome::Kept => kept += 1,
            MergeOutcome::Inserted => {}
        }
    }

    info!(
        candidates = candidates.len(),
        retained = set.len(),
        replaced,
        discarded = kept,
        "Deduplication complete."
    );
    set
}
