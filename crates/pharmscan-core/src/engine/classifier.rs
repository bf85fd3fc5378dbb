use crate::core::models::interaction::InteractionCandidate;
use crate::core::models::ligand::LigandPoseSet;
use crate::core::models::receptor::Receptor;
use crate::core::rules::rulebook::{InteractionRule, standard_rulebook};
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::iproduct;
use tracing::{debug, info, instrument};

/// Evaluates receptor/ligand atom pairs against a rulebook.
///
/// Rules are independent of each other: one atom pair yields one candidate per rule
/// it satisfies. Emission order carries no meaning.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'r> {
    rules: &'r [InteractionRule],
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(standard_rulebook())
    }
}

impl<'r> Classifier<'r> {
    pub fn new(rules: &'r [InteractionRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r [InteractionRule] {
        self.rules
    }

    pub fn classify<'a>(
        &self,
        receptor: &'a Receptor,
        ligands: &'a LigandPoseSet,
    ) -> Vec<InteractionCandidate<'a>> {
        self.classify_with_progress(receptor, ligands, &ProgressReporter::new())
    }

    #[instrument(skip_all, name = "classification")]
    pub fn classify_with_progress<'a>(
        &self,
        receptor: &'a Receptor,
        ligands: &'a LigandPoseSet,
        reporter: &ProgressReporter,
    ) -> Vec<InteractionCandidate<'a>> {
        reporter.report(Progress::TaskStart {
            total_steps: self.rules.len() as u64,
        });

        let mut candidates = Vec::new();
        for rule in self.rules {
            let before = candidates.len();
            candidates.extend(apply_rule(rule, receptor, ligands));
            debug!(
                rule = rule.name,
                kind = %rule.kind,
                found = candidates.len() - before,
                "Rule evaluated."
            );
            reporter.report(Progress::TaskIncrement { label: rule.name });
        }

        reporter.report(Progress::TaskFinish);
        info!(
            candidates = candidates.len(),
            receptor_atoms = receptor.len(),
            ligand_atoms = ligands.atom_count(),
            "Classification complete."
        );
        candidates
    }
}

/// Applies one rule to every receptor/ligand atom pair.
///
/// The rule's predicates first narrow both atom lists; [`InteractionRule::evaluate`]
/// then decides each remaining pair.
pub fn apply_rule<'a>(
    rule: &InteractionRule,
    receptor: &'a Receptor,
    ligands: &'a LigandPoseSet,
) -> Vec<InteractionCandidate<'a>> {
    let receptor_atoms: Vec<_> = receptor
        .atoms()
        .iter()
        .filter(|atom| (rule.receptor)(atom))
        .collect();
    if receptor_atoms.is_empty() {
        return Vec::new();
    }
    let ligand_atoms: Vec<_> = ligands.atoms().filter(|(_, atom)| (rule.ligand)(atom)).collect();

    iproduct!(receptor_atoms, ligand_atoms)
        .filter_map(|(receptor_atom, (pose, ligand_atom))| {
            rule.evaluate(receptor_atom, ligand_atom)
                .map(|distance| InteractionCandidate {
                    kind: rule.kind,
                    distance,
                    receptor_atom,
                    ligand_atom,
                    pose,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::rules::kind::InteractionKind;
    use nalgebra::Point3;

    fn single_pose(atoms: Vec<Atom>) -> LigandPoseSet {
        LigandPoseSet::from_poses(vec![atoms])
    }

    #[test]
    fn lysine_nitrogen_and_negative_oxygen_form_one_ionic_candidate() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "NZ", "LYS", 47, Point3::origin()).with_ad_type("N"),
        ]);
        let ligands = single_pose(vec![
            Atom::new(5, "O1", "UNL", 1, Point3::new(3.0, 0.0, 0.0))
                .with_ad_type("O")
                .with_charge(-0.02),
        ]);

        let candidates = Classifier::default().classify(&receptor, &ligands);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, InteractionKind::PositiveIonNegativePartial);
        assert!((candidates[0].distance - 3.0).abs() < 1e-12);
        assert_eq!(candidates[0].pose, 1);
    }

    #[test]
    fn hydrogen_bond_requires_distance_inside_window() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "O", "GLY", 3, Point3::origin()).with_ad_type("OA"),
        ]);
        let near = single_pose(vec![
            Atom::new(9, "H1", "UNL", 1, Point3::new(0.0, 0.0, 3.0)).with_ad_type("HD"),
        ]);
        let far = single_pose(vec![
            Atom::new(9, "H1", "UNL", 1, Point3::new(0.0, 0.0, 4.0)).with_ad_type("HD"),
        ]);

        let classifier = Classifier::default();
        let found = classifier.classify(&receptor, &near);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, InteractionKind::HydrogenBond);
        assert!((found[0].distance - 3.0).abs() < 1e-12);

        assert!(classifier.classify(&receptor, &far).is_empty());
    }

    #[test]
    fn reversed_hydrogen_bond_is_detected() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "HG", "SER", 8, Point3::origin()).with_ad_type("HD"),
        ]);
        let ligands = single_pose(vec![
            Atom::new(2, "N3", "UNL", 1, Point3::new(2.5, 0.0, 0.0)).with_ad_type("NA"),
        ]);

        let candidates = Classifier::default().classify(&receptor, &ligands);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, InteractionKind::HydrogenBond);
    }

    #[test]
    fn boundary_distances_never_qualify() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "NZ", "LYS", 47, Point3::origin()).with_ad_type("N"),
        ]);
        for x in [1.4, 5.6] {
            let ligands = single_pose(vec![
                Atom::new(5, "O1", "UNL", 1, Point3::new(x, 0.0, 0.0))
                    .with_ad_type("OA")
                    .with_charge(-0.5),
            ]);
            assert!(
                Classifier::default()
                    .classify(&receptor, &ligands)
                    .is_empty(),
                "distance {x} should be excluded"
            );
        }
    }

    #[test]
    fn one_pair_can_satisfy_several_rules() {
        // A negatively charged serine oxygen with a positively polarised donor hydrogen
        // qualifies both as a hydrogen bond and as a dipole-dipole contact.
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "OG", "SER", 12, Point3::origin())
                .with_ad_type("OA")
                .with_charge(-0.39),
        ]);
        let ligands = single_pose(vec![
            Atom::new(3, "H2", "UNL", 1, Point3::new(0.0, 2.8, 0.0))
                .with_ad_type("HD")
                .with_charge(0.21),
        ]);

        let mut kinds: Vec<_> = Classifier::default()
            .classify(&receptor, &ligands)
            .iter()
            .map(|c| c.kind)
            .collect();
        kinds.sort();
        assert_eq!(
            kinds,
            vec![InteractionKind::HydrogenBond, InteractionKind::DipoleDipole]
        );
    }

    #[test]
    fn negative_ion_rule_is_evaluated_for_every_ligand_atom() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "OE1", "GLU", 20, Point3::origin())
                .with_ad_type("OA")
                .with_charge(-0.65),
        ]);
        let ligands = LigandPoseSet::from_poses(vec![
            vec![
                Atom::new(1, "N1", "UNL", 1, Point3::new(4.0, 0.0, 0.0))
                    .with_ad_type("N")
                    .with_charge(0.3),
                Atom::new(2, "N2", "UNL", 1, Point3::new(0.0, 4.0, 0.0))
                    .with_ad_type("N")
                    .with_charge(0.3),
            ],
            vec![
                Atom::new(1, "N1", "UNL", 1, Point3::new(0.0, 0.0, 4.5))
                    .with_ad_type("N")
                    .with_charge(0.3),
            ],
        ]);

        let ionic: Vec<_> = Classifier::default()
            .classify(&receptor, &ligands)
            .into_iter()
            .filter(|c| c.kind == InteractionKind::NegativeIonPositivePartial)
            .map(|c| (c.pose, c.ligand_atom.serial))
            .collect();
        assert_eq!(ionic, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn hydrophobic_contact_requires_ligand_aromatic_carbon() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "CD1", "LEU", 80, Point3::origin()).with_ad_type("C"),
        ]);
        let ligands = single_pose(vec![
            Atom::new(1, "C4", "UNL", 1, Point3::new(4.0, 0.0, 0.0)).with_ad_type("A"),
            Atom::new(2, "C5", "UNL", 1, Point3::new(4.0, 0.0, 0.0)).with_ad_type("C"),
        ]);

        let candidates = Classifier::default().classify(&receptor, &ligands);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, InteractionKind::Hydrophobic);
        assert_eq!(candidates[0].ligand_atom.name, "C4");
    }

    #[test]
    fn custom_rulebook_limits_classification() {
        let hydrophobic_only: Vec<InteractionRule> = standard_rulebook()
            .iter()
            .copied()
            .filter(|r| r.kind == InteractionKind::Hydrophobic)
            .collect();
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "NZ", "LYS", 47, Point3::origin()).with_ad_type("N"),
        ]);
        let ligands = single_pose(vec![
            Atom::new(5, "O1", "UNL", 1, Point3::new(3.0, 0.0, 0.0))
                .with_ad_type("OA")
                .with_charge(-0.3),
        ]);

        let classifier = Classifier::new(&hydrophobic_only);
        assert_eq!(classifier.rules().len(), 1);
        assert!(classifier.classify(&receptor, &ligands).is_empty());
    }

    #[test]
    fn classify_reports_one_step_per_rule() {
        use std::sync::atomic::{AtomicU64, Ordering};
        let steps = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::TaskIncrement { .. } = event {
                steps.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let receptor = Receptor::default();
        let ligands = LigandPoseSet::default();
        Classifier::default().classify_with_progress(&receptor, &ligands, &reporter);
        assert_eq!(
            steps.load(Ordering::SeqCst),
            standard_rulebook().len() as u64
        );
    }

    #[test]
    fn classify_labels_each_step_with_its_rule_name() {
        let labels = std::sync::Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                if let Progress::TaskIncrement { label } = event {
                    labels.lock().unwrap().push(label);
                }
            }));
            Classifier::default().classify_with_progress(
                &Receptor::default(),
                &LigandPoseSet::default(),
                &reporter,
            );
        }
        let expected: Vec<_> = standard_rulebook().iter().map(|rule| rule.name).collect();
        assert_eq!(labels.into_inner().unwrap(), expected);
    }

    #[test]
    fn apply_rule_emits_exactly_the_pairs_the_rule_accepts() {
        let receptor = Receptor::from_atoms(vec![
            Atom::new(1, "OG", "SER", 12, Point3::origin())
                .with_ad_type("OA")
                .with_charge(-0.39),
            Atom::new(2, "NZ", "LYS", 47, Point3::new(0.0, 0.0, 6.0)).with_ad_type("N"),
        ]);
        let ligands = LigandPoseSet::from_poses(vec![
            vec![
                Atom::new(1, "H1", "UNL", 1, Point3::new(0.0, 2.8, 0.0)).with_ad_type("HD"),
                Atom::new(2, "H2", "UNL", 1, Point3::new(0.0, 3.9, 0.0)).with_ad_type("HD"),
            ],
            vec![Atom::new(1, "H1", "UNL", 1, Point3::new(2.2, 0.0, 0.0)).with_ad_type("HD")],
        ]);

        for rule in standard_rulebook() {
            let emitted: Vec<_> = apply_rule(rule, &receptor, &ligands)
                .iter()
                .map(|c| (c.receptor_atom.serial, c.pose, c.ligand_atom.serial, c.distance))
                .collect();
            let ligand_atoms: Vec<_> = ligands.atoms().collect();
            let expected: Vec<_> = iproduct!(receptor.atoms(), ligand_atoms)
                .filter_map(|(r, (pose, l))| {
                    rule.evaluate(r, l).map(|d| (r.serial, pose, l.serial, d))
                })
                .collect();
            assert_eq!(emitted, expected, "rule '{}'", rule.name);
        }

        let hbond = &standard_rulebook()[2];
        let found = apply_rule(hbond, &receptor, &ligands);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.kind == InteractionKind::HydrogenBond));
    }
}
