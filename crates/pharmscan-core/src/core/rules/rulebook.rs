use super::kind::InteractionKind;
use super::window::DistanceWindow;
use crate::core::models::atom::Atom;
use crate::core::utils::identifiers::{
    is_acceptor_oxygen_type, is_aliphatic_carbon_type, is_anionic_residue,
    is_aromatic_carbon_type, is_cationic_residue, is_hbond_acceptor_type,
    is_hbond_donor_hydrogen_type, is_hydrophobic_residue, is_nitrogen_type, is_polar_atom_type,
    is_polar_residue,
};

/// Minimum magnitude of a partial charge to count as polarised.
pub const PARTIAL_CHARGE_THRESHOLD: f64 = 0.010;
/// A carboxylate oxygen must carry at least this much negative charge to act as an anion.
pub const ANION_CHARGE_THRESHOLD: f64 = -0.3;

pub const ION_WINDOW: DistanceWindow = DistanceWindow::new(1.4, 5.6);
pub const HBOND_WINDOW: DistanceWindow = DistanceWindow::new(2.1, 3.9);
pub const DIPOLE_WINDOW: DistanceWindow = DistanceWindow::new(1.4, 5.6);
pub const HYDROPHOBIC_WINDOW: DistanceWindow = DistanceWindow::new(1.0, 5.9);

pub type AtomPredicate = fn(&Atom) -> bool;

/// A single classification rule: a receptor atom and a ligand atom interact with the
/// given kind when both predicates hold and their distance lies inside the window.
#[derive(Debug, Clone, Copy)]
pub struct InteractionRule {
    pub kind: InteractionKind,
    pub name: &'static str,
    pub receptor: AtomPredicate,
    pub ligand: AtomPredicate,
    pub window: DistanceWindow,
}

impl InteractionRule {
    /// Returns the pair distance when the rule fires for this atom pair.
    pub fn evaluate(&self, receptor_atom: &Atom, ligand_atom: &Atom) -> Option<f64> {
        if !(self.receptor)(receptor_atom) || !(self.ligand)(ligand_atom) {
            return None;
        }
        let distance = receptor_atom.distance_to(ligand_atom);
        self.window.contains(distance).then_some(distance)
    }
}

fn is_non_carbon_name(atom: &Atom) -> bool {
    atom.name.trim() != "C"
}

fn cationic_nitrogen(atom: &Atom) -> bool {
    is_cationic_residue(&atom.residue_name) && is_nitrogen_type(&atom.ad_type)
}

fn negative_partial_ligand(atom: &Atom) -> bool {
    is_non_carbon_name(atom) && atom.partial_charge < -PARTIAL_CHARGE_THRESHOLD
}

fn anionic_oxygen(atom: &Atom) -> bool {
    is_anionic_residue(&atom.residue_name)
        && is_acceptor_oxygen_type(&atom.ad_type)
        && atom.partial_charge < ANION_CHARGE_THRESHOLD
}

fn positive_partial_ligand(atom: &Atom) -> bool {
    is_non_carbon_name(atom) && atom.partial_charge > PARTIAL_CHARGE_THRESHOLD
}

fn hbond_acceptor(atom: &Atom) -> bool {
    is_hbond_acceptor_type(&atom.ad_type)
}

fn hbond_donor_hydrogen(atom: &Atom) -> bool {
    is_hbond_donor_hydrogen_type(&atom.ad_type)
}

fn polar_side_chain_atom(atom: &Atom) -> bool {
    is_polar_residue(&atom.residue_name)
        && is_polar_atom_type(&atom.ad_type)
        && atom.partial_charge < -PARTIAL_CHARGE_THRESHOLD
}

fn positively_polarised(atom: &Atom) -> bool {
    atom.partial_charge > PARTIAL_CHARGE_THRESHOLD
}

fn hydrophobic_carbon(atom: &Atom) -> bool {
    is_hydrophobic_residue(&atom.residue_name) && is_aliphatic_carbon_type(&atom.ad_type)
}

fn ligand_aromatic_carbon(atom: &Atom) -> bool {
    is_aromatic_carbon_type(&atom.ad_type)
}

static STANDARD_RULEBOOK: [InteractionRule; 6] = [
    InteractionRule {
        kind: InteractionKind::PositiveIonNegativePartial,
        name: "cationic nitrogen / negative ligand atom",
        receptor: cationic_nitrogen,
        ligand: negative_partial_ligand,
        window: ION_WINDOW,
    },
    InteractionRule {
        kind: InteractionKind::NegativeIonPositivePartial,
        name: "anionic oxygen / positive ligand atom",
        receptor: anionic_oxygen,
        ligand: positive_partial_ligand,
        window: ION_WINDOW,
    },
    InteractionRule {
        kind: InteractionKind::HydrogenBond,
        name: "receptor acceptor / ligand donor hydrogen",
        receptor: hbond_acceptor,
        ligand: hbond_donor_hydrogen,
        window: HBOND_WINDOW,
    },
    InteractionRule {
        kind: InteractionKind::HydrogenBond,
        name: "receptor donor hydrogen / ligand acceptor",
        receptor: hbond_donor_hydrogen,
        ligand: hbond_acceptor,
        window: HBOND_WINDOW,
    },
    InteractionRule {
        kind: InteractionKind::DipoleDipole,
        name: "polar side chain / positive ligand atom",
        receptor: polar_side_chain_atom,
        ligand: positively_polarised,
        window: DIPOLE_WINDOW,
    },
    InteractionRule {
        kind: InteractionKind::Hydrophobic,
        name: "hydrophobic carbon / ligand aromatic carbon",
        receptor: hydrophobic_carbon,
        ligand: ligand_aromatic_carbon,
        window: HYDROPHOBIC_WINDOW,
    },
];

/// The built-in rulebook used by the default classifier.
pub fn standard_rulebook() -> &'static [InteractionRule] {
    &STANDARD_RULEBOOK
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn receptor_atom(res: &str, ad_type: &str, charge: f64) -> Atom {
        Atom::new(1, "X1", res, 10, Point3::origin())
            .with_ad_type(ad_type)
            .with_charge(charge)
    }

    fn ligand_atom(name: &str, ad_type: &str, charge: f64, z: f64) -> Atom {
        Atom::new(1, name, "UNL", 1, Point3::new(0.0, 0.0, z))
            .with_ad_type(ad_type)
            .with_charge(charge)
    }

    fn rule_for(kind: InteractionKind) -> &'static InteractionRule {
        standard_rulebook()
            .iter()
            .find(|r| r.kind == kind)
            .unwrap()
    }

    #[test]
    fn standard_rulebook_covers_every_kind() {
        for kind in InteractionKind::ALL {
            assert!(standard_rulebook().iter().any(|r| r.kind == kind));
        }
        assert_eq!(
            standard_rulebook()
                .iter()
                .filter(|r| r.kind == InteractionKind::HydrogenBond)
                .count(),
            2
        );
    }

    #[test]
    fn positive_ion_rule_rejects_a_ligand_atom_named_c() {
        let rule = rule_for(InteractionKind::PositiveIonNegativePartial);
        let lys = receptor_atom("LYS", "N", 0.0);
        assert!(rule.evaluate(&lys, &ligand_atom("C", "C", -0.2, 3.0)).is_none());
        assert!(rule.evaluate(&lys, &ligand_atom("C1", "C", -0.2, 3.0)).is_some());
    }

    #[test]
    fn positive_ion_rule_requires_a_negative_ligand_charge_beyond_threshold() {
        let rule = rule_for(InteractionKind::PositiveIonNegativePartial);
        let arg = receptor_atom("ARG", "N", 0.0);
        assert!(rule.evaluate(&arg, &ligand_atom("O1", "OA", -0.010, 3.0)).is_none());
        assert!(rule.evaluate(&arg, &ligand_atom("O1", "OA", -0.011, 3.0)).is_some());
    }

    #[test]
    fn negative_ion_rule_requires_a_strongly_charged_receptor_oxygen() {
        let rule = rule_for(InteractionKind::NegativeIonPositivePartial);
        let ligand = ligand_atom("N1", "N", 0.2, 3.0);
        assert!(rule.evaluate(&receptor_atom("GLU", "OA", -0.65), &ligand).is_some());
        assert!(rule.evaluate(&receptor_atom("ASP", "OA", -0.65), &ligand).is_some());
        assert!(rule.evaluate(&receptor_atom("ASP", "OA", -0.2), &ligand).is_none());
        assert!(rule.evaluate(&receptor_atom("ASP", "N", -0.65), &ligand).is_none());
    }

    #[test]
    fn dipole_rule_requires_negative_receptor_and_positive_ligand_charge() {
        let rule = rule_for(InteractionKind::DipoleDipole);
        let ser = receptor_atom("SER", "OA", -0.4);
        assert!(rule.evaluate(&ser, &ligand_atom("H1", "HD", 0.2, 3.0)).is_some());
        assert!(rule.evaluate(&ser, &ligand_atom("H1", "HD", 0.005, 3.0)).is_none());
        let neutral_ser = receptor_atom("SER", "OA", 0.0);
        assert!(rule.evaluate(&neutral_ser, &ligand_atom("H1", "HD", 0.2, 3.0)).is_none());
    }

    #[test]
    fn hydrophobic_rule_uses_its_wider_window() {
        let rule = rule_for(InteractionKind::Hydrophobic);
        let leu = receptor_atom("LEU", "C", 0.0);
        assert!(rule.evaluate(&leu, &ligand_atom("C3", "A", 0.0, 5.8)).is_some());
        assert!(rule.evaluate(&leu, &ligand_atom("C3", "A", 0.0, 5.9)).is_none());
        assert!(rule.evaluate(&leu, &ligand_atom("C3", "C", 0.0, 4.0)).is_none());
    }

    #[test]
    fn evaluate_returns_the_pair_distance() {
        let rule = rule_for(InteractionKind::HydrogenBond);
        let distance = rule
            .evaluate(
                &receptor_atom("SER", "OA", -0.4),
                &ligand_atom("H1", "HD", 0.2, 3.0),
            )
            .unwrap();
        assert!((distance - 3.0).abs() < 1e-12);
    }

    #[test]
    fn padded_atom_types_still_match() {
        let ligand = ligand_atom("O1", "OA", -0.5, 3.0);
        let lys = receptor_atom("LYS", " N", 0.0);
        assert!(rule_for(InteractionKind::PositiveIonNegativePartial)
            .evaluate(&lys, &ligand)
            .is_some());

        let asp = receptor_atom("ASP", "OA ", -0.65);
        assert!(rule_for(InteractionKind::NegativeIonPositivePartial)
            .evaluate(&asp, &ligand_atom("N1", "N", 0.2, 3.0))
            .is_some());

        let leu = receptor_atom("LEU", "C ", 0.0);
        assert!(rule_for(InteractionKind::Hydrophobic)
            .evaluate(&leu, &ligand_atom("C3", " A", 0.0, 4.0))
            .is_some());
    }

    #[test]
    fn hydrophobic_rule_names_its_aromatic_ligand_partner() {
        let rule = rule_for(InteractionKind::Hydrophobic);
        assert_eq!(rule.name, "hydrophobic carbon / ligand aromatic carbon");
        let leu = receptor_atom("LEU", "C", 0.0);
        assert!(rule.evaluate(&leu, &ligand_atom("C3", "A", 0.0, 4.0)).is_some());
        assert!(rule.evaluate(&leu, &ligand_atom("C3", "C", 0.0, 4.0)).is_none());
    }
}
