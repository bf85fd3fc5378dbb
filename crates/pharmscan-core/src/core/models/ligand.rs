use super::atom::Atom;

/// One docked conformation of the ligand.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// 1-based index of the pose in file order.
    pub index: usize,
    pub atoms: Vec<Atom>,
}

/// All docked poses of a ligand from a single docking result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LigandPoseSet {
    poses: Vec<Pose>,
}

impl LigandPoseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pose set from per-pose atom lists, numbering poses from 1.
    pub fn from_poses(poses: impl IntoIterator<Item = Vec<Atom>>) -> Self {
        let mut set = Self::new();
        for atoms in poses {
            set.push_pose(atoms);
        }
        set
    }

    /// Appends a pose and returns its index.
    pub fn push_pose(&mut self, atoms: Vec<Atom>) -> usize {
        let index = self.poses.len() + 1;
        self.poses.push(Pose { index, atoms });
        index
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn pose_count(&self) -> usize {
        self.poses.len()
    }

    pub fn atom_count(&self) -> usize {
        self.poses.iter().map(|p| p.atoms.len()).sum()
    }

    /// Every ligand atom across all poses, paired with its pose index.
    pub fn atoms(&self) -> impl Iterator<Item = (usize, &Atom)> + '_ {
        self.poses
            .iter()
            .flat_map(|pose| pose.atoms.iter().map(move |atom| (pose.index, atom)))
    }
}
